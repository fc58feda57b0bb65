// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::*;

use thiserror::Error as ThisError;

/// Broad classes of failure, for callers that branch on the cause without
/// parsing messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// The arguments were rejected before anything was sent
    Validation,

    /// The request never produced a usable response
    Transport,

    /// Vault answered with a non-2xx status
    Remote,
}

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("unknown endpoint {0}")]
    UnknownEndpoint(String),

    #[error("missing required argument {0}")]
    MissingArgument(String),

    #[error("invalid argument {name}: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("reading {path} failed: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The body is kept verbatim; Vault reports failures as JSON documents
    /// that callers may want to parse.
    #[error("{body}")]
    Remote { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument { name: name.to_string(), reason: reason.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownEndpoint(_)
            | Error::MissingArgument(_)
            | Error::InvalidArgument { .. }
            | Error::File { .. } => ErrorKind::Validation,

            Error::Transport(_) | Error::MalformedResponse(_) => {
                ErrorKind::Transport
            }

            Error::Remote { .. } => ErrorKind::Remote,
        }
    }
}

/// The normalized failure handed back to tool callers. Serializes as
/// `{"error": "An error occurred while <action>: <cause>"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    #[serde(skip)]
    pub kind: ErrorKind,

    #[serde(rename = "error")]
    pub message: String,
}

impl Failure {
    pub fn new(action: &str, error: &Error) -> Self {
        Failure {
            kind: error.kind(),
            message: format!("An error occurred while {action}: {error}"),
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Failure {}
