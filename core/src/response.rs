// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::*;

/// What a successful call produced
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The parsed response body, unmodified
    Json(Value),

    Binary(Vec<u8>),

    /// Fixed text for endpoints whose body carries nothing useful
    Confirmation(String),
}

impl Payload {
    /// The payload as a JSON value, as handed back to tool callers. Binary
    /// content is not representable and yields `None`.
    pub fn to_json(&self) -> Option<Value> {
        match self {
            Payload::Json(value) => Some(value.clone()),
            Payload::Confirmation(message) => {
                Some(serde_json::json!({ "message": message }))
            }
            Payload::Binary(_) => None,
        }
    }
}

/// Interpret a response according to the endpoint's response kind.
pub fn decode_response(
    endpoint: &Endpoint,
    status: u16,
    body: &[u8],
) -> Result<Payload, Error> {
    if !(200..300).contains(&status) {
        return Err(Error::Remote {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }

    match endpoint.response {
        ResponseKind::Json => Ok(Payload::Json(serde_json::from_slice(body)?)),
        ResponseKind::Binary => Ok(Payload::Binary(body.to_vec())),
        ResponseKind::Confirmation(message) => {
            Ok(Payload::Confirmation(message.to_string()))
        }
    }
}
