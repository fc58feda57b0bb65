// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;
use std::sync::Mutex;

use http::HeaderMap;
use url::form_urlencoded;

use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl MockResponse {
    pub fn json(status: u16, body: Value) -> Self {
        MockResponse {
            status,
            content_type: vault_api_rs::JSON_MEDIA_TYPE.to_string(),
            body: body.to_string().into_bytes(),
        }
    }

    pub fn scim(status: u16, body: Value) -> Self {
        MockResponse {
            content_type: vault_api_rs::SCIM_MEDIA_TYPE.to_string(),
            ..MockResponse::json(status, body)
        }
    }

    pub fn binary(content_type: &str, body: Vec<u8>) -> Self {
        MockResponse { status: 200, content_type: content_type.to_string(), body }
    }

    pub fn to_http_response(&self) -> Result<Response<Body>, http::Error> {
        Response::builder()
            .status(self.status)
            .header("Content-Type", self.content_type.as_str())
            .body(self.body.clone().into())
    }
}

/// A request as the server saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decoded `application/x-www-form-urlencoded` pairs of the body
    pub fn form_pairs(&self) -> Vec<(String, String)> {
        form_urlencoded::parse(&self.body).into_owned().collect()
    }
}

#[derive(Default)]
struct ServerContextState {
    routes: BTreeMap<(String, String), MockResponse>,
    requests: Vec<RecordedRequest>,
}

/// Shared state of the mock server: canned responses keyed by method and
/// path, and a log of every request received.
#[derive(Default)]
pub struct ServerContext {
    session_id: Option<String>,
    state: Mutex<ServerContextState>,
}

impl ServerContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context serving the canned Vault responses under `api_version`
    pub fn with_vault_fixtures(api_version: &str) -> Self {
        let context = Self::new();
        for (method, path, response) in vault_fixtures(api_version) {
            context.respond(method, &path, response);
        }
        context
    }

    /// Answer 401 `INVALID_SESSION_ID` unless `Authorization` matches
    pub fn require_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Script the response for `method` on `path`, replacing any previous
    /// one.
    pub fn respond(&self, method: &str, path: &str, response: MockResponse) {
        let mut state = self.state.lock().unwrap();
        state
            .routes
            .insert((method.to_uppercase(), path.to_string()), response);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Record `request` and pick the response for it.
    pub fn handle(&self, request: RecordedRequest) -> MockResponse {
        let mut state = self.state.lock().unwrap();

        let authorized = match &self.session_id {
            None => true,
            Some(session_id) => {
                request.header("authorization") == Some(session_id.as_str())
            }
        };

        let key = (request.method.clone(), request.path.clone());
        let response = if !authorized {
            invalid_session()
        } else {
            match state.routes.get(&key) {
                Some(response) => response.clone(),
                None => not_found(),
            }
        };

        state.requests.push(request);
        response
    }
}
