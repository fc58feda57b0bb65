// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use reqwest::multipart::Form;
use reqwest::multipart::Part;
use slog::{debug, error, warn};

use super::*;

/// Invoker turns endpoint descriptors plus arguments into HTTP calls against
/// a Vault, one request per call.
#[derive(Clone)]
pub struct Invoker {
    log: Logger,
    http: reqwest::Client,
    connection: Connection,
}

impl Invoker {
    pub fn new(log: Logger, connection: Connection) -> Self {
        Self::with_client(log, connection, reqwest::Client::new())
    }

    pub fn with_client(
        log: Logger,
        connection: Connection,
        http: reqwest::Client,
    ) -> Self {
        Self { log, http, connection }
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub async fn invoke(
        &self,
        endpoint: &Endpoint,
        args: &Arguments,
    ) -> Result<Payload, Error> {
        let request = prepare(endpoint, &self.connection, args)?;

        debug!(
            self.log,
            "sending request";
            "endpoint" => endpoint.id,
            "method" => %request.method,
            "url" => %request.url
        );

        let builder = self
            .http
            .request(request.method, request.url)
            .headers(request.headers);

        let builder = match request.body {
            PreparedBody::Empty => builder,
            PreparedBody::Form(pairs) => builder.form(&pairs),
            PreparedBody::Multipart(fields) => {
                builder.multipart(multipart_form(fields).await?)
            }
            PreparedBody::Json(document) => builder.body(document.to_string()),
            PreparedBody::Text(text) => builder.body(text),
        };

        let response = builder.send().await.map_err(|e| {
            error!(
                self.log,
                "request failed";
                "endpoint" => endpoint.id,
                "error" => %e
            );
            Error::from(e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!(
            self.log,
            "received response";
            "endpoint" => endpoint.id,
            "status" => status,
            "bytes" => body.len()
        );

        decode_response(endpoint, status, &body).inspect_err(|e| {
            if let Error::Remote { status, .. } = e {
                warn!(
                    self.log,
                    "vault returned an error";
                    "endpoint" => endpoint.id,
                    "status" => status
                );
            }
        })
    }

    /// Invoke the endpoint with the given id or tool name.
    pub async fn invoke_named(
        &self,
        name: &str,
        args: &Arguments,
    ) -> Result<Payload, Error> {
        let endpoint = find_endpoint(name)
            .ok_or_else(|| Error::UnknownEndpoint(name.to_string()))?;

        self.invoke(endpoint, args).await
    }

    /// Invoke a tool by name and normalize any failure into the message a
    /// tool caller gets back.
    pub async fn call_tool(
        &self,
        name: &str,
        args: &Arguments,
    ) -> Result<Payload, Failure> {
        let Some(endpoint) = find_endpoint(name) else {
            let error = Error::UnknownEndpoint(name.to_string());
            return Err(Failure::new(&format!("calling {name}"), &error));
        };

        self.invoke(endpoint, args)
            .await
            .map_err(|error| Failure::new(endpoint.action, &error))
    }
}

async fn multipart_form(fields: Vec<MultipartField>) -> Result<Form, Error> {
    let mut form = Form::new();

    for field in fields {
        form = match field {
            MultipartField::Text { name, value } => form.text(name, value),

            MultipartField::File { name, path } => {
                let contents = tokio::fs::read(&path).await.map_err(|source| {
                    Error::File { path: path.display().to_string(), source }
                })?;

                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| name.clone());

                form.part(name, Part::bytes(contents).file_name(file_name))
            }
        };
    }

    Ok(form)
}

#[cfg(test)]
mod test {
    use super::*;

    use serde_json::json;

    fn invoker() -> Invoker {
        let log = Logger::root(slog::Discard, slog::o!());

        // Nothing listens here; none of these tests get as far as sending.
        let connection = Connection::new("", "SESSION", "client")
            .with_base_url("http://127.0.0.1:1");

        Invoker::new(log, connection)
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let failure = invoker()
            .call_tool("retrieve_everything", &Arguments::new())
            .await
            .unwrap_err();

        assert_eq!(failure.kind, ErrorKind::Validation);
        assert_eq!(
            failure.message,
            "An error occurred while calling retrieve_everything: \
                unknown endpoint retrieve_everything",
        );
    }

    #[tokio::test]
    async fn test_validation_failure_uses_endpoint_action() {
        let failure = invoker()
            .call_tool("retrieve_picklist_values", &Arguments::new())
            .await
            .unwrap_err();

        assert_eq!(failure.kind, ErrorKind::Validation);
        assert_eq!(
            serde_json::to_value(&failure).unwrap(),
            json!({
                "error": "An error occurred while retrieving picklist values: \
                    missing required argument picklist_name",
            }),
        );
    }

    #[tokio::test]
    async fn test_unreadable_upload_is_a_validation_failure() {
        let args = Arguments::new()
            .with("file", "/nonexistent/vault-api-rs/upload.zip");

        let error = invoker()
            .invoke_named("upload-content-file", &args)
            .await
            .unwrap_err();

        assert!(matches!(error, Error::File { .. }));
        assert_eq!(error.kind(), ErrorKind::Validation);
    }
}
