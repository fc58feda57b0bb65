// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io::Write;
use std::net::SocketAddr;

use serde_json::json;
use slog::Logger;

use vault_api_rs::Arguments;
use vault_api_rs::Connection;
use vault_api_rs::ErrorKind;
use vault_api_rs::Invoker;
use vault_api_rs::Payload;
use vault_mock_server::LOG_ARCHIVE;
use vault_mock_server::MockResponse;
use vault_mock_server::MockServer;
use vault_mock_server::ServerContext;
use vault_mock_server::create_http_server;

const SESSION_ID: &str = "SESSION-1234";
const CLIENT_ID: &str = "vault-api-rs-tests";

fn log() -> Logger {
    Logger::root(slog::Discard, slog::o!())
}

fn invoker_for(address: SocketAddr, session_id: &str) -> Invoker {
    let connection = Connection::new("", session_id, CLIENT_ID)
        .with_base_url(format!("http://{address}"));

    Invoker::new(log(), connection)
}

fn start(context: ServerContext) -> (MockServer, Invoker) {
    let server = create_http_server(log(), None, context).unwrap();
    let invoker = invoker_for(server.local_addr(), SESSION_ID);
    (server, invoker)
}

fn vault() -> (MockServer, Invoker) {
    start(ServerContext::with_vault_fixtures("25.2"))
}

fn args(value: serde_json::Value) -> Arguments {
    Arguments::try_from(value).unwrap()
}

#[tokio::test]
async fn test_json_response_is_returned_unmodified() {
    let (server, invoker) = vault();

    let payload = invoker
        .call_tool("retrieve_all_picklists", &Arguments::new())
        .await
        .unwrap();

    let Payload::Json(body) = payload else {
        panic!("expected JSON");
    };
    assert_eq!(body["responseStatus"], "SUCCESS");
    assert_eq!(body["picklists"][0]["name"], "color__c");
    assert_eq!(body["picklists"].as_array().unwrap().len(), 2);

    let requests = server.app_private().requests();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/api/25.2/objects/picklists");
    assert_eq!(request.query, None);
    assert_eq!(request.header("authorization"), Some(SESSION_ID));
    assert_eq!(request.header("accept"), Some("application/json"));
    assert_eq!(request.header("x-vaultapi-clientid"), Some(CLIENT_ID));
    assert!(request.body.is_empty());

    server.close().await.unwrap();
}

#[tokio::test]
async fn test_remote_error_body_is_embedded_in_failure() {
    let (server, invoker) = vault();

    let failure = invoker
        .call_tool(
            "retrieve_picklist_values",
            &args(json!({ "picklist_name": "flavor__c" })),
        )
        .await
        .unwrap_err();

    assert_eq!(failure.kind, ErrorKind::Remote);
    assert!(
        failure.message.starts_with(
            "An error occurred while retrieving picklist values: {"
        ),
        "{}",
        failure.message,
    );
    assert!(failure.message.contains("MALFORMED_URL"));

    let serialized = serde_json::to_value(&failure).unwrap();
    assert_eq!(serialized.as_object().unwrap().len(), 1);
    assert_eq!(serialized["error"], failure.message.as_str());

    server.close().await.unwrap();
}

#[tokio::test]
async fn test_invalid_session_is_a_remote_error() {
    let context =
        ServerContext::with_vault_fixtures("25.2").require_session(SESSION_ID);
    let server = create_http_server(log(), None, context).unwrap();
    let invoker = invoker_for(server.local_addr(), "EXPIRED");

    let failure = invoker
        .call_tool("retrieve_all_queues", &Arguments::new())
        .await
        .unwrap_err();

    assert_eq!(failure.kind, ErrorKind::Remote);
    assert!(failure.message.contains("INVALID_SESSION_ID"));

    server.close().await.unwrap();
}

#[tokio::test]
async fn test_per_call_session_override() {
    let context =
        ServerContext::with_vault_fixtures("25.2").require_session(SESSION_ID);
    let server = create_http_server(log(), None, context).unwrap();
    let invoker = invoker_for(server.local_addr(), "EXPIRED");

    let payload = invoker
        .call_tool(
            "retrieve_all_queues",
            &args(json!({ "sessionId": SESSION_ID })),
        )
        .await
        .unwrap();
    assert!(matches!(payload, Payload::Json(_)));

    server.close().await.unwrap();
}

#[tokio::test]
async fn test_binary_download() {
    let (server, invoker) = vault();

    let payload = invoker
        .call_tool(
            "download_debug_log_files",
            &args(json!({ "id": "0LD000000000101" })),
        )
        .await
        .unwrap();

    assert_eq!(payload, Payload::Binary(LOG_ARCHIVE.to_vec()));

    // Binary endpoints report errors like the JSON ones
    let failure = invoker
        .call_tool(
            "download_debug_log_files",
            &args(json!({ "id": "0LD000000000999" })),
        )
        .await
        .unwrap_err();
    assert_eq!(failure.kind, ErrorKind::Remote);
    assert!(failure.message.contains("MALFORMED_URL"));

    server.close().await.unwrap();
}

#[tokio::test]
async fn test_confirmation_response() {
    let (server, invoker) = vault();

    let payload = invoker
        .call_tool("delete_snapshot", &args(json!({ "api_name": "snapshot__c" })))
        .await
        .unwrap();

    assert_eq!(
        payload,
        Payload::Confirmation("Snapshot deleted successfully.".to_string()),
    );

    let requests = server.app_private().requests();
    assert_eq!(requests[0].method, "DELETE");

    server.close().await.unwrap();
}

#[tokio::test]
async fn test_query_parameters_and_defaults() {
    let (server, invoker) = vault();

    invoker
        .call_tool("retrieve_all_debug_logs", &Arguments::new())
        .await
        .unwrap();

    invoker
        .call_tool(
            "retrieve_all_debug_logs",
            &args(json!({ "user_id": "61603", "include_inactive": true })),
        )
        .await
        .unwrap();

    let requests = server.app_private().requests();
    assert_eq!(requests[0].query.as_deref(), Some("include_inactive=false"));
    assert_eq!(
        requests[1].query.as_deref(),
        Some("user_id=61603&include_inactive=true"),
    );

    server.close().await.unwrap();
}

#[tokio::test]
async fn test_form_body() {
    let (server, invoker) = vault();
    server.app_private().respond(
        "POST",
        "/api/25.2/objects/picklists/color__c",
        MockResponse::json(
            200,
            json!({
                "responseStatus": "SUCCESS",
                "picklistValues": [
                    { "name": "blue__c", "label": "Blue" },
                    { "name": "dark_red__c", "label": "Dark Red" }
                ]
            }),
        ),
    );

    let payload = invoker
        .call_tool(
            "create_picklist_values",
            &args(json!({
                "picklist_name": "color__c",
                "values": ["Blue", "Dark Red"],
            })),
        )
        .await
        .unwrap();
    assert!(matches!(payload, Payload::Json(_)));

    let requests = server.app_private().requests();
    let request = &requests[0];
    assert_eq!(
        request.header("content-type"),
        Some("application/x-www-form-urlencoded"),
    );
    assert_eq!(
        request.form_pairs(),
        vec![
            ("values[]".to_string(), "Blue".to_string()),
            ("values[]".to_string(), "Dark Red".to_string()),
        ],
    );

    server.close().await.unwrap();
}

#[tokio::test]
async fn test_scim_create_user_document() {
    let (server, invoker) = vault();
    server.app_private().respond(
        "POST",
        "/api/25.2/scim/v2/Users",
        MockResponse::scim(201, json!({ "id": "61579" })),
    );

    let payload = invoker
        .call_tool(
            "create_user_scim",
            &args(json!({
                "user": {
                    "userName": "jdoe@veepharm.com",
                    "emails": [{ "value": "jdoe@example.com", "type": "work" }],
                    "name": { "familyName": "Doe", "givenName": "Jane" },
                    "preferredLanguage": "en",
                    "locale": "en_US",
                    "timezone": "America/Los_Angeles",
                    "securityProfile": "business_admin__v"
                }
            })),
        )
        .await
        .unwrap();
    assert_eq!(payload, Payload::Json(json!({ "id": "61579" })));

    let requests = server.app_private().requests();
    let request = &requests[0];
    assert_eq!(request.header("content-type"), Some("application/scim+json"));
    assert_eq!(request.header("accept"), Some("application/scim+json"));

    let document: serde_json::Value =
        serde_json::from_slice(&request.body).unwrap();
    assert_eq!(
        document["schemas"],
        json!([vault_api_rs::VAULT_USER_URN, vault_api_rs::USER_URN]),
    );
    assert_eq!(
        document[vault_api_rs::VAULT_USER_URN]["securityProfile"]["value"],
        "business_admin__v",
    );

    server.close().await.unwrap();
}

#[tokio::test]
async fn test_mdl_script_is_sent_as_text() {
    let (server, invoker) = vault();
    server.app_private().respond(
        "POST",
        "/api/mdl/execute_async",
        MockResponse::json(
            200,
            json!({ "responseStatus": "SUCCESS", "job_id": 61201 }),
        ),
    );

    let script = "RECREATE Picklist color__c (label('Color'));";
    invoker
        .call_tool("execute_mdl_async", &args(json!({ "script": script })))
        .await
        .unwrap();

    let requests = server.app_private().requests();
    assert_eq!(requests[0].header("content-type"), Some("text/plain"));
    assert_eq!(requests[0].body_text(), script);

    server.close().await.unwrap();
}

#[tokio::test]
async fn test_multipart_upload() {
    let (server, invoker) = vault();
    server.app_private().respond(
        "POST",
        "/api/mdl/files",
        MockResponse::json(
            200,
            json!({ "responseStatus": "SUCCESS", "data": { "name": "logo.txt" } }),
        ),
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"hello vault").unwrap();
    drop(file);

    invoker
        .call_tool(
            "upload_content_file",
            &args(json!({ "file": path.display().to_string() })),
        )
        .await
        .unwrap();

    let requests = server.app_private().requests();
    let request = &requests[0];
    assert!(
        request
            .header("content-type")
            .unwrap()
            .starts_with("multipart/form-data; boundary=")
    );

    let body = request.body_text();
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"logo.txt\""));
    assert!(body.contains("hello vault"));

    server.close().await.unwrap();
}

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
    let (server, invoker) = vault();

    let failure = invoker
        .call_tool("update_picklist_value", &args(json!({ "status": "gone" })))
        .await
        .unwrap_err();

    assert_eq!(failure.kind, ErrorKind::Validation);
    assert!(server.app_private().requests().is_empty());

    server.close().await.unwrap();
}

#[tokio::test]
async fn test_transport_failure() {
    // Nothing listens on port 1
    let invoker = invoker_for(SocketAddr::from(([127, 0, 0, 1], 1)), SESSION_ID);

    let failure = invoker
        .call_tool("retrieve_all_queues", &Arguments::new())
        .await
        .unwrap_err();

    assert_eq!(failure.kind, ErrorKind::Transport);
    assert!(
        failure
            .message
            .starts_with("An error occurred while retrieving queues: ")
    );
}

#[tokio::test]
async fn test_concurrent_calls() {
    let (server, invoker) = vault();

    let picklists = invoker.clone();
    let queues = invoker.clone();
    let empty = Arguments::new();

    let (a, b, c) = tokio::join!(
        picklists.call_tool("retrieve_all_picklists", &empty),
        queues.call_tool("retrieve_all_queues", &empty),
        invoker.call_tool("retrieve_scim_provider", &empty),
    );

    assert!(a.is_ok());
    assert!(b.is_ok());

    let Ok(Payload::Json(provider)) = c else {
        panic!("expected JSON");
    };
    assert_eq!(
        provider["schemas"][0],
        vault_api_rs::SERVICEPROVIDERCONFIG_URN,
    );

    assert_eq!(server.app_private().requests().len(), 3);

    server.close().await.unwrap();
}
