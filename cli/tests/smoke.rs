// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use slog::Logger;

use vault_api_cli::Smoke;
use vault_api_rs::Connection;
use vault_api_rs::Invoker;
use vault_mock_server::MockResponse;
use vault_mock_server::ServerContext;
use vault_mock_server::create_http_server;

fn log() -> Logger {
    Logger::root(slog::Discard, slog::o!())
}

#[tokio::test]
async fn test_smoke_against_mock_vault() {
    let context =
        ServerContext::with_vault_fixtures("25.2").require_session("SESSION");
    let server = create_http_server(log(), None, context).unwrap();

    let connection = Connection::new("", "SESSION", "vault-api-cli-tests")
        .with_base_url(format!("http://{}", server.local_addr()));
    let smoke = Smoke::new(Invoker::new(log(), connection));

    smoke.run().await.unwrap();

    let paths: Vec<String> = server
        .app_private()
        .requests()
        .into_iter()
        .map(|r| r.path)
        .collect();
    assert_eq!(
        paths,
        vec![
            "/api/25.2/objects/picklists",
            "/api/25.2/objects/picklists/color__c",
            "/api/25.2/services/queues",
            "/api/25.2/scim/v2/ServiceProviderConfig",
            "/api/25.2/scim/v2/ResourceTypes",
            "/api/25.2/objects/picklists/vault_api_smoke_missing__c",
        ],
    );

    server.close().await.unwrap();
}

#[tokio::test]
async fn test_smoke_reports_failing_step() {
    let context = ServerContext::with_vault_fixtures("25.2");
    context.respond(
        "GET",
        "/api/25.2/services/queues",
        MockResponse::json(
            200,
            serde_json::json!({
                "responseStatus": "FAILURE",
                "errors": [{ "type": "INSUFFICIENT_ACCESS", "message": "" }]
            }),
        ),
    );
    let server = create_http_server(log(), None, context).unwrap();

    let connection = Connection::new("", "SESSION", "vault-api-cli-tests")
        .with_base_url(format!("http://{}", server.local_addr()));
    let smoke = Smoke::new(Invoker::new(log(), connection));

    let error = smoke.run().await.unwrap_err();
    assert_eq!(error.to_string(), "queue_tests");

    server.close().await.unwrap();
}
