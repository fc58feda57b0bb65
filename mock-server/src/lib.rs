// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An in-process stand-in for a Vault, answering the REST API with canned
//! responses and recording every request it receives.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::anyhow;
use dropshot::ApiDescription;
use dropshot::Body;
use dropshot::ConfigDropshot;
use dropshot::HttpError;
use dropshot::HttpServer;
use dropshot::Path;
use dropshot::RequestContext;
use dropshot::ServerBuilder;
use dropshot::UntypedBody;
use dropshot::endpoint;
use http::Response;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use serde_json::json;
use slog::Drain;
use slog::Logger;

mod context;
mod fixtures;
mod handlers;

pub use context::*;
pub use fixtures::*;

pub type MockServer = HttpServer<Arc<ServerContext>>;

/// Uploads and MDL scripts are larger than dropshot's default body limit
const MAX_REQUEST_BODY_BYTES: usize = 16 * 1024 * 1024;

/// A terminal logger for binaries
pub fn term_logger() -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    Logger::root(drain, slog::o!())
}

pub fn create_http_server(
    log: Logger,
    bind_address: Option<SocketAddr>,
    context: ServerContext,
) -> anyhow::Result<MockServer> {
    let mut api = ApiDescription::new();

    api.register(handlers::get_any).map_err(|e| anyhow!("{e}"))?;
    api.register(handlers::post_any).map_err(|e| anyhow!("{e}"))?;
    api.register(handlers::put_any).map_err(|e| anyhow!("{e}"))?;
    api.register(handlers::delete_any).map_err(|e| anyhow!("{e}"))?;

    let config = ConfigDropshot {
        bind_address: bind_address
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 0))),
        default_request_body_max_bytes: MAX_REQUEST_BODY_BYTES,
        ..Default::default()
    };

    ServerBuilder::new(api, Arc::new(context), log)
        .config(config)
        .start()
        .map_err(|e| anyhow!("starting server failed: {e}"))
}
