// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::net::SocketAddr;

use clap::Parser;
use slog::info;
use vault_mock_server::ServerContext;
use vault_mock_server::create_http_server;
use vault_mock_server::term_logger;

#[derive(Debug, Parser)]
#[clap(about = "Mock Veeva Vault REST API server")]
struct Args {
    // Note that port "4567" is arbitrarily chosen.
    #[clap(long, default_value = "127.0.0.1:4567")]
    bind_addr: SocketAddr,

    /// Reject requests whose Authorization header is not this session id
    #[clap(long, env = "VAULT_SESSION_ID")]
    session_id: Option<String>,

    /// API version the canned responses are served under
    #[clap(long, default_value = vault_api_rs::DEFAULT_API_VERSION)]
    api_version: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opt: Args = Args::try_parse()?;
    let log = term_logger();

    let mut context = ServerContext::with_vault_fixtures(&opt.api_version);
    if let Some(session_id) = opt.session_id {
        context = context.require_session(session_id);
    }

    let http_server =
        create_http_server(log.clone(), Some(opt.bind_addr), context)?;
    info!(log, "listening"; "address" => %http_server.local_addr());

    if let Err(s) = http_server.await {
        anyhow::bail!("Error from start(): {}", s);
    }

    Ok(())
}
