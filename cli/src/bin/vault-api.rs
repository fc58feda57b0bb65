// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::bail;
use clap::Parser;
use clap::Subcommand;

use vault_api_cli::Smoke;
use vault_api_cli::parse_arguments;
use vault_api_cli::term_logger;
use vault_api_rs::Connection;
use vault_api_rs::DEFAULT_API_VERSION;
use vault_api_rs::ENDPOINTS;
use vault_api_rs::Invoker;
use vault_api_rs::Payload;
use vault_api_rs::ToolDefinition;
use vault_api_rs::find_endpoint;
use vault_api_rs::tool_definitions;

#[derive(Debug, Parser)]
#[clap(about = "Call the Veeva Vault REST API")]
struct Args {
    /// Host name of the Vault, e.g. myvault.veevavault.com
    #[clap(long, env = "VAULT_DNS")]
    vault_dns: Option<String>,

    #[clap(long, env = "VAULT_API_VERSION", default_value = DEFAULT_API_VERSION)]
    api_version: String,

    /// Session id sent as the Authorization header
    #[clap(long, env = "VAULT_SESSION_ID", hide_env_values = true)]
    session_id: Option<String>,

    #[clap(long, env = "VAULT_CLIENT_ID")]
    client_id: Option<String>,

    /// Send requests here instead of https://<vault-dns>
    #[clap(long, env = "VAULT_BASE_URL")]
    base_url: Option<String>,

    /// Log requests and responses to stderr
    #[clap(long, short)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every endpoint
    List,

    /// Show the tool definition of one endpoint
    Describe { name: String },

    /// Print tool definitions for the whole catalog as JSON
    Tools,

    /// Call one endpoint by id or tool name
    Call {
        name: String,

        /// Arguments as a JSON object
        #[clap(long)]
        args: Option<String>,

        /// A single argument; may be repeated
        #[clap(long = "arg", value_name = "KEY=VALUE")]
        arg: Vec<String>,

        /// Write binary responses here instead of stdout
        #[clap(long)]
        output: Option<PathBuf>,
    },

    /// Run a read-only sweep against the Vault
    Smoke,
}

impl Args {
    fn connection(&self) -> Connection {
        let connection = Connection::new(
            self.vault_dns.clone().unwrap_or_default(),
            self.session_id.clone().unwrap_or_default(),
            self.client_id.clone().unwrap_or_default(),
        )
        .with_api_version(self.api_version.clone());

        match &self.base_url {
            Some(base_url) => connection.with_base_url(base_url.clone()),
            None => connection,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opt: Args = Args::try_parse()?;
    let (log, _log_guard) = term_logger(opt.verbose);
    let invoker = Invoker::new(log, opt.connection());

    match opt.command {
        Command::List => {
            for endpoint in ENDPOINTS {
                println!(
                    "{:<60} {:<7} {}",
                    endpoint.id,
                    endpoint.method.as_str(),
                    endpoint.path
                );
            }
        }

        Command::Describe { name } => {
            let Some(endpoint) = find_endpoint(&name) else {
                bail!("no endpoint named {name}");
            };

            let definition = ToolDefinition::for_endpoint(endpoint);
            println!("{}", serde_json::to_string_pretty(&definition)?);
        }

        Command::Tools => {
            println!("{}", serde_json::to_string_pretty(&tool_definitions())?);
        }

        Command::Call { name, args, arg, output } => {
            let arguments = parse_arguments(args.as_deref(), &arg)?;

            match invoker.call_tool(&name, &arguments).await {
                Ok(Payload::Binary(bytes)) => match output {
                    Some(path) => {
                        tokio::fs::write(&path, &bytes).await.with_context(
                            || format!("writing {}", path.display()),
                        )?;
                    }

                    None => std::io::stdout().write_all(&bytes)?,
                },

                Ok(payload) => {
                    let value = payload.to_json().unwrap_or_default();
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }

                Err(failure) => {
                    println!("{}", serde_json::to_string_pretty(&failure)?);
                    bail!("{name} failed");
                }
            }
        }

        Command::Smoke => {
            Smoke::new(invoker).run().await?;
            println!("SUCCESS");
        }
    }

    Ok(())
}
