// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::*;

/// The API version used when a connection does not name one.
pub const DEFAULT_API_VERSION: &str = "25.2";

/// Argument keys that override the connection for a single call.
pub const VAULT_DNS_ARG: &str = "vaultDNS";
pub const VERSION_ARG: &str = "version";
pub const SESSION_ID_ARG: &str = "sessionId";
pub const CLIENT_ID_ARG: &str = "clientId";

pub const CONNECTION_ARGS: &[&str] =
    &[VAULT_DNS_ARG, VERSION_ARG, SESSION_ID_ARG, CLIENT_ID_ARG];

/// Where and as whom requests are sent.
#[derive(Clone, Default, PartialEq)]
pub struct Connection {
    /// Host name of the Vault, e.g. `myvault.veevavault.com`
    pub vault_dns: String,

    pub api_version: String,

    /// Sent as `Authorization`. Never logged or printed.
    pub session_id: String,

    /// Sent as `X-VaultAPI-ClientID`
    pub client_id: String,

    /// When set, replaces `https://{vault_dns}`
    pub base_url: Option<String>,
}

impl Connection {
    pub fn new(
        vault_dns: impl Into<String>,
        session_id: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Connection {
            vault_dns: vault_dns.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            session_id: session_id.into(),
            client_id: client_id.into(),
            base_url: None,
        }
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Apply per-call overrides from `args` and check that everything a
    /// request needs is present.
    pub fn resolve(&self, args: &Arguments) -> Result<Connection, Error> {
        let pick = |key: &str, current: &str| -> Result<String, Error> {
            Ok(args.string(key)?.unwrap_or_else(|| current.to_string()))
        };

        let resolved = Connection {
            vault_dns: pick(VAULT_DNS_ARG, &self.vault_dns)?,
            api_version: pick(VERSION_ARG, &self.api_version)?,
            session_id: pick(SESSION_ID_ARG, &self.session_id)?,
            client_id: pick(CLIENT_ID_ARG, &self.client_id)?,
            base_url: self.base_url.clone(),
        };

        if resolved.base_url.is_none() && resolved.vault_dns.is_empty() {
            return Err(Error::MissingArgument(VAULT_DNS_ARG.to_string()));
        }

        if resolved.api_version.is_empty() {
            return Err(Error::MissingArgument(VERSION_ARG.to_string()));
        }

        if resolved.session_id.is_empty() {
            return Err(Error::MissingArgument(SESSION_ID_ARG.to_string()));
        }

        if resolved.client_id.is_empty() {
            return Err(Error::MissingArgument(CLIENT_ID_ARG.to_string()));
        }

        Ok(resolved)
    }

    /// Scheme and authority every path is appended to, without a trailing
    /// slash.
    pub fn origin(&self) -> String {
        match &self.base_url {
            Some(base_url) => base_url.trim_end_matches('/').to_string(),
            None => format!("https://{}", self.vault_dns),
        }
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("vault_dns", &self.vault_dns)
            .field("api_version", &self.api_version)
            .field("session_id", &"<redacted>")
            .field("client_id", &self.client_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}
