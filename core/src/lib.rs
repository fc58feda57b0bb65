// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use http::HeaderMap;
use http::HeaderValue;
use http::Method;
use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use slog::Logger;

mod arguments;
mod catalog;
mod connection;
mod endpoint;
mod error;
mod invoker;
mod request;
mod response;
mod scim;
mod tool;
mod urn;

pub use arguments::*;
pub use catalog::*;
pub use connection::*;
pub use endpoint::*;
pub use error::*;
pub use invoker::*;
pub use request::*;
pub use response::*;
pub use scim::*;
pub use tool::*;
pub use urn::*;
