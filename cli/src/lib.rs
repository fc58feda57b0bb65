// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use anyhow::Context;
use anyhow::bail;
use serde_json::Value;
use slog::Drain;
use slog::Logger;
use slog_async::AsyncGuard;

use vault_api_rs::Arguments;
use vault_api_rs::Invoker;

mod args;
mod smoke;

pub use args::*;
pub use smoke::*;

/// A terminal logger on stderr, so stdout stays machine-readable.
///
/// Records are written from a background thread; keep the guard alive until
/// the process is done logging, since dropping it flushes what is queued.
pub fn term_logger(verbose: bool) -> (Logger, AsyncGuard) {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();

    async_logger(drain, verbose)
}

fn async_logger<D>(drain: D, verbose: bool) -> (Logger, AsyncGuard)
where
    D: Drain<Ok = (), Err = slog::Never> + Send + 'static,
{
    let (drain, guard) = slog_async::Async::new(drain).build_with_guard();

    let level = if verbose { slog::Level::Debug } else { slog::Level::Warning };
    let drain = slog::LevelFilter::new(drain.fuse(), level).fuse();

    (Logger::root(drain, slog::o!()), guard)
}
