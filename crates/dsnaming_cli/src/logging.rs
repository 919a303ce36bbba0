//! Structured logging setup for the command-line front end.
//!
//! The library only emits `tracing` events; this module installs the
//! subscriber that prints them.

use std::{io::IsTerminal, sync::Once};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Directive used with `--verbose` when `RUST_LOG` is unset.
const VERBOSE_DIRECTIVE: &str = "dsnaming_core=debug,ncparse=debug";

/// Initialize tracing once for the process.
///
/// - Env filter from `RUST_LOG`, falling back to `off` (or to
///   [`VERBOSE_DIRECTIVE`] when `verbose` is set)
/// - Compact formatting on stderr so stdout stays parseable, colored only when
///   stderr is a terminal
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose { VERBOSE_DIRECTIVE } else { "off" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(ansi_enabled(&std::io::stderr()))
                    .compact()
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .init();

        tracing::debug!(verbose, "[ncparse] Logging initialized");
    });
}

/// Escape codes only go to a terminal; redirected logs stay plain text.
fn ansi_enabled(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}
