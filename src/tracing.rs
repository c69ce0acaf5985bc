//! Tracing initialization.

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset: this crate at `level`, dependencies
/// (rmcp transport chatter in particular) at warnings only.
fn default_filter(level: Level) -> EnvFilter {
    EnvFilter::new(format!("warn,gantt_docs={}", level.as_str().to_ascii_lowercase()))
}

/// Initialize tracing. Safe to call multiple times.
///
/// Logs go to stderr so stdout stays free for the MCP protocol and CLI output.
/// `RUST_LOG` replaces the default filter entirely.
pub fn init() {
    INIT.call_once(|| {
        let is_test =
            std::env::var("NEXTEST").is_ok() || std::env::var("CARGO_TARGET_TMPDIR").is_ok();
        let level = if is_test { Level::DEBUG } else { Level::INFO };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
            .compact();

        if is_test {
            // Keep the guard alive for the whole test binary.
            std::mem::forget(builder.with_test_writer().finish().set_default());
        } else if let Err(e) = builder.with_writer(std::io::stderr).try_init() {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
