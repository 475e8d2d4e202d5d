//! Logging initialization
//!
//! The client emits `tracing` events (`debug` for successful responses,
//! `error` for failed ones). Applications embedding the crate can install
//! their own subscriber; these helpers set up a sensible default.

use std::io::IsTerminal;
use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn env_filter(default_level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level).into())
        .from_env_lossy()
}

/// Install a global fmt subscriber writing to stderr
///
/// `RUST_LOG` overrides `default_level`. Colors are used only when stderr
/// is a terminal.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init(default_level: Level) -> anyhow::Result<()> {
    install(default_level, std::io::stderr, std::io::stderr().is_terminal())
}

/// Install a global fmt subscriber with a custom writer
///
/// Output is plain text without ANSI colors.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_with_writer<W>(default_level: Level, writer: W) -> anyhow::Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    install(default_level, writer, false)
}

fn install<W>(default_level: Level, writer: W, ansi: bool) -> anyhow::Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(ansi)
        .with_writer(writer);
    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(layer)
        .try_init()?;
    Ok(())
}
