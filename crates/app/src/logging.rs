//! File logging. Stdout belongs to the terminal UI.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context as _;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const ENV_LOG: &str = "CARDS_LOG";

fn build_env_filter(raw: Option<&str>) -> EnvFilter {
    raw.map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

pub fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let filter = build_env_filter(std::env::var(ENV_LOG).ok().as_deref());
    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("install tracing subscriber")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults_to_info() {
        assert_eq!(build_env_filter(None).to_string(), "info");
        assert_eq!(build_env_filter(Some("  ")).to_string(), "info");
    }

    #[test]
    fn filter_honours_directives() {
        assert_eq!(build_env_filter(Some("debug")).to_string(), "debug");
    }
}
