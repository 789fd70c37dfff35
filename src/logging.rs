use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub const LOG_DIR_ENV: &str = "STOREFRONT_LOG_DIR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// One-shot commands that own stdout; logs go to stderr.
    Stderr,
    /// The interactive screen owns the terminal; logs only go to a file.
    Screen,
}

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("storefront_search=trace,info")
        } else {
            EnvFilter::new("storefront_search=info,warn")
        }
    })
}

pub fn init(target: LogTarget, verbose: bool) {
    if let Some(log_dir) = std::env::var(LOG_DIR_ENV).ok().map(PathBuf::from)
        && std::fs::create_dir_all(&log_dir).is_ok()
    {
        let log_path = log_dir.join(format!("storefront.{}.log", std::process::id()));
        if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true);
            tracing_subscriber::registry()
                .with(default_filter(verbose))
                .with(file_layer)
                .init();
            tracing::info!(path = ?log_path, "tracing initialized");
            return;
        }
    }

    if target == LogTarget::Screen {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(default_filter(verbose))
        .with_writer(std::io::stderr)
        .init();
}
