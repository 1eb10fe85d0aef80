//! Tracing setup
//!
//! The library only emits `tracing` events; the binary decides where they go.
//! The CLI writes to stderr, the TUI writes to a log file because stderr is
//! hidden behind the alternate screen.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{WeddingError, WeddingResult};

static TRACING_INIT: Once = Once::new();

/// Build the filter: `RUST_LOG` wins, otherwise the configured level for this crate
fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wedding_bells={}", default_level)))
}

/// Initialize tracing to stderr
pub fn init_stderr(default_level: &str) {
    TRACING_INIT.call_once(|| {
        fmt()
            .with_env_filter(build_filter(default_level))
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

/// Initialize tracing to an append-only log file
pub fn init_file(path: &Path, default_level: &str) -> WeddingResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| WeddingError::Io(format!("Failed to create log directory: {}", e)))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| WeddingError::Io(format!("Failed to open log file: {}", e)))?;

    TRACING_INIT.call_once(|| {
        fmt()
            .with_env_filter(build_filter(default_level))
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
        tracing::info!("File logging initialized");
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_does_not_panic_twice() {
        init_stderr("debug");
        init_stderr("warn");
    }
}
