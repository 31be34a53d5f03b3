//! Tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! mode transitions and value reconciliation.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=transition=debug` - mode/value diffs only
//! - `RUST_LOG=inline_edit::model=trace` - module-level filtering
//!
//! # Log Files
//!
//! When a log file is requested, entries are appended with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{EditableModel, Mode};

/// Initialize tracing subscriber with console and optional file logging
///
/// Console output goes to stderr and respects RUST_LOG, defaulting to `warn`.
/// `log_file` names a file whose directory receives a daily-rotated log;
/// an empty directory part falls back to `~/.config/inline-edit/logs/`.
pub fn init(log_file: Option<&Path>) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = log_file.and_then(|path| {
        let file_name = path.file_name()?.to_os_string();
        let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(dir) => match std::fs::create_dir_all(dir) {
                Ok(()) => dir.to_path_buf(),
                Err(e) => {
                    eprintln!("Warning: Could not initialize file logging: {}", e);
                    return None;
                }
            },
            None => match crate::config_paths::ensure_logs_dir() {
                Ok(dir) => dir,
                Err(e) => {
                    eprintln!("Warning: Could not initialize file logging: {}", e);
                    return None;
                }
            },
        };

        let file_appender = tracing_appender::rolling::daily(dir, file_name);
        Some(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("debug")),
        )
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of control state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSnapshot {
    pub mode: Mode,
    pub controlled: bool,
    pub committed: String,
    pub pending: String,
}

impl ModelSnapshot {
    pub fn from_model(model: &EditableModel) -> Self {
        Self {
            mode: model.mode,
            controlled: model.is_controlled(),
            committed: model.committed_value().to_string(),
            pending: model.pending_value().to_string(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &ModelSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.mode != other.mode {
            changes.push(format!("mode: {:?} → {:?}", self.mode, other.mode));
        }
        if self.controlled != other.controlled {
            changes.push("now controlled".to_string());
        }
        if self.committed != other.committed {
            changes.push(format!(
                "committed: {:?} → {:?}",
                self.committed, other.committed
            ));
        }
        if self.pending != other.pending {
            changes.push(format!("pending: {:?} → {:?}", self.pending, other.pending));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
