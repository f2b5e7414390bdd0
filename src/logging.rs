//! Logging utilities for colormap-tool.
//!
//! Structured `tracing` helpers shared by the library and the binaries, so
//! log lines carry the same `operation` fields everywhere.

use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::ColormapError;

/// Initialize the tracing subscriber with the given log level.
///
/// `RUST_LOG` wins over `log_level` when set. Calling this more than once is
/// harmless; later calls leave the first subscriber in place.
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log a start message for a significant operation
pub fn log_operation_start(operation: &str, details: Option<&str>) {
    if let Some(details) = details {
        info!(
            operation = operation,
            details = details,
            "Starting operation"
        );
    } else {
        info!(operation = operation, "Starting operation");
    }
}

/// Log the completion of a significant operation
pub fn log_operation_end(operation: &str, start_time: Instant, success: bool) {
    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    if success {
        info!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation completed successfully"
        );
    } else {
        warn!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation failed"
        );
    }
}

/// Run `f`, logging its duration under a fresh operation id
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let operation_id = generate_operation_id();

    debug!(
        operation = operation,
        operation_id = %operation_id,
        "Starting operation"
    );

    let result = f();

    info!(
        operation = operation,
        operation_id = %operation_id,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log an error with context
pub fn log_error(error: &ColormapError, context: &str) {
    error!(
        error = %error,
        context = context,
        error_kind = error_kind(error),
        "Error occurred"
    );
}

fn error_kind(error: &ColormapError) -> &'static str {
    match error {
        ColormapError::Conflict { .. } => "conflict",
        ColormapError::MissingNamespace { .. } => "missing_namespace",
        ColormapError::UnknownNamespace { .. } => "unknown_namespace",
        ColormapError::UnknownName { .. } => "unknown_name",
        ColormapError::InvalidShape { .. } => "invalid_shape",
        ColormapError::InvalidLength { .. } => "invalid_length",
        ColormapError::InvalidParameter { .. } => "invalid_parameter",
        ColormapError::Registry { .. } => "registry",
        ColormapError::Config { .. } => "config",
        ColormapError::Io(_) => "io",
        ColormapError::Json(_) => "json",
        ColormapError::Image(_) => "image",
    }
}

/// Generate a unique operation ID
pub fn generate_operation_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_operation_id() {
        let id1 = generate_operation_id();
        let id2 = generate_operation_id();

        assert!(!id1.is_empty());
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_log_timed_operation() {
        let result = log_timed_operation("test_operation", || 42);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_error_kind() {
        let err = ColormapError::MissingNamespace {
            name: "viridis".to_string(),
        };
        assert_eq!(error_kind(&err), "missing_namespace");
        log_error(&err, "test");
    }
}
