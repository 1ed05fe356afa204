//! Logging utilities for cmaps.
//!
//! This module provides structured logging helpers built on `tracing` so
//! that loading and rendering produce searchable, field-based log lines.

use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Initialize the tracing subscriber with the given log level.
///
/// `RUST_LOG` takes precedence when set. Calling this more than once is a
/// no-op.
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
            "Operation completed with errors"
        );
    }
}

/// Log an operation with timing and result in a single statement
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

/// Log summary information about a directory load
pub fn log_load_stats(source: &str, loaded: usize, skipped: usize, elapsed: Duration) {
    info!(
        operation = "colormap_load",
        source = source,
        loaded = loaded,
        skipped = skipped,
        duration_ms = elapsed.as_secs_f64() * 1000.0,
        "Colormaps loaded"
    );
}

/// Log an error with context
pub fn log_error(error: &crate::error::CmapsError, context: &str) {
    error!(
        error = %error,
        context = context,
        "Error occurred"
    );
}

/// Generate a unique operation ID
pub fn generate_operation_id() -> String {
    Uuid::new_v4().to_string()
}
