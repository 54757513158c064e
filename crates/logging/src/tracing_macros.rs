//! crates/logging/src/tracing_macros.rs
//! Convenience macros for ascii-rename tracing targets.
//!
//! The macros expand to `::tracing` calls, so the calling crate must depend on
//! `tracing` directly.

/// Emit a work-queue trace (expansion, release of parked directories).
///
/// # Example
/// ```ignore
/// trace_walk!("expanded {:?} into {} children", path, count);
/// ```
#[macro_export]
macro_rules! trace_walk {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "ascii_rename::walk", $($arg)*);
    };
}

/// Emit a planning trace.
///
/// # Example
/// ```ignore
/// trace_plan!("{:?} -> {:?}", path, decision);
/// ```
#[macro_export]
macro_rules! trace_plan {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "ascii_rename::plan", $($arg)*);
    };
}

/// Emit an execution trace for filesystem mutations.
///
/// # Example
/// ```ignore
/// trace_exec!("renamed {:?} to {:?}", source, target);
/// ```
#[macro_export]
macro_rules! trace_exec {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "ascii_rename::exec", $($arg)*);
    };
}

/// Emit a name-decoding trace.
///
/// # Example
/// ```ignore
/// trace_name!("dropped {} malformed bytes", count);
/// ```
#[macro_export]
macro_rules! trace_name {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "ascii_rename::name", $($arg)*);
    };
}
