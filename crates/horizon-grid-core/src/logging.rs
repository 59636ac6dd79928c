//! Logging facilities for Horizon Grid.
//!
//! Horizon Grid uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_grid=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Engine mutators (sort, filter, search, select, paginate, delete).
    pub const ENGINE: &str = "horizon_grid::engine";
    /// Column normalization and filter-universe construction.
    pub const NORMALIZE: &str = "horizon_grid::normalize";
    /// Display-row projection (filter and search).
    pub const PROJECT: &str = "horizon_grid::project";
    /// Row selection bookkeeping.
    pub const SELECTION: &str = "horizon_grid::selection";
    /// Collation setup.
    pub const COLLATION: &str = "horizon_grid_core::collation";
    /// Performance spans.
    pub const PERF: &str = "horizon_grid::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used around full model rebuilds so their duration shows up in traces.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_grid::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
