//! Logging facilities for Trellis.
//!
//! Trellis uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in the hosting application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("trellis=debug,trellis_core=trace")
//!         .init();
//! }
//! ```
//!
//! Every subsystem logs under one of the [`targets`] so hosts can filter,
//! e.g. `trellis::combo_box=trace` to follow combobox state transitions.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "trellis_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "trellis_core::signal";
    /// Combobox controller target.
    pub const COMBO_BOX: &str = "trellis::combo_box";
    /// Single-line input target.
    pub const LINE_EDIT: &str = "trellis::line_edit";
    /// Modal dialog target.
    pub const MODAL: &str = "trellis::modal";
    /// Icon button target.
    pub const ICON_BUTTON: &str = "trellis::icon_button";
    /// Configuration loading target.
    pub const CONFIG: &str = "trellis::config";
}

/// Span names used throughout Trellis for tracing.
pub mod span_names {
    /// Signal emission span.
    pub const SIGNAL: &str = "trellis::signal";
    /// Widget event dispatch span.
    pub const EVENT: &str = "trellis::event";
    /// Performance measurement span.
    pub const PERF: &str = "trellis::perf";
}

/// A guard for timing a block of work.
///
/// The span is entered on creation and exited when the guard is dropped.
///
/// ```
/// use trellis_core::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("filter_options");
///     // work...
/// }
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: span_names::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Trace-level log under the core target.
#[macro_export]
macro_rules! trellis_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

/// Debug-level log under the core target.
#[macro_export]
macro_rules! trellis_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

/// Warn-level log under the core target.
#[macro_export]
macro_rules! trellis_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}
