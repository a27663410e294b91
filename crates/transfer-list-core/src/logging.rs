//! Logging facilities for Transfer List.
//!
//! Transfer List uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("transfer_list=debug")
//!     .init();
//! ```
//!
//! The [`targets`] constants name every subsystem so they can be used in
//! filter directives.

/// Target names for log filtering.
pub mod targets {
    /// Core primitives target.
    pub const CORE: &str = "transfer_list_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "transfer_list_core::signal";
    /// Listener scope target.
    pub const SCOPE: &str = "transfer_list_core::scope";
    /// Timer system target.
    pub const TIMER: &str = "transfer_list_core::timer";
    /// Host document target.
    pub const DOCUMENT: &str = "transfer_list::document";
    /// Widget target (render, transfer, sync).
    pub const WIDGET: &str = "transfer_list::widget";
    /// Styling and theme loading target.
    pub const STYLE: &str = "transfer_list_style";
    /// Performance span target.
    pub const PERF: &str = "transfer_list::perf";
}

/// A guard that keeps a performance span entered until dropped.
///
/// ```
/// use transfer_list_core::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("transfer");
///     // work measured by the subscriber
/// }
/// ```
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "transfer_list::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
