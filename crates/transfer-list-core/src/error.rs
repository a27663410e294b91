//! Error types for Transfer List core systems.

/// Timer-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimerError {
    /// The timer ID is invalid, has already fired, or was cancelled.
    #[error("Invalid or expired timer ID")]
    InvalidTimerId,
}
