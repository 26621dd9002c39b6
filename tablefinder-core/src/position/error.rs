use thiserror::Error;

/// Reasons a [`crate::position::PositionProvider`] could not report a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionUnavailable {
    /// The user or platform refused access to the position.
    #[error("permission to read the current position was denied")]
    PermissionDenied,
    /// The capability did not answer in time.
    #[error("timed out waiting for the current position")]
    Timeout,
    /// No positioning capability exists or none is configured.
    #[error("no positioning capability is available")]
    Unsupported,
}
