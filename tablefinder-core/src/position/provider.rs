//! Position provider trait and a fixed-coordinate implementation.

use async_trait::async_trait;

use crate::Coordinate;

use super::error::PositionUnavailable;

/// Report the caller's current position.
///
/// Implementations may consult hardware, a platform API or configuration.
/// Each call is a single attempt; retries and timeouts belong to the
/// implementation, which reports them as [`PositionUnavailable::Timeout`].
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use tablefinder_core::{Coordinate, PositionProvider, PositionUnavailable};
///
/// struct DeniedProvider;
///
/// #[async_trait]
/// impl PositionProvider for DeniedProvider {
///     async fn current_position(&self) -> Result<Coordinate, PositionUnavailable> {
///         Err(PositionUnavailable::PermissionDenied)
///     }
/// }
/// ```
#[async_trait]
pub trait PositionProvider: Send + Sync {
    /// Resolve the current position.
    async fn current_position(&self) -> Result<Coordinate, PositionUnavailable>;
}

/// Provider returning a pre-configured position.
///
/// An empty provider reports [`PositionUnavailable::Unsupported`], which lets
/// configuration-driven callers treat "no position configured" the same way
/// as a device without positioning hardware.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FixedPositionProvider {
    position: Option<Coordinate>,
}

impl FixedPositionProvider {
    /// Create a provider that always reports `position`.
    #[must_use]
    pub const fn new(position: Coordinate) -> Self {
        Self {
            position: Some(position),
        }
    }

    /// Create a provider from an optional position.
    #[must_use]
    pub const fn from_option(position: Option<Coordinate>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl PositionProvider for FixedPositionProvider {
    async fn current_position(&self) -> Result<Coordinate, PositionUnavailable> {
        self.position.ok_or(PositionUnavailable::Unsupported)
    }
}
