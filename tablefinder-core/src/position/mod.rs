//! Obtain the reference coordinate for proximity ranking.
//!
//! The `PositionProvider` trait abstracts the device or platform capability
//! that reports where the caller is. Providers are asynchronous and best
//! effort: they either yield a [`Coordinate`](crate::Coordinate) or a
//! [`PositionUnavailable`] reason, and callers must not rank without one.

mod error;
mod provider;

pub use error::PositionUnavailable;
pub use provider::{FixedPositionProvider, PositionProvider};
