//! Core domain types for the Tablefinder engine.
//!
//! The centrepiece is [`ProximityRanker`], which orders any [`Locatable`]
//! entities by haversine distance from a reference [`Coordinate`]. The
//! reference comes from an injected [`PositionProvider`] and the entities
//! from an injected [`EntityRepository`], so ranking stays pure and testable
//! without a device or a live catalogue. The crate also carries the
//! catalogue search and the reservation and contact form rules.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod contact;
pub mod coordinate;
mod nearby;
pub mod position;
pub mod ranking;
pub mod repository;
mod reservation;
mod restaurant;
mod search;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use contact::{ContactError, ContactErrors, ContactMessage};
pub use coordinate::{Coordinate, CoordinateError, EARTH_RADIUS_KM};
pub use nearby::{NearbyOutcome, nearby_listing, rank_nearby};
pub use position::{FixedPositionProvider, PositionProvider, PositionUnavailable};
pub use ranking::{Locatable, ProximityRanker, RankedEntity, format_distance_km};
pub use repository::{EntityRepository, MemoryRepository};
pub use reservation::{DEFAULT_GUESTS, ReservationError, ReservationRequest};
pub use restaurant::Restaurant;
pub use search::search_restaurants;
