//! Facade crate for the Tablefinder restaurant discovery engine.
//!
//! This crate re-exports the core domain types: proximity ranking, the
//! position and repository seams, catalogue search and form validation.
//!
//! # Examples
//!
//! ```
//! use tablefinder::{DEFAULT_GUESTS, ReservationRequest};
//!
//! let request = ReservationRequest::default();
//! assert_eq!(request.guests, DEFAULT_GUESTS);
//! ```

#![forbid(unsafe_code)]

pub use tablefinder_core::{
    ContactError, ContactErrors, ContactMessage, Coordinate, CoordinateError, DEFAULT_GUESTS,
    EARTH_RADIUS_KM, EntityRepository, FixedPositionProvider, Locatable, MemoryRepository, NearbyOutcome,
    PositionProvider, PositionUnavailable, ProximityRanker, RankedEntity, ReservationError,
    ReservationRequest, Restaurant, format_distance_km, nearby_listing, rank_nearby,
    search_restaurants,
};

#[cfg(feature = "test-support")]
pub use tablefinder_core::test_support;
