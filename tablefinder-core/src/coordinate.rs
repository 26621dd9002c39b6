//! Geographic coordinates and great-circle distance.
//!
//! Coordinates are WGS84 degrees. Distances use the haversine formula on a
//! sphere of radius [`EARTH_RADIUS_KM`]; the radius and formula are fixed so
//! that distances shown to users stay reproducible across implementations.

use geo::Coord;
use thiserror::Error;

/// Mean Earth radius in kilometres used for every distance calculation.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
///
/// The ranker does not validate coordinates. Use [`Coordinate::try_new`] when
/// reading positions from untrusted input.
///
/// # Examples
/// ```
/// use tablefinder_core::Coordinate;
///
/// let paris = Coordinate::new(48.8566, 2.3522);
/// let lyon = Coordinate::new(45.7640, 4.8357);
/// let km = paris.distance_km(lyon);
/// assert!((km - 392.2).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Degrees north of the equator, nominally `-90.0..=90.0`.
    pub latitude: f64,
    /// Degrees east of Greenwich, nominally `-180.0..=180.0`.
    pub longitude: f64,
}

/// Errors returned by [`Coordinate::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude or longitude was NaN or infinite.
    #[error("coordinate components must be finite")]
    NotFinite,
    /// Latitude fell outside `-90.0..=90.0`.
    #[error("latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),
    /// Longitude fell outside `-180.0..=180.0`.
    #[error("longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),
}

impl Coordinate {
    /// Construct a coordinate without validation.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Validates and constructs a [`Coordinate`].
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when either component is not finite or
    /// lies outside its nominal range. Range bounds are inclusive.
    ///
    /// # Examples
    /// ```
    /// use tablefinder_core::{Coordinate, CoordinateError};
    ///
    /// assert!(Coordinate::try_new(90.0, -180.0).is_ok());
    /// assert_eq!(
    ///     Coordinate::try_new(91.0, 0.0),
    ///     Err(CoordinateError::LatitudeOutOfRange(91.0)),
    /// );
    /// ```
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Great-circle distance to `other` in kilometres.
    ///
    /// Non-finite inputs produce NaN rather than an error.
    #[must_use]
    pub fn distance_km(self, other: Self) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();
        let sin_lat = (d_lat / 2.0).sin();
        let sin_lon = (d_lon / 2.0).sin();
        let a = sin_lat * sin_lat
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * sin_lon
                * sin_lon;
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl From<Coord<f64>> for Coordinate {
    /// Read a `geo` coordinate using `x = longitude` and `y = latitude`.
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            x: coordinate.longitude,
            y: coordinate.latitude,
        }
    }
}
