use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Party size offered before the guest changes it.
pub const DEFAULT_GUESTS: u8 = 2;

/// A table booking request for one restaurant.
///
/// # Examples
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use tablefinder_core::ReservationRequest;
///
/// let request = ReservationRequest {
///     date: NaiveDate::from_ymd_opt(2026, 10, 16),
///     time: NaiveTime::from_hms_opt(19, 30, 0),
///     ..ReservationRequest::default()
/// };
/// assert!(request.validate().is_ok());
/// assert_eq!(request.guests, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReservationRequest {
    /// Requested day.
    pub date: Option<NaiveDate>,
    /// Requested seating time.
    pub time: Option<NaiveTime>,
    /// Number of people, at least one.
    pub guests: u8,
}

impl Default for ReservationRequest {
    fn default() -> Self {
        Self {
            date: None,
            time: None,
            guests: DEFAULT_GUESTS,
        }
    }
}

/// Errors returned by [`ReservationRequest::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReservationError {
    /// Either the date or the time was not chosen.
    #[error("a reservation needs both a date and a time")]
    MissingDateOrTime,
    /// The party size was zero.
    #[error("a reservation needs at least one guest")]
    NoGuests,
}

impl ReservationRequest {
    /// Check that a date, a time and at least one guest were given.
    ///
    /// # Errors
    ///
    /// Returns the first [`ReservationError`] found, checking date and time
    /// before the party size.
    pub const fn validate(&self) -> Result<(), ReservationError> {
        if self.date.is_none() || self.time.is_none() {
            return Err(ReservationError::MissingDateOrTime);
        }
        if self.guests == 0 {
            return Err(ReservationError::NoGuests);
        }
        Ok(())
    }

    /// Add one guest, saturating at `u8::MAX`.
    #[must_use]
    pub const fn with_extra_guest(mut self) -> Self {
        self.guests = self.guests.saturating_add(1);
        self
    }

    /// Remove one guest, never dropping below one.
    #[must_use]
    pub fn with_one_fewer_guest(mut self) -> Self {
        self.guests = self.guests.saturating_sub(1).max(1);
        self
    }
}
