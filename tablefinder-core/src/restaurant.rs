use crate::{Coordinate, Locatable};

/// A restaurant listed in the catalogue.
///
/// Only the position takes part in ranking; every other attribute is carried
/// through unchanged. Latitude and longitude are stored separately so that a
/// catalogue entry may omit its position entirely.
///
/// # Examples
/// ```
/// use tablefinder_core::{Coordinate, Locatable, Restaurant};
///
/// let bistro = Restaurant::new("1", "Le Petit Bistro", "Français")
///     .with_location("Paris, 6ème")
///     .with_coordinate(Coordinate::new(48.8566, 2.3522));
///
/// assert_eq!(bistro.coordinate(), Some(Coordinate::new(48.8566, 2.3522)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Restaurant {
    /// Catalogue identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Cuisine label, e.g. `"Japonais"`.
    pub cuisine: String,
    /// Average review score out of five.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: f32,
    /// Number of reviews behind `rating`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reviews: u32,
    /// Free-text neighbourhood label, e.g. `"Lyon, Centre"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: String,
    /// Price band such as `"€€"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: String,
    /// Address of a cover photo.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub image: Option<String>,
    /// Latitude in degrees. Ranked only when `longitude` is also present.
    #[cfg_attr(feature = "serde", serde(default))]
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub longitude: Option<f64>,
}

impl Restaurant {
    /// Construct a restaurant with no rating, label, price or position.
    pub fn new(id: impl Into<String>, name: impl Into<String>, cuisine: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cuisine: cuisine.into(),
            ..Self::default()
        }
    }

    /// Set the neighbourhood label.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the position.
    #[must_use]
    pub const fn with_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.latitude = Some(coordinate.latitude);
        self.longitude = Some(coordinate.longitude);
        self
    }

    /// Set the average rating and review count.
    #[must_use]
    pub const fn with_rating(mut self, rating: f32, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    /// Set the price band.
    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }
}

impl Locatable for Restaurant {
    fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn position_requires_both_components() {
        let mut restaurant = Restaurant::new("1", "Chez Paul", "Français");
        restaurant.latitude = Some(44.8378);
        assert_eq!(restaurant.coordinate(), None);
        restaurant.longitude = Some(-0.5792);
        assert_eq!(restaurant.coordinate(), Some(Coordinate::new(44.8378, -0.5792)));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_catalogue_entry_without_position() {
        let json = r#"{"id":"2","name":"Sushi Master","cuisine":"Japonais","rating":4.5}"#;
        let restaurant: Restaurant =
            serde_json::from_str(json).expect("catalogue entry should parse");
        assert_eq!(restaurant.name, "Sushi Master");
        assert_eq!(restaurant.reviews, 0);
        assert_eq!(restaurant.coordinate(), None);
    }
}
