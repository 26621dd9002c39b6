//! Order entities by great-circle distance from a reference point.
//!
//! [`ProximityRanker`] is a pure transform: it never fetches data, never
//! fails, and returns exactly one [`RankedEntity`] per input entity. Entities
//! without a position, or whose distance evaluates to NaN, sort after every
//! measurable entity.

use log::debug;

use crate::Coordinate;

/// Anything that may carry a geographic position.
///
/// # Examples
/// ```
/// use tablefinder_core::{Coordinate, Locatable};
///
/// struct Kiosk {
///     at: Coordinate,
/// }
///
/// impl Locatable for Kiosk {
///     fn coordinate(&self) -> Option<Coordinate> {
///         Some(self.at)
///     }
/// }
///
/// let kiosk = Kiosk { at: Coordinate::new(1.0, 2.0) };
/// assert_eq!(kiosk.coordinate(), Some(Coordinate::new(1.0, 2.0)));
/// ```
pub trait Locatable {
    /// Return the entity's position, or `None` when it has none.
    fn coordinate(&self) -> Option<Coordinate>;
}

impl Locatable for Coordinate {
    fn coordinate(&self) -> Option<Coordinate> {
        Some(*self)
    }
}

impl<T: Locatable + ?Sized> Locatable for &T {
    fn coordinate(&self) -> Option<Coordinate> {
        (**self).coordinate()
    }
}

/// An entity paired with its distance from the reference point.
///
/// `distance_km` is `None` when the entity had no position. Values are kept at
/// full precision; see [`RankedEntity::distance_label`] for display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankedEntity<T> {
    /// The ranked entity, unchanged.
    pub entity: T,
    /// Great-circle distance from the reference point in kilometres.
    pub distance_km: Option<f64>,
}

impl<T> RankedEntity<T> {
    /// Wrap an entity that has not been measured.
    pub const fn unranked(entity: T) -> Self {
        Self {
            entity,
            distance_km: None,
        }
    }

    /// Distance rounded to one decimal place, e.g. `"392.2 km"`.
    pub fn distance_label(&self) -> Option<String> {
        self.distance_km.map(format_distance_km)
    }

    /// Discard the distance and return the entity.
    pub fn into_inner(self) -> T {
        self.entity
    }

    fn sort_key(&self) -> f64 {
        match self.distance_km {
            Some(km) if !km.is_nan() => km,
            _ => f64::INFINITY,
        }
    }
}

/// Format a distance for display with one decimal place.
///
/// # Examples
/// ```
/// use tablefinder_core::format_distance_km;
///
/// assert_eq!(format_distance_km(391.498_93), "391.5 km");
/// ```
#[must_use]
pub fn format_distance_km(km: f64) -> String {
    format!("{km:.1} km")
}

/// Rank entities by haversine distance from a reference coordinate.
///
/// # Examples
/// ```
/// use tablefinder_core::{Coordinate, ProximityRanker};
///
/// let paris = Coordinate::new(48.8566, 2.3522);
/// let nice = Coordinate::new(43.7102, 7.2620);
/// let lyon = Coordinate::new(45.7640, 4.8357);
///
/// let ranked = ProximityRanker::new().rank(paris, vec![nice, lyon]);
/// assert_eq!(ranked[0].entity, lyon);
/// assert_eq!(ranked[1].entity, nice);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ProximityRanker;

impl ProximityRanker {
    /// Create a ranker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Measure each entity from `reference` and sort ascending by distance.
    ///
    /// The sort is stable, so entities at equal distance keep their input
    /// order. Reference coordinates are not validated.
    pub fn rank<T, I>(&self, reference: Coordinate, entities: I) -> Vec<RankedEntity<T>>
    where
        T: Locatable,
        I: IntoIterator<Item = T>,
    {
        let mut ranked: Vec<RankedEntity<T>> = entities
            .into_iter()
            .map(|entity| {
                let distance_km = entity
                    .coordinate()
                    .map(|position| reference.distance_km(position));
                RankedEntity {
                    entity,
                    distance_km,
                }
            })
            .collect();
        ranked.sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
        debug!(
            "ranked {} entities from ({}, {})",
            ranked.len(),
            reference.latitude,
            reference.longitude
        );
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Restaurant;
    use rstest::{fixture, rstest};

    const PARIS: Coordinate = Coordinate::new(48.8566, 2.3522);

    #[fixture]
    fn southern_cities() -> Vec<Restaurant> {
        vec![
            Restaurant::new("4", "Le Jardin Secret", "Méditerranéen")
                .with_coordinate(Coordinate::new(43.7102, 7.2620)),
            Restaurant::new("2", "Sushi Master", "Japonais")
                .with_coordinate(Coordinate::new(45.7640, 4.8357)),
            Restaurant::new("3", "La Trattoria", "Italien")
                .with_coordinate(Coordinate::new(43.2965, 5.3698)),
        ]
    }

    fn ids(ranked: &[RankedEntity<Restaurant>]) -> Vec<&str> {
        ranked.iter().map(|r| r.entity.id.as_str()).collect()
    }

    #[rstest]
    fn orders_by_ascending_distance(southern_cities: Vec<Restaurant>) {
        let ranked = ProximityRanker::new().rank(PARIS, southern_cities);
        assert_eq!(ids(&ranked), vec!["2", "3", "4"]);
        let distances: Vec<f64> = ranked.iter().filter_map(|r| r.distance_km).collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[rstest]
    fn empty_input_yields_empty_output() {
        let ranked = ProximityRanker::new().rank(PARIS, Vec::<Restaurant>::new());
        assert!(ranked.is_empty());
    }

    #[rstest]
    fn missing_position_sorts_last(southern_cities: Vec<Restaurant>) {
        let mut entities = vec![Restaurant::new("9", "Pop-up", "Fusion")];
        entities.extend(southern_cities);
        let ranked = ProximityRanker::new().rank(PARIS, entities);
        assert_eq!(ranked.len(), 4);
        let last = ranked.last().expect("ranking keeps every entity");
        assert_eq!(last.entity.id, "9");
        assert_eq!(last.distance_km, None);
        assert_eq!(last.distance_label(), None);
    }

    #[rstest]
    fn nan_distance_sorts_after_measured_entities(southern_cities: Vec<Restaurant>) {
        let mut entities = vec![
            Restaurant::new("8", "Nowhere", "Fusion")
                .with_coordinate(Coordinate::new(f64::NAN, 2.0)),
        ];
        entities.extend(southern_cities);
        let ranked = ProximityRanker::new().rank(PARIS, entities);
        assert_eq!(ids(&ranked), vec!["2", "3", "4", "8"]);
        assert!(ranked[3].distance_km.is_some_and(f64::is_nan));
    }

    #[rstest]
    fn zero_distance_sorts_first(southern_cities: Vec<Restaurant>) {
        let mut entities = southern_cities;
        entities.push(Restaurant::new("1", "Le Petit Bistro", "Français").with_coordinate(PARIS));
        let ranked = ProximityRanker::new().rank(PARIS, entities);
        assert_eq!(ranked[0].entity.id, "1");
        assert_eq!(ranked[0].distance_label().as_deref(), Some("0.0 km"));
    }

    #[rstest]
    fn equal_distances_keep_input_order() {
        let entities = vec![
            Restaurant::new("a", "First", "Français").with_coordinate(PARIS),
            Restaurant::new("b", "Second", "Français").with_coordinate(PARIS),
        ];
        let ranked = ProximityRanker::new().rank(PARIS, entities);
        assert_eq!(ids(&ranked), vec!["a", "b"]);
    }

    #[rstest]
    fn ranks_borrowed_entities(southern_cities: Vec<Restaurant>) {
        let ranked = ProximityRanker::new().rank(PARIS, &southern_cities);
        assert_eq!(ranked.len(), southern_cities.len());
        assert_eq!(ranked[0].entity.id, "2");
    }

    #[rstest]
    #[case(0.04, "0.0 km")]
    #[case(12.34, "12.3 km")]
    #[case(685.107_650, "685.1 km")]
    fn formats_with_one_decimal(#[case] km: f64, #[case] expected: &str) {
        assert_eq!(format_distance_km(km), expected);
    }
}
