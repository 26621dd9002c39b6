//! Test doubles for the position and repository seams.
//!
//! These helpers are compiled for unit tests and for downstream crates that
//! enable the `test-support` feature.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::{
    Coordinate, EntityRepository, Locatable, PositionProvider, PositionUnavailable, Restaurant,
};

/// `PositionProvider` that always fails with a fixed reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnavailablePositionProvider {
    reason: PositionUnavailable,
}

impl UnavailablePositionProvider {
    /// Create a provider that fails with `reason`.
    #[must_use]
    pub const fn new(reason: PositionUnavailable) -> Self {
        Self { reason }
    }
}

#[async_trait]
impl PositionProvider for UnavailablePositionProvider {
    async fn current_position(&self) -> Result<Coordinate, PositionUnavailable> {
        Err(self.reason)
    }
}

/// In-memory repository that records how often it was listed.
#[derive(Debug, Default)]
pub struct CountingRepository<T> {
    entities: Vec<T>,
    calls: AtomicUsize,
}

impl<T> CountingRepository<T> {
    /// Create a repository from a collection of entities.
    pub fn with_entities<I>(entities: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            entities: entities.into_iter().collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times [`EntityRepository::list_entities`] was called.
    pub fn list_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<T> EntityRepository for CountingRepository<T>
where
    T: Locatable + Clone + Send + Sync,
{
    type Entity = T;

    fn list_entities(&self) -> Box<dyn Iterator<Item = T> + Send + '_> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::new(self.entities.iter().cloned())
    }
}

/// The six-restaurant catalogue used across behaviour tests.
///
/// Distances from central Paris, in ascending order: Paris itself, Lyon,
/// Bordeaux, Montpellier, Marseille, Nice.
pub fn sample_catalogue() -> Vec<Restaurant> {
    vec![
        Restaurant::new("1", "Le Petit Bistro", "Français")
            .with_location("Paris, 6ème")
            .with_rating(4.7, 243)
            .with_price("€€€")
            .with_coordinate(Coordinate::new(48.8566, 2.3522)),
        Restaurant::new("2", "Sushi Master", "Japonais")
            .with_location("Lyon, Centre")
            .with_rating(4.5, 187)
            .with_price("€€")
            .with_coordinate(Coordinate::new(45.7640, 4.8357)),
        Restaurant::new("3", "La Trattoria", "Italien")
            .with_location("Marseille, Vieux Port")
            .with_rating(4.2, 156)
            .with_price("€€")
            .with_coordinate(Coordinate::new(43.2965, 5.3698)),
        Restaurant::new("4", "Le Jardin Secret", "Méditerranéen")
            .with_location("Nice, Promenade")
            .with_rating(4.8, 102)
            .with_price("€€€")
            .with_coordinate(Coordinate::new(43.7102, 7.2620)),
        Restaurant::new("5", "Chez Paul", "Français")
            .with_location("Bordeaux, Centre")
            .with_rating(4.4, 167)
            .with_price("€€")
            .with_coordinate(Coordinate::new(44.8378, -0.5792)),
        Restaurant::new("6", "Le Café des Artistes", "Français")
            .with_location("Montpellier, Centre")
            .with_rating(4.6, 198)
            .with_price("€€")
            .with_coordinate(Coordinate::new(43.6108, 3.8767)),
    ]
}
