//! Data access traits for locatable entities.
//!
//! The `EntityRepository` trait decouples ranking and search from wherever a
//! catalogue lives. Consumers list every entity and decide what to do with
//! them; the repository itself performs no filtering or ordering.

use crate::Locatable;

/// Read-only access to a catalogue of locatable entities.
///
/// # Examples
///
/// ```rust
/// use tablefinder_core::{Coordinate, EntityRepository, MemoryRepository};
///
/// let repository = MemoryRepository::with_entities([
///     Coordinate::new(48.8566, 2.3522),
///     Coordinate::new(45.7640, 4.8357),
/// ]);
/// assert_eq!(repository.list_entities().count(), 2);
/// ```
pub trait EntityRepository {
    /// The entity type held in the catalogue.
    type Entity: Locatable;

    /// Return every entity in catalogue order.
    fn list_entities(&self) -> Box<dyn Iterator<Item = Self::Entity> + Send + '_>;
}

/// In-memory `EntityRepository` that yields clones of its entities.
///
/// The repository performs a linear scan and suits small catalogues.
#[derive(Debug, Clone)]
pub struct MemoryRepository<T> {
    entities: Vec<T>,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
        }
    }
}

impl<T> MemoryRepository<T> {
    /// Create a repository from a collection of entities.
    pub fn with_entities<I>(entities: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            entities: entities.into_iter().collect(),
        }
    }

    /// Number of entities held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the repository holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<T> EntityRepository for MemoryRepository<T>
where
    T: Locatable + Clone + Send + Sync,
{
    type Entity = T;

    fn list_entities(&self) -> Box<dyn Iterator<Item = T> + Send + '_> {
        Box::new(self.entities.iter().cloned())
    }
}
