//! Rank a catalogue around the caller's current position.
//!
//! This module wires the two injected seams, [`PositionProvider`] and
//! [`EntityRepository`], to [`ProximityRanker`]. The provider is awaited once;
//! the ranker only runs when it yields a position.

use log::{info, warn};

use crate::{
    EntityRepository, PositionProvider, PositionUnavailable, ProximityRanker, RankedEntity,
};

/// Result of a nearby listing request.
///
/// When no position is available the catalogue is returned in its original
/// order with every distance unset, so a caller can keep showing it.
#[derive(Debug, Clone, PartialEq)]
pub enum NearbyOutcome<T> {
    /// The listing was ranked by distance from the caller.
    Ranked(Vec<RankedEntity<T>>),
    /// No position was available; the listing is in catalogue order.
    Unranked {
        /// Entities in catalogue order with no distances.
        listing: Vec<RankedEntity<T>>,
        /// Why the position could not be obtained.
        reason: PositionUnavailable,
    },
}

impl<T> NearbyOutcome<T> {
    /// The listing to display, ranked or not.
    pub fn listing(&self) -> &[RankedEntity<T>] {
        match self {
            Self::Ranked(listing) | Self::Unranked { listing, .. } => listing,
        }
    }

    /// Consume the outcome and return the listing.
    pub fn into_listing(self) -> Vec<RankedEntity<T>> {
        match self {
            Self::Ranked(listing) | Self::Unranked { listing, .. } => listing,
        }
    }

    /// Whether the listing is ordered by distance.
    pub const fn is_ranked(&self) -> bool {
        matches!(self, Self::Ranked(_))
    }
}

/// Rank every entity in `repository` around the provider's position.
///
/// # Errors
///
/// Returns the provider's [`PositionUnavailable`] reason without listing or
/// ranking anything.
///
/// # Examples
/// ```
/// use tablefinder_core::{
///     Coordinate, FixedPositionProvider, MemoryRepository, rank_nearby,
/// };
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let provider = FixedPositionProvider::new(Coordinate::new(48.8566, 2.3522));
/// let repository = MemoryRepository::with_entities([
///     Coordinate::new(43.7102, 7.2620),
///     Coordinate::new(45.7640, 4.8357),
/// ]);
/// let ranked = rank_nearby(&provider, &repository).await?;
/// assert_eq!(ranked[0].entity, Coordinate::new(45.7640, 4.8357));
/// # Ok::<(), tablefinder_core::PositionUnavailable>(())
/// # }).unwrap();
/// ```
pub async fn rank_nearby<P, R>(
    provider: &P,
    repository: &R,
) -> Result<Vec<RankedEntity<R::Entity>>, PositionUnavailable>
where
    P: PositionProvider + ?Sized,
    R: EntityRepository + ?Sized,
{
    let reference = match provider.current_position().await {
        Ok(reference) => reference,
        Err(reason) => {
            warn!("cannot rank nearby entities: {reason}");
            return Err(reason);
        }
    };
    let ranked = ProximityRanker::new().rank(reference, repository.list_entities());
    info!("sorted {} entities by proximity", ranked.len());
    Ok(ranked)
}

/// Like [`rank_nearby`], but falls back to the unranked catalogue.
pub async fn nearby_listing<P, R>(provider: &P, repository: &R) -> NearbyOutcome<R::Entity>
where
    P: PositionProvider + ?Sized,
    R: EntityRepository + ?Sized,
{
    match rank_nearby(provider, repository).await {
        Ok(ranked) => NearbyOutcome::Ranked(ranked),
        Err(reason) => NearbyOutcome::Unranked {
            listing: repository
                .list_entities()
                .map(RankedEntity::unranked)
                .collect(),
            reason,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CountingRepository, UnavailablePositionProvider};
    use crate::{Coordinate, FixedPositionProvider, MemoryRepository, Restaurant};
    use rstest::{fixture, rstest};

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("current-thread runtime")
            .block_on(future)
    }

    #[fixture]
    fn catalogue() -> Vec<Restaurant> {
        vec![
            Restaurant::new("5", "Chez Paul", "Français")
                .with_coordinate(Coordinate::new(44.8378, -0.5792)),
            Restaurant::new("2", "Sushi Master", "Japonais")
                .with_coordinate(Coordinate::new(45.7640, 4.8357)),
        ]
    }

    #[rstest]
    fn ranks_catalogue_when_position_is_known(catalogue: Vec<Restaurant>) {
        let provider = FixedPositionProvider::new(Coordinate::new(48.8566, 2.3522));
        let repository = MemoryRepository::with_entities(catalogue);
        let outcome = block_on(nearby_listing(&provider, &repository));
        assert!(outcome.is_ranked());
        let ids: Vec<&str> = outcome
            .listing()
            .iter()
            .map(|r| r.entity.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "5"]);
    }

    #[rstest]
    #[case(PositionUnavailable::PermissionDenied)]
    #[case(PositionUnavailable::Timeout)]
    #[case(PositionUnavailable::Unsupported)]
    fn leaves_catalogue_order_when_position_is_unavailable(
        catalogue: Vec<Restaurant>,
        #[case] reason: PositionUnavailable,
    ) {
        let provider = UnavailablePositionProvider::new(reason);
        let repository = MemoryRepository::with_entities(catalogue.clone());
        let outcome = block_on(nearby_listing(&provider, &repository));
        let NearbyOutcome::Unranked {
            listing,
            reason: reported,
        } = outcome
        else {
            panic!("expected an unranked listing");
        };
        assert_eq!(reported, reason);
        let entities: Vec<Restaurant> = listing.into_iter().map(RankedEntity::into_inner).collect();
        assert_eq!(entities, catalogue);
    }

    #[rstest]
    fn does_not_list_entities_without_a_position(catalogue: Vec<Restaurant>) {
        let provider = UnavailablePositionProvider::new(PositionUnavailable::Timeout);
        let repository = CountingRepository::with_entities(catalogue);
        let result = block_on(rank_nearby(&provider, &repository));
        assert_eq!(result, Err(PositionUnavailable::Timeout));
        assert_eq!(repository.list_calls(), 0);
    }
}
