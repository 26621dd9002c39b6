//! Free-text filtering of the restaurant catalogue.

use crate::Restaurant;

/// Keep the restaurants whose name, cuisine or location label contains
/// `query`, ignoring case.
///
/// A blank query keeps everything. Matching restaurants stay in input order.
///
/// # Examples
/// ```
/// use tablefinder_core::{Restaurant, search_restaurants};
///
/// let catalogue = vec![
///     Restaurant::new("1", "Le Petit Bistro", "Français").with_location("Paris, 6ème"),
///     Restaurant::new("2", "Sushi Master", "Japonais").with_location("Lyon, Centre"),
/// ];
/// let found = search_restaurants("lyon", catalogue);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name, "Sushi Master");
/// ```
pub fn search_restaurants<I>(query: &str, restaurants: I) -> Vec<Restaurant>
where
    I: IntoIterator<Item = Restaurant>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return restaurants.into_iter().collect();
    }
    restaurants
        .into_iter()
        .filter(|restaurant| matches(restaurant, &needle))
        .collect()
}

fn matches(restaurant: &Restaurant, needle: &str) -> bool {
    [
        restaurant.name.as_str(),
        restaurant.cuisine.as_str(),
        restaurant.location.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
