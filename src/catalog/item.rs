//! Item and catalog types.

use rand::Rng;

/// Inclusive price range used by [`Catalog::random`].
const RANDOM_PRICE: (u32, u32) = (1, 50);

/// Inclusive weight range used by [`Catalog::random`].
const RANDOM_WEIGHT: (u32, u32) = (1, 10);

/// A knapsack item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub price: u32,
    pub weight: u32,
}

impl Item {
    pub fn new(price: u32, weight: u32) -> Self {
        Self { price, weight }
    }
}

impl From<(u32, u32)> for Item {
    fn from((price, weight): (u32, u32)) -> Self {
        Self::new(price, weight)
    }
}

/// Ordered, immutable list of items for one run.
///
/// Position matters: item `i` is controlled by bit `i` of a
/// [`Candidate`](crate::ga::Candidate).
///
/// ```
/// use u_knapsack::catalog::{Catalog, Item};
///
/// let catalog: Catalog = [(10, 5), (20, 10)].into_iter().collect();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog[1], Item::new(20, 10));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Generates `count` random items with price in `1..=50` and weight
    /// in `1..=10`.
    pub fn random<R: Rng>(count: usize, rng: &mut R) -> Self {
        let items = (0..count)
            .map(|_| Item {
                price: rng.random_range(RANDOM_PRICE.0..=RANDOM_PRICE.1),
                weight: rng.random_range(RANDOM_WEIGHT.0..=RANDOM_WEIGHT.1),
            })
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl std::ops::Index<usize> for Catalog {
    type Output = Item;

    fn index(&self, index: usize) -> &Item {
        &self.items[index]
    }
}

impl From<Vec<Item>> for Catalog {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl<T: Into<Item>> FromIterator<T> for Catalog {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_from_pairs_preserves_order() {
        let catalog: Catalog = [(3, 1), (1, 3), (2, 2)].into_iter().collect();
        let prices: Vec<u32> = catalog.iter().map(|i| i.price).collect();
        assert_eq!(prices, vec![3, 1, 2]);
    }

    #[test]
    fn test_random_ranges() {
        let mut rng = create_rng(42);
        let catalog = Catalog::random(500, &mut rng);
        assert_eq!(catalog.len(), 500);
        for item in &catalog {
            assert!((1..=50).contains(&item.price), "price {}", item.price);
            assert!((1..=10).contains(&item.weight), "weight {}", item.weight);
        }
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = Catalog::random(20, &mut create_rng(9));
        let b = Catalog::random(20, &mut create_rng(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
