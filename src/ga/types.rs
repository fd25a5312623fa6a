//! Candidate and population representation.
//!
//! A [`Candidate`] is a fixed-length inclusion vector over the catalog:
//! bit `i` set means item `i` goes into the knapsack. Bits are independent;
//! the weight cap is enforced only through fitness.

use rand::Rng;

/// Fitness score of a candidate. Higher is better.
///
/// Feasible candidates score their total price; infeasible candidates
/// score zero or less.
pub type Fitness = i64;

/// An ordered collection of candidates.
pub type Population = Vec<Candidate>;

/// A candidate solution: one inclusion bit per catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Candidate {
    genes: Vec<bool>,
}

impl Candidate {
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// A candidate with every item excluded.
    pub fn excluded(len: usize) -> Self {
        Self {
            genes: vec![false; len],
        }
    }

    /// A candidate whose bits are drawn independently and uniformly.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            genes: (0..len).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub fn is_included(&self, index: usize) -> bool {
        self.genes[index]
    }

    /// Negates bit `index`.
    pub fn flip(&mut self, index: usize) {
        self.genes[index] = !self.genes[index];
    }

    /// Indices of included items, ascending.
    pub fn included(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &bit)| bit.then_some(i))
    }

    pub fn into_genes(self) -> Vec<bool> {
        self.genes
    }
}

impl From<Vec<bool>> for Candidate {
    fn from(genes: Vec<bool>) -> Self {
        Self::new(genes)
    }
}

/// Creates `population_size` random candidates of length `item_count`.
pub fn initialize<R: Rng>(item_count: usize, population_size: usize, rng: &mut R) -> Population {
    (0..population_size)
        .map(|_| Candidate::random(item_count, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_initialize_shape() {
        let mut rng = create_rng(42);
        let population = initialize(13, 40, &mut rng);
        assert_eq!(population.len(), 40);
        assert!(population.iter().all(|c| c.len() == 13));
    }

    #[test]
    fn test_initialize_zero_items() {
        let mut rng = create_rng(42);
        let population = initialize(0, 5, &mut rng);
        assert_eq!(population.len(), 5);
        assert!(population.iter().all(Candidate::is_empty));
    }

    #[test]
    fn test_random_bits_are_mixed() {
        let mut rng = create_rng(42);
        let candidate = Candidate::random(1000, &mut rng);
        let ones = candidate.included().count();
        assert!(
            (400..600).contains(&ones),
            "expected roughly half the bits set, got {ones}/1000"
        );
    }

    #[test]
    fn test_flip_and_included() {
        let mut candidate = Candidate::excluded(5);
        assert_eq!(candidate.included().count(), 0);
        candidate.flip(1);
        candidate.flip(4);
        assert_eq!(candidate.included().collect::<Vec<_>>(), vec![1, 4]);
        candidate.flip(1);
        assert_eq!(candidate.included().collect::<Vec<_>>(), vec![4]);
        assert!(candidate.is_included(4));
        assert!(!candidate.is_included(0));
    }
}
