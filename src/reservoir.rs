use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Single-pass uniform reservoir sampler (Algorithm R).
///
/// Holds at most `capacity` items in O(capacity) memory. The first `capacity`
/// accepted items fill the buffer in arrival order; the item with 0-based
/// arrival index `i >= capacity` replaces a uniformly drawn slot `j in [0, i]`
/// when `j < capacity`, giving every item of a stream of length `N` the same
/// `capacity / N` chance of surviving.
///
/// One RNG draw happens per item past the initial fill and none before it, so
/// the draw sequence depends only on how many items were observed, never on
/// their content. Seeded with `StdRng`, which makes runs reproducible within
/// one build of this tool; the `rand` crate does not promise a stable `StdRng`
/// algorithm across its major versions.
pub struct Reservoir<T> {
    items: Vec<T>,
    capacity: usize,
    observed: u64,
    rng: StdRng,
}

impl<T> Reservoir<T> {
    pub fn new(capacity: usize, seed: u64) -> Self {
        Reservoir {
            items: Vec::with_capacity(capacity),
            capacity,
            observed: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn observe(&mut self, item: T) {
        if self.items.len() < self.capacity {
            self.items.push(item);
        } else {
            let j = self.rng.gen_range(0..=self.observed);
            if (j as usize) < self.capacity {
                self.items[j as usize] = item;
            }
        }
        self.observed += 1;
    }

    /// Number of items offered to the reservoir so far.
    pub fn observed(&self) -> u64 {
        self.observed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(capacity: usize, seed: u64, stream: std::ops::Range<u32>) -> Vec<u32> {
        let mut reservoir = Reservoir::new(capacity, seed);
        for item in stream {
            reservoir.observe(item);
        }
        reservoir.into_items()
    }

    #[test]
    fn undersupplied_stream_is_kept_whole_in_arrival_order() {
        assert_eq!(sample(10, 0, 0..4), vec![0, 1, 2, 3]);
        assert_eq!(sample(10, 42, 0..10), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_reproduces_the_same_sample() {
        assert_eq!(sample(50, 7, 0..100_000), sample(50, 7, 0..100_000));
    }

    #[test]
    fn different_seeds_give_different_samples() {
        assert_ne!(sample(50, 1, 0..100_000), sample(50, 2, 0..100_000));
    }

    #[test]
    fn oversupplied_stream_fills_to_capacity() {
        let items = sample(5, 3, 0..1000);
        assert_eq!(items.len(), 5);
        let distinct: std::collections::HashSet<_> = items.iter().collect();
        assert_eq!(distinct.len(), 5);
    }

    #[test]
    fn selection_is_close_to_uniform() {
        let n = 20u32;
        let capacity = 5;
        let trials = 2000u32;
        let mut hits = vec![0u32; n as usize];

        for seed in 0..trials {
            for item in sample(capacity, seed as u64, 0..n) {
                hits[item as usize] += 1;
            }
        }

        // Expected frequency is capacity / n = 0.25; bounds are > 5 sigma out
        for (item, &count) in hits.iter().enumerate() {
            let freq = count as f64 / trials as f64;
            assert!(
                (0.15..=0.35).contains(&freq),
                "item {} selected with frequency {}",
                item,
                freq
            );
        }
    }
}
