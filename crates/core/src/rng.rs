//! RNG module - deterministic dealing
//!
//! A small seeded generator is enough for card shuffling: the deal has to be
//! uniform, not unpredictable. Keeping it in-tree makes rounds reproducible
//! from a seed, which the tests and the property suite rely on.

/// SplitMix64 generator
///
/// Cheap to copy, so a round can carry its own generator and re-deal on
/// restart without touching any shared state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new RNG with the given seed (any value, including 0)
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next random u64
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `[0, bound)`
    ///
    /// Rejects draws from the incomplete top bucket so every residue is
    /// equally likely. `bound` must be non-zero.
    pub fn next_below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0, "next_below bound must be non-zero");
        let bound = bound.max(1);
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let v = self.next_u64();
            if v < zone {
                return v % bound;
            }
        }
    }

    /// Shuffle a slice in place (Fisher-Yates, from the end)
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_below((i + 1) as u64) as usize;
            slice.swap(i, j);
        }
    }

    /// `count` distinct values from the inclusive range `min..=max`
    ///
    /// Runs a partial Fisher-Yates over the range, so each subset (and each
    /// ordering of it) is equally likely. A range smaller than `count` yields
    /// the whole range, shuffled.
    pub fn sample_distinct(&mut self, min: u32, max: u32, count: usize) -> Vec<u32> {
        if max < min {
            return Vec::new();
        }
        let mut pool: Vec<u32> = (min..=max).collect();
        let take = count.min(pool.len());
        for i in 0..take {
            let remaining = (pool.len() - i) as u64;
            let j = i + self.next_below(remaining) as usize;
            pool.swap(i, j);
        }
        pool.truncate(take);
        pool
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
