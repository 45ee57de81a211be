//! Deterministic randomness keyed by string seeds.
//!
//! Nothing in the generation pipeline may reach for ambient entropy. Every
//! generator builds its own [`SeededRng`] from an explicit seed string, so two
//! generators given the same seed produce the same output regardless of the
//! order they run in.

use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};

/// Hash a seed string to 32 bits with two independent accumulators.
///
/// Each accumulator mixes every character with a different multiplier and the
/// two are folded together at the end, so seeds differing in a single
/// character (`"town-1"` vs `"town-2"`) land far apart.
pub fn hash_seed(seed: &str) -> u32 {
    let mut h1: u32 = 0xdead_beef;
    let mut h2: u32 = 0x41c6_ce57;
    for ch in seed.chars() {
        let c = ch as u32;
        h1 = (h1 ^ c).wrapping_mul(2_654_435_761);
        h2 = (h2 ^ c).wrapping_mul(1_597_334_677);
    }
    h1 = (h1 ^ (h1 >> 16)).wrapping_mul(2_246_822_507) ^ (h2 ^ (h2 >> 13)).wrapping_mul(3_266_489_909);
    h2 = (h2 ^ (h2 >> 16)).wrapping_mul(2_246_822_507) ^ (h1 ^ (h1 >> 13)).wrapping_mul(3_266_489_909);
    h1 ^ h2
}

/// Short base-36 tag derived from a string, for building stable ids.
pub fn short_hash(input: &str) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut n = hash_seed(input);
    let mut out = Vec::with_capacity(7);
    loop {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
        if n == 0 {
            break;
        }
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Small, fast 32-bit generator (multiply-xorshift) seeded from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: &str) -> Self {
        Self {
            state: hash_seed(seed),
        }
    }

    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6d2b_79f5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.step()) / 4_294_967_296.0
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        assert!(min <= max, "next_int called with min {min} > max {max}");
        let span = (max - min + 1) as f64;
        min + (self.next_f64() * span).floor() as i64
    }

    /// Uniform index into a collection of `len` items.
    pub fn index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty collection");
        ((self.next_f64() * len as f64).floor() as usize).min(len - 1)
    }

    /// Pick one element. Panics on an empty slice: that is a content bug, not
    /// something a retry can fix.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.index(items.len())]
    }

    /// Fisher-Yates shuffled copy, one draw per swap.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        for i in (1..out.len()).rev() {
            let j = self.index(i + 1);
            out.swap(i, j);
        }
        out
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for SeededRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u32::from_le_bytes(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_hash() {
        assert_eq!(hash_seed("bridal-falls"), hash_seed("bridal-falls"));
    }

    #[test]
    fn similar_seeds_differ() {
        assert_ne!(hash_seed("town-1"), hash_seed("town-2"));
        assert_ne!(hash_seed("ab"), hash_seed("ba"));
        assert_ne!(hash_seed(""), hash_seed(" "));
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRng::new("seed-42");
        let mut b = SeededRng::new("seed-42");
        let va: Vec<f64> = (0..20).map(|_| a.next_f64()).collect();
        let vb: Vec<f64> = (0..20).map(|_| b.next_f64()).collect();
        assert_eq!(va, vb);
    }

    #[test]
    fn next_f64_in_unit_interval() {
        let mut rng = SeededRng::new("unit");
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "{v} out of range");
        }
    }

    #[test]
    fn next_int_inclusive_bounds() {
        let mut rng = SeededRng::new("dice");
        let mut seen = [false; 6];
        for _ in 0..500 {
            let v = rng.next_int(1, 6);
            assert!((1..=6).contains(&v));
            seen[(v - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every face should come up: {seen:?}");
        assert_eq!(rng.next_int(3, 3), 3);
    }

    #[test]
    #[should_panic(expected = "empty")]
    fn pick_from_empty_panics() {
        let mut rng = SeededRng::new("empty");
        let items: [u8; 0] = [];
        rng.pick(&items);
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = SeededRng::new("shuffle");
        let items: Vec<u32> = (0..10).collect();
        let mut shuffled = rng.shuffle(&items);
        assert_eq!(shuffled.len(), items.len());
        shuffled.sort();
        assert_eq!(shuffled, items);
    }

    #[test]
    fn drives_rand_helpers() {
        use rand::Rng;
        let mut a = SeededRng::new("rand-interop");
        let mut b = SeededRng::new("rand-interop");
        let va: Vec<u8> = (0..10).map(|_| a.random_range(10..=90)).collect();
        let vb: Vec<u8> = (0..10).map(|_| b.random_range(10..=90)).collect();
        assert_eq!(va, vb);
        assert!(va.iter().all(|v| (10..=90).contains(v)));
    }

    #[test]
    fn short_hash_is_stable_and_compact() {
        let h = short_hash("bridal-falls:0");
        assert_eq!(h, short_hash("bridal-falls:0"));
        assert_ne!(h, short_hash("bridal-falls:1"));
        assert!(h.len() <= 7 && h.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
