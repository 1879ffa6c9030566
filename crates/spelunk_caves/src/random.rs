//! # Chunk Random Stream
//!
//! Per-chunk pseudo-random draws for choices that want variety rather than
//! coordinate-stable output: vein counts and origins, icicle lengths, torch
//! faces.
//!
//! The stream is seeded from a noise sample at the chunk coordinates mixed
//! with the coordinates and the world seed, so neighbouring chunks do not
//! correlate and the same world decorates the same way twice.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::noise::NoiseField;
use crate::world::ChunkCoord;

/// Random stream owned by a single chunk transform.
pub struct ChunkRandom {
    rng: ChaCha8Rng,
}

impl ChunkRandom {
    /// Seeds the stream for `chunk`.
    #[must_use]
    pub fn for_chunk(noise: &NoiseField, chunk: ChunkCoord) -> Self {
        let sample = noise.sample2(f64::from(chunk.x), f64::from(chunk.z));
        let mixed = noise
            .seed()
            .derive(sample.to_bits())
            .derive(u64::from(chunk.x as u32))
            .derive(u64::from(chunk.z as u32) << 32);
        Self::from_seed(mixed.value())
    }

    /// Seeds the stream directly.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `0..bound`; `0` when `bound` is `0`.
    pub fn next_int(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }

    /// Fair coin.
    pub fn next_bool(&mut self) -> bool {
        self.rng.gen()
    }

    /// Uniform index in `0..len`; `0` when `len` is `0`.
    pub fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }

    /// Uniformly chosen element, `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.next_index(items.len());
        items.get(index)
    }

    /// `median` plus the difference of two uniform draws from `0..=dist`.
    ///
    /// Triangular around `median`, within `median - dist..=median + dist`.
    pub fn spread(&mut self, median: i32, dist: u32) -> i32 {
        let up = self.next_int(dist + 1);
        let down = self.next_int(dist + 1);
        median + up as i32 - down as i32
    }
}
