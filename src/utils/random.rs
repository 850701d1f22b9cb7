use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform draws for ticket sampling.
pub trait RandomSource {
    /// Next real number in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in the inclusive range `[min, max]`.
    fn rand(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min <= max);
        let span = (max - min) as f64 + 1.0;
        let offset = (self.next_unit() * span).floor() as u32;
        // r < 1 keeps offset in range; clamp guards float rounding at the top
        min + offset.min(max - min)
    }
}

/// [`RandomSource`] backed by a `rand` generator.
pub struct UniformSource<R> {
    rng: R,
}

impl UniformSource<ThreadRng> {
    pub fn thread() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl UniformSource<StdRng> {
    /// Reproducible stream: equal seeds give equal draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSource for UniformSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// `count` pairwise distinct values from `[min, max]`, in draw order.
///
/// Repeats are discarded and redrawn, so callers must ensure
/// `count <= max - min + 1`.
pub fn sample_distinct<R: RandomSource + ?Sized>(
    rng: &mut R,
    min: u32,
    max: u32,
    count: u32,
) -> Vec<u32> {
    let mut picked: Vec<u32> = Vec::with_capacity(count as usize);
    while picked.len() < count as usize {
        let n = rng.rand(min, max);
        if !picked.contains(&n) {
            picked.push(n);
        }
    }
    picked
}

/// `count` independent values from `[min, max]`; repeats allowed.
pub fn sample_independent<R: RandomSource + ?Sized>(
    rng: &mut R,
    min: u32,
    max: u32,
    count: u32,
) -> Vec<u32> {
    (0..count).map(|_| rng.rand(min, max)).collect()
}
