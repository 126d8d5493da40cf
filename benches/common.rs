use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reproducible sample of `len` values in `[0, spread)`.
pub fn sample(len: usize, spread: i32) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..len).map(|_| rng.gen_range(0..spread)).collect()
}
