//! Seeded random input buffers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The three equal-length input buffers of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffers {
    pub a: Vec<f32>,
    pub b: Vec<f32>,
    pub c: Vec<f32>,
}

impl SampleBuffers {
    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }
}

/// Fills `a`, `b` and `c` with independent uniform values in `[-1, 1)`.
///
/// Values are drawn per index in `a`, `b`, `c` order, so a given seed always
/// produces the same buffers.
pub fn generate_inputs(n: usize, seed: u64) -> SampleBuffers {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut a = Vec::with_capacity(n);
    let mut b = Vec::with_capacity(n);
    let mut c = Vec::with_capacity(n);

    for _ in 0..n {
        a.push(rng.gen_range(-1.0f32..1.0));
        b.push(rng.gen_range(-1.0f32..1.0));
        c.push(rng.gen_range(-1.0f32..1.0));
    }

    SampleBuffers { a, b, c }
}
