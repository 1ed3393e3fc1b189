//! Kernel library: scalar building blocks, vector kernels and their cost model.
//!
//! The vector kernels are pure loops over caller-owned buffers. They never
//! allocate and never fail. [`KernelKind`] names each kernel together with the
//! memory traffic and flop count the measurement harness needs, since those
//! cannot be recovered from an opaque closure.

pub mod scalar;
pub mod vector;

pub use scalar::{add, fused_mul_add, multiply};
pub use vector::{vec_add, vec_fused_mul_add, vec_mul, vec_separate_mul_add};

/// Bytes per buffer element.
pub const BYTES_PER_FLOAT: u64 = std::mem::size_of::<f32>() as u64;

/// The benchmarked kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelKind {
    SeparateMulAdd,
    FusedMulAdd,
    Multiply,
    Add,
}

impl KernelKind {
    /// All kernels in reporting order.
    pub const ALL: [KernelKind; 4] = [
        KernelKind::SeparateMulAdd,
        KernelKind::FusedMulAdd,
        KernelKind::Multiply,
        KernelKind::Add,
    ];

    /// Row label used in the results table.
    pub fn label(&self) -> &'static str {
        match self {
            KernelKind::SeparateMulAdd => "separate mul+add",
            KernelKind::FusedMulAdd => "fused mul-add (FMA)",
            KernelKind::Multiply => "mul only",
            KernelKind::Add => "add only",
        }
    }

    /// Floats read plus floats written per element.
    ///
    /// The separate kernel counts both passes: `a`, `b`, `out` then `out`, `c`, `out`.
    pub fn floats_per_element(&self) -> u64 {
        match self {
            KernelKind::SeparateMulAdd => 6,
            KernelKind::FusedMulAdd => 4,
            KernelKind::Multiply | KernelKind::Add => 3,
        }
    }

    pub fn flops_per_element(&self) -> u64 {
        match self {
            KernelKind::SeparateMulAdd | KernelKind::FusedMulAdd => 2,
            KernelKind::Multiply | KernelKind::Add => 1,
        }
    }

    /// Total bytes moved by `iters` calls over `n` elements.
    pub fn bytes_moved(&self, n: usize, iters: u32) -> u64 {
        n as u64 * self.floats_per_element() * BYTES_PER_FLOAT * iters as u64
    }

    /// Total floating-point operations of `iters` calls over `n` elements.
    pub fn flops(&self, n: usize, iters: u32) -> u64 {
        n as u64 * self.flops_per_element() * iters as u64
    }

    /// Runs the kernel once. `c` is ignored by the two-input kernels.
    pub fn apply(&self, a: &[f32], b: &[f32], c: &[f32], out: &mut [f32]) {
        match self {
            KernelKind::SeparateMulAdd => vec_separate_mul_add(a, b, c, out),
            KernelKind::FusedMulAdd => vec_fused_mul_add(a, b, c, out),
            KernelKind::Multiply => vec_mul(a, b, out),
            KernelKind::Add => vec_add(a, b, out),
        }
    }
}
