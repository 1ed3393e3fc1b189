//! Scalar building blocks the vector kernels are written in terms of.

/// Product of two values.
#[inline(always)]
pub fn multiply(a: f32, b: f32) -> f32 {
    a * b
}

/// Sum of two values.
#[inline(always)]
pub fn add(a: f32, b: f32) -> f32 {
    a + b
}

/// `a * b + c` with a single rounding step. Lowers to one FMA instruction
/// when the target supports it.
#[inline(always)]
pub fn fused_mul_add(a: f32, b: f32, c: f32) -> f32 {
    a.mul_add(b, c)
}
