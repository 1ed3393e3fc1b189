//! Elementwise kernels over flat `f32` buffers.
//!
//! Every kernel writes `out.len()` elements. Inputs must be at least as long
//! as `out`; this is only checked in debug builds.

use super::scalar::{add, fused_mul_add, multiply};

/// `out[i] = a[i] * b[i]`
pub fn vec_mul(a: &[f32], b: &[f32], out: &mut [f32]) {
    debug_assert!(a.len() >= out.len() && b.len() >= out.len());

    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = multiply(x, y);
    }
}

/// `out[i] = a[i] + b[i]`
pub fn vec_add(a: &[f32], b: &[f32], out: &mut [f32]) {
    debug_assert!(a.len() >= out.len() && b.len() >= out.len());

    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = add(x, y);
    }
}

/// Two-pass `out = a * b + c`.
///
/// The first pass writes the products into `out`, the second reads them back
/// and adds `c` in place. No scratch buffer is used, so the traffic is two full
/// passes: read `a`, `b`, write `out`, then read `out`, `c`, write `out`.
pub fn vec_separate_mul_add(a: &[f32], b: &[f32], c: &[f32], out: &mut [f32]) {
    debug_assert!(c.len() >= out.len());

    vec_mul(a, b, out);

    for (o, &z) in out.iter_mut().zip(c) {
        *o = add(*o, z);
    }
}

/// One-pass `out[i] = fma(a[i], b[i], c[i])`.
pub fn vec_fused_mul_add(a: &[f32], b: &[f32], c: &[f32], out: &mut [f32]) {
    debug_assert!(a.len() >= out.len() && b.len() >= out.len() && c.len() >= out.len());

    for (((o, &x), &y), &z) in out.iter_mut().zip(a).zip(b).zip(c) {
        *o = fused_mul_add(x, y, z);
    }
}
