//! Property tests for the kernel library.

use modfuse::benchmarks::generate_inputs;
use modfuse::kernels::{vec_add, vec_fused_mul_add, vec_mul, vec_separate_mul_add};

/// Allowed gap between separate and fused results for one element.
fn tolerance(a: f32, b: f32, c: f32) -> f64 {
    let magnitude = (a as f64 * b as f64).abs() + (c as f64).abs();
    2.0 * f32::EPSILON as f64 * magnitude + f64::from(f32::MIN_POSITIVE)
}

#[test]
fn separate_and_fused_agree_elementwise() {
    for (n, seed) in [(1, 1), (17, 2), (1_000, 3), (100_000, 4)] {
        let inputs = generate_inputs(n, seed);
        let mut separate = vec![0.0f32; n];
        let mut fused = vec![0.0f32; n];

        vec_separate_mul_add(&inputs.a, &inputs.b, &inputs.c, &mut separate);
        vec_fused_mul_add(&inputs.a, &inputs.b, &inputs.c, &mut fused);

        for i in 0..n {
            let diff = (separate[i] as f64 - fused[i] as f64).abs();
            let allowed = tolerance(inputs.a[i], inputs.b[i], inputs.c[i]);
            assert!(
                diff <= allowed,
                "Mismatch at index {} (n={}): separate {}, fused {}, diff {}",
                i,
                n,
                separate[i],
                fused[i],
                diff
            );
        }
    }
}

#[test]
fn large_magnitudes_stay_close() {
    let a = [1.0e6f32, -3.5e4, 7.25];
    let b = [2.5e3f32, 1.0e4, -1.0e7];
    let c = [1.0f32, 123.0, 5.0e7];
    let mut separate = [0.0f32; 3];
    let mut fused = [0.0f32; 3];

    vec_separate_mul_add(&a, &b, &c, &mut separate);
    vec_fused_mul_add(&a, &b, &c, &mut fused);

    for i in 0..3 {
        let diff = (separate[i] as f64 - fused[i] as f64).abs();
        assert!(diff <= tolerance(a[i], b[i], c[i]));
    }
}

#[test]
fn zero_length_is_a_no_op() {
    let empty: [f32; 0] = [];
    let mut out: [f32; 0] = [];

    vec_mul(&empty, &empty, &mut out);
    vec_add(&empty, &empty, &mut out);
    vec_separate_mul_add(&empty, &empty, &empty, &mut out);
    vec_fused_mul_add(&empty, &empty, &empty, &mut out);

    let inputs = [1.0f32, 2.0];
    let mut untouched = [9.0f32, 9.0];
    vec_fused_mul_add(&inputs, &inputs, &inputs, &mut untouched[..0]);
    assert_eq!(untouched, [9.0, 9.0]);
}

#[test]
fn mul_and_add_are_repeatable() {
    let inputs = generate_inputs(4_096, 99);

    let mut first = vec![0.0f32; 4_096];
    let mut second = vec![1.0f32; 4_096];
    vec_mul(&inputs.a, &inputs.b, &mut first);
    vec_mul(&inputs.a, &inputs.b, &mut second);
    assert_eq!(first, second);

    let mut first = vec![0.0f32; 4_096];
    let mut second = vec![-1.0f32; 4_096];
    vec_add(&inputs.a, &inputs.c, &mut first);
    vec_add(&inputs.a, &inputs.c, &mut second);
    assert_eq!(first, second);
}

#[test]
fn separate_matches_mul_then_add_kernels() {
    let inputs = generate_inputs(2_048, 5);
    let mut product = vec![0.0f32; 2_048];
    let mut expected = vec![0.0f32; 2_048];
    let mut separate = vec![0.0f32; 2_048];

    vec_mul(&inputs.a, &inputs.b, &mut product);
    vec_add(&product, &inputs.c, &mut expected);
    vec_separate_mul_add(&inputs.a, &inputs.b, &inputs.c, &mut separate);

    assert_eq!(separate, expected);
}
