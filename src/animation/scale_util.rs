// src/animation/scale_util.rs
//
// Shapes a node's raw scale into staggered per-segment scales.

use std::f32::consts::PI;

/// Progress of segment `i` of `n`, lagging `i / n` behind `scale`. Never negative.
pub fn max_scale(scale: f32, i: usize, n: usize) -> f32 {
    (scale - i as f32 / n as f32).max(0.0)
}

/// Progress of segment `i` of `n`, normalized to [0, 1].
pub fn divide_scale(scale: f32, i: usize, n: usize) -> f32 {
    let n_f = n as f32;
    (1.0 / n_f).min(max_scale(scale, i, n)) * n_f
}

/// Rises from 0 to 1 at the half-way point and falls back to 0.
pub fn sinify(scale: f32) -> f32 {
    (scale * PI).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_max_scale_staggers_segments() {
        let tests = vec![
            // Format: (scale, i, n, expected)
            (0.5, 0, 3, 0.5),
            (0.5, 1, 3, 0.5 - 1.0 / 3.0),
            (0.5, 2, 3, 0.0),
            (1.0, 2, 3, 1.0 / 3.0),
            (0.0, 1, 2, 0.0),
        ];

        for (scale, i, n, expected) in tests {
            let result = max_scale(scale, i, n);
            assert!(
                (result - expected).abs() < EPSILON,
                "Failed for scale:{}, i:{}, n:{} -> {}",
                scale,
                i,
                n,
                result
            );
        }
    }

    #[test]
    fn test_divide_scale_stays_in_unit_range() {
        for n in 1..=5 {
            for i in 0..n {
                for step in 0..=100 {
                    let scale = step as f32 / 100.0;
                    let result = divide_scale(scale, i, n);
                    assert!(
                        (0.0..=1.0 + EPSILON).contains(&result),
                        "Out of range for scale:{}, i:{}, n:{} -> {}",
                        scale,
                        i,
                        n,
                        result
                    );
                }
            }
        }
    }

    #[test]
    fn test_divide_scale_segments_fill_in_order() {
        // A third of the way through, segment 0 is done and the others have not started
        let scale = 1.0 / 3.0;
        assert!((divide_scale(scale, 0, 3) - 1.0).abs() < EPSILON);
        assert!(divide_scale(scale, 1, 3).abs() < EPSILON);
        assert!(divide_scale(scale, 2, 3).abs() < EPSILON);

        // At the end every segment is done
        for i in 0..3 {
            assert!((divide_scale(1.0, i, 3) - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_sinify() {
        assert!(sinify(0.0).abs() < EPSILON);
        assert!(sinify(1.0).abs() < EPSILON);
        assert!((sinify(0.5) - 1.0).abs() < EPSILON);
        assert!((sinify(0.25) - sinify(0.75)).abs() < EPSILON);
    }
}
