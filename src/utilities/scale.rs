// src/utilities/scale.rs
//
// Progress math: splitting one sweep into sequential phases,
// and the sinusoidal pulse that drives the whole motif.

use std::f32::consts::PI;

/// Progress attributable to phase `i` of `n` once `scale` has passed `i / n`.
pub fn bounded_progress(scale: f32, i: usize, n: usize) -> f32 {
    (scale - i as f32 / n as f32).max(0.0)
}

/// Phase `i` of `n`, normalized to 0..=1.
pub fn phase_progress(scale: f32, i: usize, n: usize) -> f32 {
    let n_f = n as f32;
    (1.0 / n_f).min(bounded_progress(scale, i, n)) * n_f
}

/// 0 -> 1 -> 0 pulse as `scale` sweeps 0 -> 1.
pub fn ease(scale: f32) -> f32 {
    (scale * PI).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_ease_endpoints_and_peak() {
        assert!(ease(0.0).abs() < EPSILON);
        assert!(ease(1.0).abs() < EPSILON);
        assert!((ease(0.5) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_ease_stays_in_unit_range() {
        for step in 0..=100 {
            let scale = step as f32 / 100.0;
            let value = ease(scale);
            assert!(
                (-EPSILON..=1.0 + EPSILON).contains(&value),
                "ease({}) = {} out of range",
                scale,
                value
            );
        }
    }

    #[test]
    fn test_bounded_progress() {
        assert_eq!(bounded_progress(0.2, 1, 3), 0.0);
        assert!((bounded_progress(0.5, 1, 3) - (0.5 - 1.0 / 3.0)).abs() < EPSILON);
        assert_eq!(bounded_progress(0.7, 0, 3), 0.7);
    }

    #[test]
    fn test_phase_progress_saturates() {
        let n = 3;
        for i in 0..n {
            let start = i as f32 / n as f32;
            let end = (i + 1) as f32 / n as f32;
            assert!(phase_progress(start, i, n).abs() < EPSILON);
            assert!((phase_progress(end, i, n) - 1.0).abs() < EPSILON);
            assert!((phase_progress(1.0, i, n) - 1.0).abs() < EPSILON);
        }
        // halfway through the middle phase
        assert!((phase_progress(0.5, 1, 3) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_phase_progress_is_monotonic() {
        for n in 1..=5 {
            for i in 0..n {
                let mut previous = phase_progress(0.0, i, n);
                for step in 1..=200 {
                    let scale = step as f32 / 200.0;
                    let current = phase_progress(scale, i, n);
                    assert!(
                        current + EPSILON >= previous,
                        "phase {} of {} decreased at scale {}",
                        i,
                        n,
                        scale
                    );
                    assert!(current <= 1.0 + EPSILON);
                    previous = current;
                }
            }
        }
    }
}
