//! Easing functions for phase interpolation and camera moves

/// Easing function types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    /// Linear interpolation (phase scales)
    #[default]
    Linear,
    /// Quadratic in-out (camera zoom)
    EaseInOut,
}

/// Apply easing function to a value t in range [0, 1]
pub fn ease(t: f32, easing: Easing) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 2] = [Easing::Linear, Easing::EaseInOut];

    #[test]
    fn test_ease_endpoints() {
        for easing in ALL {
            assert!(ease(0.0, easing).abs() < 1e-6, "{:?} should start at 0", easing);
            assert!((ease(1.0, easing) - 1.0).abs() < 1e-6, "{:?} should end at 1", easing);
        }
    }

    #[test]
    fn test_ease_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=100 {
                let v = ease(i as f32 / 100.0, easing);
                assert!(v >= prev - 1e-6, "{:?} should be monotonic", easing);
                prev = v;
            }
        }
    }

    #[test]
    fn test_in_out_symmetric() {
        let v1 = ease(0.25, Easing::EaseInOut);
        let v2 = ease(0.75, Easing::EaseInOut);
        assert!((v1 + v2 - 1.0).abs() < 1e-4);
        assert!(v1 < 0.25);
    }

    #[test]
    fn test_ease_clamps_input() {
        assert_eq!(ease(-0.5, Easing::Linear), 0.0);
        assert_eq!(ease(1.5, Easing::EaseInOut), 1.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.15, 1.0, 0.0), 0.15);
        assert!((lerp(0.15, 1.0, 1.0) - 1.0).abs() < 1e-6);
        assert!((lerp(2.0, 4.0, 0.5) - 3.0).abs() < 1e-6);
    }
}
