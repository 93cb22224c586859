//! Overshoot policy: long motions deliberately aim past the target and then
//! correct back onto it, the way real users rarely land a long flick on the
//! first pass. Short motions go straight in.

use std::f64::consts::FRAC_PI_2;

use rand::Rng;

use crate::geometry::Point;

/// Whether a motion from `from` to `to` should overshoot first.
///
/// Strict greater-than: a move of exactly `threshold` units does not
/// overshoot.
///
/// ```rust
/// use human_cursor::geometry::Point;
/// use human_cursor::path::should_overshoot;
///
/// let a = Point::new(0.0, 0.0);
/// assert!(should_overshoot(a, Point::new(600.0, 0.0), 500.0));
/// assert!(!should_overshoot(a, Point::new(500.0, 0.0), 500.0));
/// ```
pub fn should_overshoot(from: Point, to: Point, threshold: f64) -> bool {
    from.distance_to(&to) > threshold
}

/// Computes an aim point past `to`, extending along the `from → to`
/// direction by a random distance in `[0, radius)` with up to ±45° of
/// angular jitter.
///
/// The jitter keeps a positive forward component, so the aim point always
/// lies beyond `to` along the movement axis. A degenerate zero-length motion
/// returns `to` unchanged.
pub fn aim_past<R: Rng>(rng: &mut R, from: Point, to: Point, radius: f64) -> Point {
    let dir = to - from;
    if dir.magnitude() == 0.0 {
        return to;
    }

    let jitter = (rng.gen::<f64>() - 0.5) * FRAC_PI_2;
    let angle = from.angle_to(&to) + jitter;
    let r = rng.gen::<f64>() * radius;

    to.offset(r * angle.cos(), r * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_threshold_is_strict() {
        let a = Point::new(0.0, 0.0);
        assert!(!should_overshoot(a, Point::new(500.0, 0.0), 500.0));
        assert!(should_overshoot(a, Point::new(500.0001, 0.0), 500.0));
    }

    #[test]
    fn test_aim_is_beyond_target_along_axis() {
        let from = Point::new(0.0, 0.0);
        let to = Point::new(600.0, 0.0);

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let aim = aim_past(&mut rng, from, to, 120.0);
            assert!(aim.x >= to.x, "aim {:?} fell short of the target", aim);
            assert!(aim.x <= to.x + 120.0);
            assert!(aim.y.abs() <= 120.0);
        }
    }

    #[test]
    fn test_aim_degenerate_motion() {
        let mut rng = StdRng::seed_from_u64(5);
        let p = Point::new(100.0, 100.0);
        assert_eq!(aim_past(&mut rng, p, p, 120.0), p);
    }
}
