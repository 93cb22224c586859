//! Randomized delay helpers for the cursor controller.
//!
//! Two flavors: uniform draws for the settle and wander pauses, and a
//! Box-Muller normal sample for click hold durations, which better matches
//! the spread of real button-down times than a flat distribution.

use std::time::Duration;

use rand::Rng;

/// A uniformly random delay in `[0, max_ms)`. Zero `max_ms` yields zero.
pub fn uniform_delay(max_ms: u64) -> Duration {
    if max_ms == 0 {
        return Duration::ZERO;
    }
    Duration::from_millis(rand::thread_rng().gen_range(0..max_ms))
}

/// A uniformly random delay in `[min_ms, max_ms]`.
pub fn delay_in_range(min_ms: u64, max_ms: u64) -> Duration {
    if min_ms >= max_ms {
        return Duration::from_millis(min_ms);
    }
    Duration::from_millis(rand::thread_rng().gen_range(min_ms..=max_ms))
}

/// A normally distributed delay centered between `min_ms` and `max_ms`,
/// clamped to that range.
pub fn jittered_delay(min_ms: u64, max_ms: u64) -> Duration {
    if min_ms >= max_ms {
        return Duration::from_millis(min_ms);
    }

    let mean = (min_ms + max_ms) as f64 / 2.0;
    let std_dev = (max_ms - min_ms) as f64 / 4.0;
    let ms = normal_random(mean, std_dev)
        .round()
        .clamp(min_ms as f64, max_ms as f64) as u64;

    Duration::from_millis(ms)
}

/// Box-Muller transform over two uniform draws.
fn normal_random(mean: f64, std_dev: f64) -> f64 {
    let mut rng = rand::thread_rng();
    let u1: f64 = rng.gen::<f64>().max(1e-10);
    let u2: f64 = rng.gen();

    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + z * std_dev
}
