//! Path planning: turning a start point and a target into a finite sequence
//! of intermediate pointer positions.
//!
//! The number of steps comes from a Fitts's-law index-of-difficulty model:
//! longer distances and smaller targets produce more steps, which downstream
//! translates into slower, more granular motion. A per-call random base keeps
//! identical moves from ever producing identical step counts.

use rand::Rng;

use super::curve::Curve;
use crate::geometry::{BoundingBox, Point};

/// Effective target width assumed for point targets.
pub const DEFAULT_TARGET_WIDTH: f64 = 100.0;

/// Humans rarely trace the full geometric curve length; the planned length is
/// damped by this factor before it feeds the timing model.
pub const ARC_LENGTH_DAMPING: f64 = 0.8;

/// Upper bound of the per-call random base added to the step count formula.
pub const STEP_JITTER: f64 = 25.0;

/// What a move is aimed at: a bare point, or a sized box where the width
/// matters for timing and point selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    /// A literal point on the surface.
    Point(Point),
    /// An element's bounding box.
    Box(BoundingBox),
}

impl Target {
    /// The representative point the path is planned toward.
    pub fn point(&self) -> Point {
        match self {
            Target::Point(p) => *p,
            Target::Box(b) => b.origin(),
        }
    }

    /// Effective width for the timing model.
    ///
    /// Box targets use their own width; point targets fall back to
    /// [`DEFAULT_TARGET_WIDTH`]. Floored at 1.0 so a degenerate box cannot
    /// blow up the index of difficulty.
    pub fn width(&self) -> f64 {
        match self {
            Target::Point(_) => DEFAULT_TARGET_WIDTH,
            Target::Box(b) => b.width.max(1.0),
        }
    }
}

impl From<Point> for Target {
    fn from(p: Point) -> Self {
        Target::Point(p)
    }
}

impl From<BoundingBox> for Target {
    fn from(b: BoundingBox) -> Self {
        Target::Box(b)
    }
}

/// Fitts's-law index of difficulty: `2 * log2(distance / width + 1)`.
///
/// Monotonically increasing in `distance` and decreasing in `width` for
/// positive widths.
///
/// ```rust
/// use human_cursor::path::fitts;
///
/// assert!(fitts(800.0, 50.0) > fitts(400.0, 50.0));
/// assert!(fitts(400.0, 20.0) > fitts(400.0, 50.0));
/// ```
pub fn fitts(distance: f64, width: f64) -> f64 {
    2.0 * (distance / width + 1.0).log2()
}

/// Plans a path from `start` to `target`.
///
/// Builds a randomized [`Curve`] toward the target's representative point,
/// derives a step count from the damped arc length and the target width, and
/// samples the curve into that many points. Every coordinate of the result is
/// clamped to be non-negative. The returned sequence always has at least two
/// entries, starting exactly at `start`.
///
/// Deterministic for a seeded [`Rng`]; stochastic by design otherwise.
///
/// ```rust
/// use human_cursor::geometry::Point;
/// use human_cursor::path::{plan, Target};
/// use rand::thread_rng;
///
/// let start = Point::new(10.0, 10.0);
/// let end = Point::new(400.0, 300.0);
/// let path = plan(&mut thread_rng(), start, &Target::Point(end), None);
///
/// assert!(path.len() >= 2);
/// assert_eq!(path[0], start);
/// assert_eq!(*path.last().unwrap(), end);
/// ```
pub fn plan<R: Rng>(
    rng: &mut R,
    start: Point,
    target: &Target,
    spread_override: Option<f64>,
) -> Vec<Point> {
    let curve = Curve::build(rng, start, target.point(), spread_override);
    let length = curve.arc_length() * ARC_LENGTH_DAMPING;

    let base = rng.gen::<f64>() * STEP_JITTER;
    let steps = (((fitts(length, target.width()) + 1.0).log2() + base) * 3.0).ceil() as usize;

    let mut points = curve.sample(steps.max(2));
    for p in &mut points {
        *p = p.clamp_non_negative();
    }
    points
}
