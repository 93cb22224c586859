//! Randomized cubic Bézier curves for pointer trajectories.
//!
//! A [`Curve`] runs from a start to an end point through two interior control
//! points offset from the straight line by perpendicular and longitudinal
//! jitter. The jitter magnitude scales with the distance between the
//! endpoints unless an explicit spread is supplied, which is how the
//! overshoot policy requests tight corrective curves.

use std::f64::consts::FRAC_PI_2;

use rand::Rng;

use crate::geometry::Point;

/// Chord samples used to approximate arc length.
const ARC_SAMPLES: usize = 50;

/// Below this distance the control points collapse onto the chord; a visible
/// arc over a couple of pixels just looks like jitter.
const MIN_CURVED_DISTANCE: f64 = 2.0;

/// A cubic Bézier curve through randomly perturbed control points.
#[derive(Debug, Clone)]
pub struct Curve {
    /// Start point
    pub p0: Point,
    /// First interior control point
    pub p1: Point,
    /// Second interior control point
    pub p2: Point,
    /// End point
    pub p3: Point,
}

impl Curve {
    /// Builds a curve from `start` to `end` with randomized interior control
    /// points.
    ///
    /// The control points sit at randomized fractions along the chord
    /// (roughly 20–35% and 65–80%) and are pushed sideways by an arc offset.
    /// The offset magnitude defaults to 10–30% of the chord length;
    /// `spread_override` fixes it instead, producing a proportionally tighter
    /// or wider bow.
    ///
    /// ```rust
    /// use human_cursor::geometry::Point;
    /// use human_cursor::path::Curve;
    /// use rand::thread_rng;
    ///
    /// let curve = Curve::build(
    ///     &mut thread_rng(),
    ///     Point::new(0.0, 0.0),
    ///     Point::new(400.0, 250.0),
    ///     None,
    /// );
    /// assert_eq!(curve.p0, Point::new(0.0, 0.0));
    /// assert_eq!(curve.p3, Point::new(400.0, 250.0));
    /// ```
    pub fn build<R: Rng>(rng: &mut R, start: Point, end: Point, spread_override: Option<f64>) -> Self {
        let distance = start.distance_to(&end);

        if distance < MIN_CURVED_DISTANCE {
            return Self {
                p0: start,
                p1: start.lerp(&end, 1.0 / 3.0),
                p2: start.lerp(&end, 2.0 / 3.0),
                p3: end,
            };
        }

        let angle = start.angle_to(&end);
        let spread =
            spread_override.unwrap_or_else(|| distance * (0.1 + rng.gen::<f64>() * 0.2));

        // Arc above or below the chord, chosen per curve.
        let side = if rng.gen::<bool>() { 1.0 } else { -1.0 };
        let perp = angle + FRAC_PI_2 * side;

        let cp1_along = 0.2 + rng.gen::<f64>() * 0.15;
        let cp2_along = 0.65 + rng.gen::<f64>() * 0.15;
        let cp1_arc = spread * (0.5 + rng.gen::<f64>() * 0.5);
        let cp2_arc = spread * (0.3 + rng.gen::<f64>() * 0.4);

        let p1 = Point::new(
            start.x + distance * cp1_along * angle.cos() + cp1_arc * perp.cos(),
            start.y + distance * cp1_along * angle.sin() + cp1_arc * perp.sin(),
        );
        let p2 = Point::new(
            start.x + distance * cp2_along * angle.cos() + cp2_arc * perp.cos(),
            start.y + distance * cp2_along * angle.sin() + cp2_arc * perp.sin(),
        );

        Self {
            p0: start,
            p1,
            p2,
            p3: end,
        }
    }

    /// Evaluates the curve at parameter `t`, clamped to `[0, 1]`.
    pub fn at(&self, t: f64) -> Point {
        let t = t.clamp(0.0, 1.0);
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        // B(t) = (1-t)³P₀ + 3(1-t)²tP₁ + 3(1-t)t²P₂ + t³P₃
        Point {
            x: mt3 * self.p0.x
                + 3.0 * mt2 * t * self.p1.x
                + 3.0 * mt * t2 * self.p2.x
                + t3 * self.p3.x,
            y: mt3 * self.p0.y
                + 3.0 * mt2 * t * self.p1.y
                + 3.0 * mt * t2 * self.p2.y
                + t3 * self.p3.y,
        }
    }

    /// Approximate total path length via cumulative chord sampling.
    pub fn arc_length(&self) -> f64 {
        let mut length = 0.0;
        let mut prev = self.p0;

        for i in 1..=ARC_SAMPLES {
            let t = i as f64 / ARC_SAMPLES as f64;
            let point = self.at(t);
            length += prev.distance_to(&point);
            prev = point;
        }

        length
    }

    /// Samples the curve into an ordered lookup table of `steps` points.
    ///
    /// `steps` is floored at 2. The first entry is exactly the start point
    /// and the last exactly the end point; interior entries are evaluated at
    /// monotonically increasing parameter values.
    pub fn sample(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(2);
        let mut points = Vec::with_capacity(steps);

        points.push(self.p0);
        for i in 1..steps - 1 {
            let t = i as f64 / (steps - 1) as f64;
            points.push(self.at(t));
        }
        points.push(self.p3);

        points
    }
}
