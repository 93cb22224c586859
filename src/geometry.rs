//! 2D geometry primitives shared by the path and cursor modules.
//!
//! All coordinates are in surface pixel space with the origin in the top-left
//! corner. Surfaces cannot address negative pixels, so path producers clamp
//! their output through [`Point::clamp_non_negative`].
//!
//! # Example
//!
//! ```rust
//! use human_cursor::geometry::{BoundingBox, Point};
//!
//! let a = Point::new(0.0, 0.0);
//! let b = Point::new(3.0, 4.0);
//! assert_eq!(a.distance_to(&b), 5.0);
//!
//! let bounds = BoundingBox::new(100.0, 100.0, 20.0, 20.0);
//! assert!(bounds.contains(bounds.center()));
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A 2D point with f64 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean distance to another point.
    ///
    /// ```rust
    /// use human_cursor::geometry::Point;
    ///
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(3.0, 4.0);
    /// assert_eq!(a.distance_to(&b), 5.0);
    /// ```
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle to another point in radians.
    pub fn angle_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dy.atan2(dx)
    }

    /// Linear interpolation between this point and another.
    ///
    /// `t = 0.0` yields this point, `t = 1.0` yields `other`.
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Adds a vector offset to this point.
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Magnitude (length) when treated as a vector from the origin.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction, or the point itself if zero-length.
    pub fn normalized(&self) -> Point {
        let mag = self.magnitude();
        if mag > 0.0 {
            Point {
                x: self.x / mag,
                y: self.y / mag,
            }
        } else {
            *self
        }
    }

    /// Clamps both coordinates to be non-negative.
    ///
    /// ```rust
    /// use human_cursor::geometry::Point;
    ///
    /// let p = Point::new(-5.0, 12.0).clamp_non_negative();
    /// assert_eq!(p, Point::new(0.0, 12.0));
    /// ```
    pub fn clamp_non_negative(&self) -> Point {
        Point {
            x: self.x.max(0.0),
            y: self.y.max(0.0),
        }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Point;

    fn mul(self, scalar: f64) -> Point {
        Point {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

/// An axis-aligned rectangle in surface pixel space.
///
/// Represents an interactive element's on-screen bounds or a viewport.
/// Width and height are clamped to be non-negative at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width, always >= 0
    pub width: f64,
    /// Height, always >= 0
    pub height: f64,
}

impl BoundingBox {
    /// Creates a new bounding box, clamping negative dimensions to zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// The top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The center point.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether a point lies within the box (edges inclusive).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Picks a uniformly random point inside the box.
    ///
    /// When `padding_percent` is in the open interval (0, 100), the sampling
    /// rectangle is shrunk symmetrically by that percentage on each axis
    /// before the draw. Values outside the interval leave the full rectangle
    /// unrestricted. A degenerate box (zero width or height on an axis)
    /// yields that axis of the origin corner.
    ///
    /// ```rust
    /// use human_cursor::geometry::BoundingBox;
    /// use rand::thread_rng;
    ///
    /// let bounds = BoundingBox::new(100.0, 100.0, 20.0, 20.0);
    /// let p = bounds.random_point(&mut thread_rng(), None);
    /// assert!(bounds.contains(p));
    /// ```
    pub fn random_point<R: Rng>(&self, rng: &mut R, padding_percent: Option<f64>) -> Point {
        let (x, y, width, height) = match padding_percent {
            Some(p) if p > 0.0 && p < 100.0 => {
                let inset_w = self.width * p / 100.0;
                let inset_h = self.height * p / 100.0;
                (
                    self.x + inset_w / 2.0,
                    self.y + inset_h / 2.0,
                    self.width - inset_w,
                    self.height - inset_h,
                )
            }
            _ => (self.x, self.y, self.width, self.height),
        };

        let px = if width > 0.0 {
            rng.gen_range(x..x + width)
        } else {
            x
        };
        let py = if height > 0.0 {
            rng.gen_range(y..y + height)
        } else {
            y
        };
        Point::new(px, py)
    }
}
