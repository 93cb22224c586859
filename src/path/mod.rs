//! Path synthesis: curved, timing-varied pointer trajectories.
//!
//! # Submodules
//!
//! - [`curve`] - randomized cubic Bézier curves with arc-length sampling
//! - [`planner`] - Fitts's-law step counts and full path planning
//! - [`overshoot`] - aim-past-then-correct policy for long motions
//!
//! # Example
//!
//! ```rust
//! use human_cursor::geometry::Point;
//! use human_cursor::path::{plan, should_overshoot, Target};
//! use rand::thread_rng;
//!
//! let start = Point::new(0.0, 0.0);
//! let end = Point::new(600.0, 0.0);
//!
//! assert!(should_overshoot(start, end, 500.0));
//! let path = plan(&mut thread_rng(), start, &Target::Point(end), None);
//! assert_eq!(path[0], start);
//! ```

pub mod curve;
pub mod overshoot;
pub mod planner;

pub use curve::Curve;
pub use overshoot::{aim_past, should_overshoot};
pub use planner::{fitts, plan, Target, ARC_LENGTH_DAMPING, DEFAULT_TARGET_WIDTH, STEP_JITTER};
