//! # human-cursor
//!
//! Human-like pointer trajectory synthesis for browser automation.
//!
//! human-cursor replaces straight-line, instantaneous pointer teleportation
//! with curved, timing-varied motion that resembles manual input, to defeat
//! naive bot-detection heuristics. It drives a virtual cursor through move,
//! click, and idle-wander operations against any controllable 2D surface,
//! such as a browser viewport exposed by whatever automation driver
//! implements the [`Surface`] trait.
//!
//! ## Features
//!
//! - **Curved path synthesis**: randomized cubic Bézier trajectories with
//!   Fitts's-law step counts, so long moves toward small targets are slower
//!   and more granular
//! - **Overshoot and correct**: long motions deliberately aim past the
//!   target, then settle onto it with a tight corrective curve
//! - **Idle wander**: a background task drifts the pointer to random
//!   viewport points between explicit operations, with cooperative
//!   preemption the moment real work arrives
//! - **Driver agnostic**: the core owns no browser; plug in any driver via
//!   an async trait, or use the bundled [`MockSurface`] in tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use human_cursor::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), CursorError> {
//!     let surface = Arc::new(MockSurface::new());
//!     let cursor = Cursor::with_random_moves(
//!         surface,
//!         Point::origin(),
//!         CursorConfig::default(),
//!     );
//!
//!     cursor.move_to(Point::new(640.0, 360.0)).await;
//!     cursor.click(Some("#submit"), &ClickOptions::default()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`geometry`]: 2D point and bounding-box value types
//! - [`path`]: curve engine, Fitts's-law path planner, overshoot policy
//! - [`cursor`]: the stateful controller and its idle-wander loop
//! - [`surface`]: the abstract driver contract plus a scriptable mock
//! - [`config`]: every motion and timing tunable with serde support
//!
//! ## Control Flow
//!
//! ```text
//! Cursor controller ──► Path planner ──► Overshoot policy
//!        │                    │
//!        │                    └──► Curve engine ──► geometry
//!        └──► Surface driver (moves, clicks, selector resolution)
//! ```

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Full version string with name
pub const FULL_VERSION: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Module Exports
// ============================================================================

/// Cursor motion and timing configuration.
pub mod config;

/// The stateful cursor controller and idle-wander loop.
pub mod cursor;

/// 2D geometry primitives.
pub mod geometry;

/// Curved path synthesis: curve engine, planner, overshoot policy.
pub mod path;

/// The abstract surface (driver) contract and a scriptable mock.
pub mod surface;

// ============================================================================
// Re-exports for Convenience
// ============================================================================

pub use config::{ConfigError, CursorConfig};
pub use cursor::{ClickOptions, Cursor, CursorError, MoveOptions};
pub use geometry::{BoundingBox, Point};
pub use path::{fitts, plan, should_overshoot, Curve, Target};
pub use surface::{ButtonEvent, MockElement, MockSurface, Selector, Surface, SurfaceError};

// ============================================================================
// Prelude Module
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust
/// use human_cursor::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::CursorConfig;
    pub use crate::cursor::{ClickOptions, Cursor, CursorError, MoveOptions};
    pub use crate::geometry::{BoundingBox, Point};
    pub use crate::path::Target;
    pub use crate::surface::{MockSurface, Selector, Surface, SurfaceError};
    pub use crate::{FULL_VERSION, NAME, VERSION};
}
