//! The abstract surface the cursor moves within.
//!
//! The core owns no driver: everything that touches a real browser (moving
//! the pointer, pressing buttons, resolving selectors, reading element
//! geometry) goes through the [`Surface`] trait, implemented by whatever
//! automation driver is plugged in. A scriptable [`MockSurface`] lives next
//! to the trait for tests and examples.

mod mock;

pub use mock::{ButtonEvent, MockElement, MockSurface};

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::geometry::BoundingBox;

/// Errors reported by a surface driver.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// The surface is no longer reachable; nothing will be retried.
    #[error("surface disconnected")]
    Disconnected,
    /// A transient driver failure (stale handle, dropped event, ...).
    #[error("driver error: {0}")]
    Driver(String),
}

/// An element selector, dispatched to the driver's CSS or XPath engine.
///
/// Dispatch is a simple syntactic check: selectors that open with a path
/// separator are treated as XPath, everything else as CSS.
///
/// ```rust
/// use human_cursor::surface::Selector;
///
/// assert!(matches!(Selector::parse("//button[1]"), Selector::XPath(_)));
/// assert!(matches!(Selector::parse("#submit"), Selector::Css(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A CSS selector.
    Css(String),
    /// An XPath expression.
    XPath(String),
}

impl Selector {
    /// Classifies a raw selector string.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with('/') {
            Selector::XPath(raw.to_string())
        } else {
            Selector::Css(raw.to_string())
        }
    }

    /// The raw selector text.
    pub fn as_str(&self) -> &str {
        match self {
            Selector::Css(s) | Selector::XPath(s) => s,
        }
    }
}

impl From<&str> for Selector {
    fn from(raw: &str) -> Self {
        Selector::parse(raw)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The controllable 2D surface contract.
///
/// One cursor controller drives one surface. All calls are in-process calls
/// into the driver; the core enforces no timeout on pointer movement itself,
/// only the caller-supplied timeout passed to [`Surface::resolve_selector`].
#[async_trait]
pub trait Surface: Send + Sync {
    /// Driver-specific element handle.
    type Element: Send + Sync;

    /// Moves the pointer to the given surface coordinates.
    async fn move_cursor_to(&self, x: f64, y: f64) -> Result<(), SurfaceError>;

    /// Presses the primary pointer button.
    async fn press_button(&self) -> Result<(), SurfaceError>;

    /// Releases the primary pointer button.
    async fn release_button(&self) -> Result<(), SurfaceError>;

    /// Resolves a selector to an element, waiting up to `timeout` for it to
    /// appear. `Ok(None)` means the selector matched nothing within the
    /// wait.
    async fn resolve_selector(
        &self,
        selector: &Selector,
        timeout: Option<Duration>,
    ) -> Result<Option<Self::Element>, SurfaceError>;

    /// Reports an element's on-screen bounds, or `Ok(None)` if the driver
    /// cannot produce them.
    async fn element_bounds(
        &self,
        element: &Self::Element,
    ) -> Result<Option<BoundingBox>, SurfaceError>;

    /// Best-effort scroll to bring an element into the viewport.
    async fn scroll_into_view(&self, element: &Self::Element) -> Result<(), SurfaceError>;

    /// Current viewport bounds, queried fresh because surfaces may resize.
    async fn viewport_bounds(&self) -> Result<BoundingBox, SurfaceError>;

    /// Whether the surface is still reachable.
    fn is_connected(&self) -> bool;
}
