//! Scriptable in-memory surface for tests.
//!
//! Records every pointer move and button event and can simulate the failure
//! modes a real driver exhibits: missing elements, unavailable geometry,
//! transient move failures, and disconnection mid-trace.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{Selector, Surface, SurfaceError};
use crate::geometry::{BoundingBox, Point};

/// A press or release recorded by the mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// Primary button pressed.
    Down,
    /// Primary button released.
    Up,
}

/// Element handle produced by [`MockSurface`].
#[derive(Debug, Clone)]
pub struct MockElement {
    /// The selector this handle was resolved from.
    pub selector: String,
}

/// Mock surface implementation for testing.
pub struct MockSurface {
    viewport: Mutex<BoundingBox>,
    // None = element exists but the driver cannot report geometry
    elements: Mutex<HashMap<String, Option<BoundingBox>>>,
    moves: Mutex<Vec<Point>>,
    buttons: Mutex<Vec<ButtonEvent>>,
    connected: AtomicBool,
    fail_moves: AtomicUsize,
    disconnect_after: AtomicUsize,
}

impl Default for MockSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSurface {
    /// Creates a connected mock with a 1920x1080 viewport.
    pub fn new() -> Self {
        Self {
            viewport: Mutex::new(BoundingBox::new(0.0, 0.0, 1920.0, 1080.0)),
            elements: Mutex::new(HashMap::new()),
            moves: Mutex::new(Vec::new()),
            buttons: Mutex::new(Vec::new()),
            connected: AtomicBool::new(true),
            fail_moves: AtomicUsize::new(0),
            disconnect_after: AtomicUsize::new(usize::MAX),
        }
    }

    /// Registers an element with known bounds.
    pub fn add_element(&self, selector: &str, bounds: BoundingBox) {
        self.elements
            .lock()
            .insert(selector.to_string(), Some(bounds));
    }

    /// Registers an element whose geometry the driver cannot report.
    pub fn add_element_without_bounds(&self, selector: &str) {
        self.elements.lock().insert(selector.to_string(), None);
    }

    /// Replaces the viewport bounds.
    pub fn set_viewport(&self, bounds: BoundingBox) {
        *self.viewport.lock() = bounds;
    }

    /// Makes the next `n` pointer moves fail transiently.
    pub fn fail_next_moves(&self, n: usize) {
        self.fail_moves.store(n, Ordering::SeqCst);
    }

    /// Disconnects the surface once `n` moves have been accepted.
    pub fn disconnect_after_moves(&self, n: usize) {
        self.disconnect_after.store(n, Ordering::SeqCst);
    }

    /// Disconnects the surface immediately.
    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }

    /// All pointer positions accepted so far.
    pub fn moves(&self) -> Vec<Point> {
        self.moves.lock().clone()
    }

    /// All button events recorded so far.
    pub fn button_events(&self) -> Vec<ButtonEvent> {
        self.buttons.lock().clone()
    }
}

#[async_trait]
impl Surface for MockSurface {
    type Element = MockElement;

    async fn move_cursor_to(&self, x: f64, y: f64) -> Result<(), SurfaceError> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(SurfaceError::Disconnected);
        }
        if self
            .fail_moves
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(SurfaceError::Driver("simulated transient failure".into()));
        }

        let mut moves = self.moves.lock();
        if moves.len() >= self.disconnect_after.load(Ordering::SeqCst) {
            drop(moves);
            self.connected.store(false, Ordering::SeqCst);
            return Err(SurfaceError::Disconnected);
        }
        moves.push(Point::new(x, y));
        Ok(())
    }

    async fn press_button(&self) -> Result<(), SurfaceError> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(SurfaceError::Disconnected);
        }
        self.buttons.lock().push(ButtonEvent::Down);
        Ok(())
    }

    async fn release_button(&self) -> Result<(), SurfaceError> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(SurfaceError::Disconnected);
        }
        self.buttons.lock().push(ButtonEvent::Up);
        Ok(())
    }

    async fn resolve_selector(
        &self,
        selector: &Selector,
        _timeout: Option<Duration>,
    ) -> Result<Option<Self::Element>, SurfaceError> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(SurfaceError::Disconnected);
        }
        // The mock resolves instantly; the timeout only matters to real
        // drivers that poll the DOM.
        let found = self.elements.lock().contains_key(selector.as_str());
        Ok(found.then(|| MockElement {
            selector: selector.as_str().to_string(),
        }))
    }

    async fn element_bounds(
        &self,
        element: &Self::Element,
    ) -> Result<Option<BoundingBox>, SurfaceError> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(SurfaceError::Disconnected);
        }
        Ok(self
            .elements
            .lock()
            .get(&element.selector)
            .cloned()
            .flatten())
    }

    async fn scroll_into_view(&self, _element: &Self::Element) -> Result<(), SurfaceError> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(SurfaceError::Disconnected);
        }
        Ok(())
    }

    async fn viewport_bounds(&self) -> Result<BoundingBox, SurfaceError> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(SurfaceError::Disconnected);
        }
        Ok(*self.viewport.lock())
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}
