//! The stateful cursor controller.
//!
//! A [`Cursor`] owns the pointer position on one [`Surface`] and sequences
//! three kinds of work: explicit moves, clicks, and a background idle-wander
//! loop that drifts the pointer to random viewport points while nothing else
//! is happening. Explicit operations preempt the wander loop cooperatively:
//! they clear the wander-permitted flag before their first suspension point,
//! and a wander trace checks the flag at every point boundary, so it stops
//! within one point-step of the explicit call.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use human_cursor::config::CursorConfig;
//! use human_cursor::cursor::{ClickOptions, Cursor, MoveOptions};
//! use human_cursor::geometry::Point;
//! use human_cursor::surface::MockSurface;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), human_cursor::cursor::CursorError> {
//!     let surface = Arc::new(MockSurface::new());
//!     let cursor = Cursor::new(surface, Point::origin(), CursorConfig::default());
//!
//!     cursor.move_to(Point::new(640.0, 360.0)).await;
//!     cursor.click(Some("#submit"), &ClickOptions::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod timing;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::CursorConfig;
use crate::geometry::{BoundingBox, Point};
use crate::path::{aim_past, plan, should_overshoot, Target};
use crate::surface::{Selector, Surface, SurfaceError};

/// Hard failures surfaced to callers of [`Cursor::move_to_element`] and
/// [`Cursor::click`]. Per-point motion failures are never surfaced; they are
/// logged and skipped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CursorError {
    /// Selector resolution yielded nothing within the configured wait.
    #[error("target not found: {selector}")]
    TargetNotFound {
        /// The selector that failed to resolve.
        selector: String,
    },
    /// The driver could not report the element's bounds.
    #[error("element geometry unavailable: {selector}")]
    GeometryUnavailable {
        /// The selector whose geometry was requested.
        selector: String,
    },
}

/// Options for element-targeted moves.
#[derive(Debug, Clone, Default)]
pub struct MoveOptions {
    /// How long the driver may wait for the selector to appear.
    pub timeout: Option<Duration>,
    /// Padding percentage in (0, 100) shrinking the destination sampling
    /// rectangle symmetrically on both axes. Values outside the interval
    /// are ignored.
    pub padding_percent: Option<f64>,
}

/// Options for clicks.
#[derive(Debug, Clone, Default)]
pub struct ClickOptions {
    /// Press-to-release hold duration. Defaults to a jittered draw from the
    /// configured click-hold range.
    pub hold: Option<Duration>,
    /// Applied to the preceding move when a target selector is given.
    pub move_options: MoveOptions,
}

/// State shared between the controller and its wander task.
struct Shared {
    position: Mutex<Point>,
    // true = idle wandering permitted; explicit operations clear it for
    // their duration, and an in-flight wander trace aborts at the next
    // point boundary once it observes false.
    wander_enabled: AtomicBool,
    shutdown: AtomicBool,
}

/// Clears the wander flag on construction, restores it when dropped.
///
/// The store happens before the owning operation's first `.await`, which is
/// what guarantees a concurrently scheduled wander iteration observes the
/// suppression before it starts tracing.
struct WanderGuard<'a> {
    shared: &'a Shared,
}

impl<'a> WanderGuard<'a> {
    fn new(shared: &'a Shared) -> Self {
        shared.wander_enabled.store(false, Ordering::SeqCst);
        Self { shared }
    }
}

impl Drop for WanderGuard<'_> {
    fn drop(&mut self) {
        self.shared.wander_enabled.store(true, Ordering::SeqCst);
    }
}

/// How a trace ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TraceOutcome {
    /// Every point was attempted.
    Complete,
    /// A wander trace observed the suppression flag and stopped.
    Aborted,
    /// The surface reported itself disconnected; tracing stopped quietly.
    Disconnected,
}

/// A human-like virtual cursor bound to one surface.
///
/// Exactly one controller should drive a given surface; the internal state
/// is shared only with the controller's own wander task.
pub struct Cursor<S: Surface> {
    surface: Arc<S>,
    shared: Arc<Shared>,
    config: CursorConfig,
    wander_task: Option<JoinHandle<()>>,
}

impl<S: Surface + 'static> Cursor<S> {
    /// Creates a controller at `start` without a wander loop.
    pub fn new(surface: Arc<S>, start: Point, config: CursorConfig) -> Self {
        Self {
            surface,
            shared: Arc::new(Shared {
                position: Mutex::new(start),
                wander_enabled: AtomicBool::new(true),
                shutdown: AtomicBool::new(false),
            }),
            config,
            wander_task: None,
        }
    }

    /// Creates a controller and spawns the idle-wander loop.
    ///
    /// Must be called from within a tokio runtime. The loop runs until the
    /// controller is dropped or the surface disconnects; its failures are
    /// logged, never propagated.
    pub fn with_random_moves(surface: Arc<S>, start: Point, config: CursorConfig) -> Self {
        let mut cursor = Self::new(surface, start, config);
        cursor.wander_task = Some(tokio::spawn(wander_loop(
            Arc::clone(&cursor.surface),
            Arc::clone(&cursor.shared),
            cursor.config.clone(),
        )));
        cursor
    }

    /// The last position the surface acknowledged.
    pub fn position(&self) -> Point {
        *self.shared.position.lock()
    }

    /// Permits or suppresses idle wandering. Idempotent.
    pub fn toggle_random_move(&self, enabled: bool) {
        self.shared.wander_enabled.store(enabled, Ordering::SeqCst);
    }

    /// Whether idle wandering is currently permitted.
    pub fn is_random_move_enabled(&self) -> bool {
        self.shared.wander_enabled.load(Ordering::SeqCst)
    }

    /// Moves the cursor to a literal point along a planned human-like path.
    ///
    /// Long motions overshoot and correct per the overshoot policy. Per-point
    /// driver failures are logged and skipped; a disconnect stops the trace
    /// quietly.
    pub async fn move_to(&self, point: Point) {
        let _guard = WanderGuard::new(&self.shared);
        self.trace_to(point, None).await;
    }

    /// Resolves `selector`, scrolls it into view, picks a random point
    /// inside its bounds (optionally inset by `padding_percent`), and moves
    /// there. Returns the chosen destination.
    ///
    /// # Errors
    ///
    /// [`CursorError::TargetNotFound`] if resolution yields nothing within
    /// the wait, [`CursorError::GeometryUnavailable`] if the driver cannot
    /// report bounds. The wander flag is restored on every exit path.
    pub async fn move_to_element(
        &self,
        selector: &str,
        options: &MoveOptions,
    ) -> Result<Point, CursorError> {
        let _guard = WanderGuard::new(&self.shared);
        self.element_move_inner(selector, options).await
    }

    /// Clicks, optionally moving to `target` first.
    ///
    /// Press and release failures are logged and do not abort the click. A
    /// randomized settle delay (up to the configured maximum) passes before
    /// the busy state clears.
    pub async fn click(
        &self,
        target: Option<&str>,
        options: &ClickOptions,
    ) -> Result<(), CursorError> {
        let _guard = WanderGuard::new(&self.shared);

        if let Some(selector) = target {
            self.element_move_inner(selector, &options.move_options)
                .await?;
        }

        if let Err(err) = self.surface.press_button().await {
            warn!(error = %err, "button press failed");
        }
        let hold = options.hold.unwrap_or_else(|| {
            timing::jittered_delay(self.config.click_hold_min_ms, self.config.click_hold_max_ms)
        });
        if !hold.is_zero() {
            tokio::time::sleep(hold).await;
        }
        if let Err(err) = self.surface.release_button().await {
            warn!(error = %err, "button release failed");
        }

        let settle = timing::uniform_delay(self.config.settle_delay_max_ms);
        if !settle.is_zero() {
            tokio::time::sleep(settle).await;
        }
        Ok(())
    }

    async fn element_move_inner(
        &self,
        selector: &str,
        options: &MoveOptions,
    ) -> Result<Point, CursorError> {
        let sel = Selector::parse(selector);

        let element = match self.surface.resolve_selector(&sel, options.timeout).await {
            Ok(Some(element)) => element,
            Ok(None) => {
                return Err(CursorError::TargetNotFound {
                    selector: selector.to_string(),
                })
            }
            Err(err) => {
                warn!(error = %err, selector = %sel, "selector resolution failed");
                return Err(CursorError::TargetNotFound {
                    selector: selector.to_string(),
                });
            }
        };

        if let Err(err) = self.surface.scroll_into_view(&element).await {
            warn!(error = %err, selector = %sel, "scroll into view failed");
        }

        let bounds = match self.surface.element_bounds(&element).await {
            Ok(Some(bounds)) => bounds,
            Ok(None) => {
                return Err(CursorError::GeometryUnavailable {
                    selector: selector.to_string(),
                })
            }
            Err(err) => {
                warn!(error = %err, selector = %sel, "bounds query failed");
                return Err(CursorError::GeometryUnavailable {
                    selector: selector.to_string(),
                });
            }
        };

        let dest = {
            let mut rng = rand::thread_rng();
            bounds.random_point(&mut rng, options.padding_percent)
        };
        self.trace_to(dest, Some(bounds)).await;
        Ok(dest)
    }

    /// Plans and traces a motion to `dest`, overshooting first when the
    /// distance warrants it. `target_dims` carries the original element
    /// dimensions into the corrective leg's timing model.
    async fn trace_to(&self, dest: Point, target_dims: Option<BoundingBox>) {
        let from = self.position();

        if should_overshoot(from, dest, self.config.overshoot_threshold) {
            let main = {
                let mut rng = rand::thread_rng();
                let aim = aim_past(&mut rng, from, dest, self.config.overshoot_radius);
                plan(&mut rng, from, &Target::Point(aim), None)
            };
            if self.trace(&main, false).await != TraceOutcome::Complete {
                return;
            }

            let corrective = {
                let mut rng = rand::thread_rng();
                let reached = self.position();
                let target = match target_dims {
                    Some(dims) => Target::Box(BoundingBox::new(
                        dest.x,
                        dest.y,
                        dims.width,
                        dims.height,
                    )),
                    None => Target::Point(dest),
                };
                plan(
                    &mut rng,
                    reached,
                    &target,
                    Some(self.config.corrective_spread),
                )
            };
            if self.trace(&corrective, false).await == TraceOutcome::Complete {
                *self.shared.position.lock() = dest;
            }
        } else {
            let path = {
                let mut rng = rand::thread_rng();
                plan(&mut rng, from, &Target::Point(dest), None)
            };
            if self.trace(&path, false).await == TraceOutcome::Complete {
                *self.shared.position.lock() = dest;
            }
        }
    }

    async fn trace(&self, path: &[Point], abort_on_move: bool) -> TraceOutcome {
        trace_path(&*self.surface, &self.shared, &self.config, path, abort_on_move).await
    }
}

impl<S: Surface> Drop for Cursor<S> {
    fn drop(&mut self) {
        self.shared.shutdown.store(true, Ordering::SeqCst);
        if let Some(task) = &self.wander_task {
            task.abort();
        }
    }
}

/// Drives the pointer through each point of a planned path.
///
/// Transient move failures skip the point and continue; a disconnect stops
/// immediately. The shared position is written once, to the last point the
/// surface acknowledged, so an aborted trace leaves the position at the last
/// point actually reached.
async fn trace_path<S: Surface>(
    surface: &S,
    shared: &Shared,
    config: &CursorConfig,
    path: &[Point],
    abort_on_move: bool,
) -> TraceOutcome {
    let mut last_reached = None;
    let mut outcome = TraceOutcome::Complete;

    for point in path {
        if abort_on_move && !shared.wander_enabled.load(Ordering::SeqCst) {
            outcome = TraceOutcome::Aborted;
            break;
        }

        match surface.move_cursor_to(point.x, point.y).await {
            Ok(()) => last_reached = Some(*point),
            Err(SurfaceError::Disconnected) => {
                debug!("surface disconnected mid-trace");
                outcome = TraceOutcome::Disconnected;
                break;
            }
            Err(err) => {
                warn!(error = %err, "pointer move failed, skipping point");
            }
        }

        let delay = timing::delay_in_range(config.step_delay_min_ms, config.step_delay_max_ms);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    if let Some(point) = last_reached {
        *shared.position.lock() = point;
    }
    outcome
}

/// The idle-wander loop: while permitted, drift to random viewport points.
///
/// A fire-and-forget background task. It never surfaces errors: transient
/// failures are logged and the loop continues; a disconnect or shutdown
/// signal ends it quietly.
async fn wander_loop<S: Surface>(surface: Arc<S>, shared: Arc<Shared>, config: CursorConfig) {
    debug!("idle wander loop started");

    loop {
        if shared.shutdown.load(Ordering::SeqCst) {
            break;
        }
        if !surface.is_connected() {
            debug!("surface disconnected, stopping wander loop");
            break;
        }

        if shared.wander_enabled.load(Ordering::SeqCst) {
            // Bounds are queried fresh every cycle; surfaces may resize.
            match surface.viewport_bounds().await {
                Ok(bounds) => {
                    let path = {
                        let mut rng = rand::thread_rng();
                        let dest = bounds.random_point(&mut rng, None);
                        let from = *shared.position.lock();
                        plan(&mut rng, from, &Target::Point(dest), None)
                    };
                    let outcome = trace_path(&*surface, &shared, &config, &path, true).await;
                    if outcome == TraceOutcome::Disconnected {
                        debug!("surface disconnected, stopping wander loop");
                        break;
                    }
                }
                Err(SurfaceError::Disconnected) => {
                    debug!("surface disconnected, stopping wander loop");
                    break;
                }
                Err(err) => {
                    warn!(error = %err, "viewport query failed");
                }
            }
        }

        tokio::time::sleep(timing::uniform_delay(config.wander_pause_max_ms)).await;
        tokio::task::yield_now().await;
    }

    debug!("idle wander loop stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MockSurface;

    fn instant_cursor(surface: Arc<MockSurface>) -> Cursor<MockSurface> {
        Cursor::new(surface, Point::origin(), CursorConfig::instant())
    }

    #[tokio::test]
    async fn test_toggle_random_move_idempotent() {
        let cursor = instant_cursor(Arc::new(MockSurface::new()));

        cursor.toggle_random_move(true);
        cursor.toggle_random_move(true);
        assert!(cursor.is_random_move_enabled());

        cursor.toggle_random_move(false);
        cursor.toggle_random_move(false);
        assert!(!cursor.is_random_move_enabled());
    }

    #[tokio::test]
    async fn test_move_to_updates_position() {
        let surface = Arc::new(MockSurface::new());
        let cursor = instant_cursor(Arc::clone(&surface));
        let dest = Point::new(300.0, 200.0);

        cursor.move_to(dest).await;

        assert_eq!(cursor.position(), dest);
        let moves = surface.moves();
        assert!(moves.len() >= 2);
        assert_eq!(moves[0], Point::origin());
        assert_eq!(*moves.last().unwrap(), dest);
    }

    #[tokio::test]
    async fn test_transient_move_failures_skip_points() {
        let surface = Arc::new(MockSurface::new());
        surface.fail_next_moves(3);
        let cursor = instant_cursor(Arc::clone(&surface));
        let dest = Point::new(250.0, 150.0);

        cursor.move_to(dest).await;

        // The trace self-heals; the final point still lands.
        assert_eq!(cursor.position(), dest);
        assert_eq!(*surface.moves().last().unwrap(), dest);
    }

    #[tokio::test]
    async fn test_disconnect_stops_trace_at_last_reached() {
        let surface = Arc::new(MockSurface::new());
        surface.disconnect_after_moves(4);
        let cursor = instant_cursor(Arc::clone(&surface));

        cursor.move_to(Point::new(400.0, 300.0)).await;

        let moves = surface.moves();
        assert_eq!(moves.len(), 4);
        assert_eq!(cursor.position(), moves[3]);
    }
}
