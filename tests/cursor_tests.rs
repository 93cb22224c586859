//! Integration tests for the cursor controller against the scriptable mock
//! surface: explicit moves, clicks, error surfacing, and wander preemption.

use std::sync::Arc;
use std::time::Duration;

use human_cursor::config::CursorConfig;
use human_cursor::cursor::{ClickOptions, Cursor, CursorError, MoveOptions};
use human_cursor::geometry::{BoundingBox, Point};
use human_cursor::surface::{ButtonEvent, MockSurface, Surface};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn instant_cursor(surface: Arc<MockSurface>) -> Cursor<MockSurface> {
    Cursor::new(surface, Point::origin(), CursorConfig::instant())
}

// ============================================================================
// Explicit Moves
// ============================================================================

#[tokio::test]
async fn test_move_to_traces_path_and_updates_position() {
    init_tracing();
    let surface = Arc::new(MockSurface::new());
    let cursor = instant_cursor(Arc::clone(&surface));
    let dest = Point::new(320.0, 240.0);

    cursor.move_to(dest).await;

    let moves = surface.moves();
    assert!(moves.len() >= 2);
    assert_eq!(moves[0], Point::origin());
    assert_eq!(*moves.last().unwrap(), dest);
    assert_eq!(cursor.position(), dest);
}

#[tokio::test]
async fn test_long_move_overshoots_then_corrects() {
    let surface = Arc::new(MockSurface::new());
    let cursor = instant_cursor(Arc::clone(&surface));
    let dest = Point::new(600.0, 0.0);

    cursor.move_to(dest).await;

    let moves = surface.moves();
    // The main leg aims past the target along the movement axis; the
    // corrective leg then lands back on it.
    assert!(
        moves.iter().any(|p| p.x >= dest.x),
        "no overshoot evidence in {} moves",
        moves.len()
    );
    assert_eq!(*moves.last().unwrap(), dest);
    assert_eq!(cursor.position(), dest);
}

#[tokio::test]
async fn test_move_to_element_picks_point_inside_bounds() {
    let surface = Arc::new(MockSurface::new());
    let bounds = BoundingBox::new(100.0, 100.0, 20.0, 20.0);
    surface.add_element("#target", bounds);
    let cursor = instant_cursor(Arc::clone(&surface));

    let dest = cursor
        .move_to_element("#target", &MoveOptions::default())
        .await
        .unwrap();

    assert!(bounds.contains(dest));
    assert_eq!(cursor.position(), dest);
    assert_eq!(*surface.moves().last().unwrap(), dest);
}

#[tokio::test]
async fn test_move_to_element_respects_padding() {
    let surface = Arc::new(MockSurface::new());
    surface.add_element("#pad", BoundingBox::new(0.0, 0.0, 100.0, 100.0));
    let cursor = instant_cursor(Arc::clone(&surface));

    let options = MoveOptions {
        padding_percent: Some(50.0),
        ..Default::default()
    };
    for _ in 0..20 {
        let dest = cursor.move_to_element("#pad", &options).await.unwrap();
        assert!(dest.x >= 25.0 && dest.x <= 75.0);
        assert!(dest.y >= 25.0 && dest.y <= 75.0);
    }
}

// ============================================================================
// Error Surfacing
// ============================================================================

#[tokio::test]
async fn test_missing_selector_is_target_not_found() {
    let surface = Arc::new(MockSurface::new());
    let cursor = instant_cursor(surface);

    let options = MoveOptions {
        timeout: Some(Duration::ZERO),
        ..Default::default()
    };
    let err = cursor
        .move_to_element("#nowhere", &options)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        CursorError::TargetNotFound {
            selector: "#nowhere".to_string()
        }
    );
    // The busy state must clear even on the error path.
    assert!(cursor.is_random_move_enabled());
}

#[tokio::test]
async fn test_unreportable_bounds_is_geometry_unavailable() {
    let surface = Arc::new(MockSurface::new());
    surface.add_element_without_bounds("#ghost");
    let cursor = instant_cursor(surface);

    let err = cursor
        .move_to_element("#ghost", &MoveOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, CursorError::GeometryUnavailable { .. }));
    assert!(cursor.is_random_move_enabled());
}

#[tokio::test]
async fn test_click_on_missing_target_propagates_error() {
    let surface = Arc::new(MockSurface::new());
    let cursor = instant_cursor(Arc::clone(&surface));

    let err = cursor
        .click(Some("#gone"), &ClickOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, CursorError::TargetNotFound { .. }));
    assert!(surface.button_events().is_empty());
}

// ============================================================================
// Clicks
// ============================================================================

#[tokio::test]
async fn test_click_at_current_position() {
    let surface = Arc::new(MockSurface::new());
    let cursor = instant_cursor(Arc::clone(&surface));

    cursor.click(None, &ClickOptions::default()).await.unwrap();

    assert_eq!(
        surface.button_events(),
        vec![ButtonEvent::Down, ButtonEvent::Up]
    );
    assert!(surface.moves().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_click_with_target_moves_then_presses() {
    let surface = Arc::new(MockSurface::new());
    surface.add_element("#btn", BoundingBox::new(50.0, 50.0, 30.0, 12.0));
    let cursor = Cursor::new(
        Arc::clone(&surface),
        Point::origin(),
        CursorConfig::default(),
    );

    let options = ClickOptions {
        hold: Some(Duration::from_millis(90)),
        ..Default::default()
    };
    cursor.click(Some("#btn"), &options).await.unwrap();

    assert!(!surface.moves().is_empty());
    assert_eq!(
        surface.button_events(),
        vec![ButtonEvent::Down, ButtonEvent::Up]
    );
}

// ============================================================================
// Wander Loop
// ============================================================================

fn wander_config() -> CursorConfig {
    CursorConfig::instant()
        .with_step_delay_ms(1, 2)
        .with_wander_pause_max_ms(5)
}

#[tokio::test(start_paused = true)]
async fn test_wander_loop_moves_cursor_while_idle() {
    init_tracing();
    let surface = Arc::new(MockSurface::new());
    let cursor = Cursor::with_random_moves(Arc::clone(&surface), Point::origin(), wander_config());

    tokio::time::sleep(Duration::from_millis(500)).await;

    let moves = surface.moves();
    assert!(!moves.is_empty(), "wander loop produced no motion");
    for p in &moves {
        // Wander destinations come from the viewport; the curve may bow
        // outside it, but never into negative pixel space.
        assert!(p.x >= 0.0 && p.y >= 0.0);
    }
    drop(cursor);
}

#[tokio::test(start_paused = true)]
async fn test_explicit_move_preempts_wander() {
    let surface = Arc::new(MockSurface::new());
    let cursor = Cursor::with_random_moves(Arc::clone(&surface), Point::origin(), wander_config());

    // Let the wander loop get some tracing in flight.
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!surface.moves().is_empty());

    let dest = Point::new(150.0, 140.0);
    cursor.move_to(dest).await;

    // Position reflects the explicit destination, not an interleaved wander
    // point. Read immediately, before yielding back to the wander task.
    assert_eq!(cursor.position(), dest);
    assert!(cursor.is_random_move_enabled());
}

#[tokio::test(start_paused = true)]
async fn test_toggle_off_halts_wandering() {
    let surface = Arc::new(MockSurface::new());
    let cursor = Cursor::with_random_moves(Arc::clone(&surface), Point::origin(), wander_config());

    tokio::time::sleep(Duration::from_millis(200)).await;
    cursor.toggle_random_move(false);
    let frozen = surface.moves().len();

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(surface.moves().len(), frozen);

    cursor.toggle_random_move(true);
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(surface.moves().len() > frozen, "wandering did not resume");
}

#[tokio::test(start_paused = true)]
async fn test_wander_loop_stops_on_disconnect() {
    let surface = Arc::new(MockSurface::new());
    let cursor = Cursor::with_random_moves(Arc::clone(&surface), Point::origin(), wander_config());

    tokio::time::sleep(Duration::from_millis(100)).await;
    surface.disconnect();

    let frozen = surface.moves().len();
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(surface.moves().len(), frozen);
    drop(cursor);
}

// ============================================================================
// Trace Resilience
// ============================================================================

#[tokio::test]
async fn test_transient_failures_do_not_abort_move() {
    init_tracing();
    let surface = Arc::new(MockSurface::new());
    surface.fail_next_moves(4);
    let cursor = instant_cursor(Arc::clone(&surface));
    let dest = Point::new(280.0, 190.0);

    cursor.move_to(dest).await;

    assert_eq!(cursor.position(), dest);
    assert_eq!(*surface.moves().last().unwrap(), dest);
}

#[tokio::test]
async fn test_disconnect_mid_trace_stops_quietly() {
    let surface = Arc::new(MockSurface::new());
    surface.disconnect_after_moves(3);
    let cursor = instant_cursor(Arc::clone(&surface));

    cursor.move_to(Point::new(350.0, 260.0)).await;

    let moves = surface.moves();
    assert_eq!(moves.len(), 3);
    assert_eq!(cursor.position(), moves[2]);
    assert!(!surface.is_connected());
}
