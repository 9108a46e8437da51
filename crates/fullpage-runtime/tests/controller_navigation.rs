#![forbid(unsafe_code)]

//! End-to-end navigation through the controller with deterministic host
//! doubles: a manual frame pump, in-memory scroll offsets, and a listen
//! counter as the gesture source.
//!
//! Run:
//!   cargo test -p fullpage-runtime --test controller_navigation

use fullpage_core::event::{GestureEvent, GestureKind, Intent};
use fullpage_core::frame::ManualFrames;
use fullpage_core::geometry::{Axis, ViewportSize};
use fullpage_core::gesture::ListenCounter;
use fullpage_core::surface::ScrollOffsets;
use fullpage_core::tree::{Capabilities, NodeId, VisualTree};
use fullpage_runtime::{
    FullpageBuilder, FullpageConfig, NavState, ScrollController, ScrollNavigation, Session,
    Slide, SlidePosition,
};

type Controller = ScrollController<ListenCounter, ManualFrames, ScrollOffsets>;

const VIEWPORT: ViewportSize = ViewportSize::new(800.0, 600.0);

// ============================================================================
// Fixtures
// ============================================================================

/// Three vertical slides; the middle one is a horizontal slider of three.
struct Deck {
    tree: VisualTree,
    plain: NodeId,
    in_slider: NodeId,
}

impl Deck {
    fn new() -> Self {
        let mut tree = VisualTree::new();
        let root = tree.root();
        let first = tree.append(root, Capabilities::empty());
        let slider = tree.append(root, Capabilities::HORIZONTAL_SLIDER);
        let panel = tree.append(slider, Capabilities::empty());
        let in_slider = tree.append(panel, Capabilities::empty());
        tree.append(root, Capabilities::empty());
        Self {
            tree,
            plain: first,
            in_slider,
        }
    }

    fn slides() -> Vec<Slide> {
        vec![
            Slide::new(),
            Slide::horizontal(vec![Slide::new(), Slide::new(), Slide::new()]),
            Slide::new(),
        ]
    }
}

fn build(session: &Session, slides: Vec<Slide>, tree: VisualTree, infinite: bool) -> Controller {
    FullpageBuilder::new()
        .slides(slides)
        .infinite(infinite)
        .tree(tree)
        .viewport(VIEWPORT)
        .build(
            session,
            ListenCounter::new(),
            ManualFrames::new(),
            ScrollOffsets::new(),
        )
        .expect("valid controller")
}

fn deck_controller(session: &Session) -> (Controller, NodeId, NodeId) {
    let deck = Deck::new();
    let (plain, in_slider) = (deck.plain, deck.in_slider);
    (build(session, Deck::slides(), deck.tree, false), plain, in_slider)
}

/// Fire frames until none are outstanding; returns the number fired.
fn pump(c: &mut Controller) -> usize {
    let mut fired = 0;
    while let Some(id) = c.frames_mut().next_frame() {
        c.on_frame(id);
        fired += 1;
    }
    fired
}

fn pump_n(c: &mut Controller, n: usize) {
    for _ in 0..n {
        if let Some(id) = c.frames_mut().next_frame() {
            c.on_frame(id);
        }
    }
}

// ============================================================================
// Vertical navigation
// ============================================================================

#[test]
fn three_slide_forward_scenario() {
    let session = Session::new();
    let slides = vec![Slide::new(); 3];
    let mut c = build(&session, slides, VisualTree::new(), false);
    let root = c.tree().root();

    c.on_scroll(&GestureEvent::vertical(Intent::Forward, root));

    let request = c.in_flight().expect("transition accepted");
    assert_eq!(request.axis, Axis::Vertical);
    assert_eq!(request.to_index, 1);
    assert_eq!(c.position().active_vertical, 0, "store untouched until completion");

    pump(&mut c);
    assert_eq!(c.surface().top, 1.0 * VIEWPORT.height);
    assert_eq!(c.position().active_vertical, 1);
    assert!(!c.is_locked());
}

#[test]
fn walks_to_the_end_and_stops() {
    let session = Session::new();
    let mut c = build(&session, vec![Slide::new(); 3], VisualTree::new(), false);
    let root = c.tree().root();

    for expected in [1, 2, 2, 2] {
        c.on_scroll(&GestureEvent::vertical(true, root));
        pump(&mut c);
        assert_eq!(c.position().active_vertical, expected);
        assert_eq!(c.state(), NavState::Idle);
    }
    assert_eq!(c.surface().top, 1200.0);

    c.on_scroll(&GestureEvent::vertical(false, root));
    pump(&mut c);
    assert_eq!(c.position().active_vertical, 1);
    assert_eq!(c.surface().top, 600.0);
}

#[test]
fn infinite_wraps_past_the_last_slide() {
    let session = Session::new();
    let mut c = build(&session, vec![Slide::new(); 3], VisualTree::new(), true);
    let root = c.tree().root();

    c.on_scroll(&GestureEvent::vertical(false, root));
    assert_eq!(c.in_flight().map(|r| r.to_index), Some(2));
    pump(&mut c);
    assert_eq!(c.position().active_vertical, 2);

    c.on_scroll(&GestureEvent::vertical(true, root));
    pump(&mut c);
    assert_eq!(c.position().active_vertical, 0);
    assert_eq!(c.surface().top, 0.0);
}

#[test]
fn single_slide_never_moves() {
    let session = Session::new();
    let mut c = build(&session, vec![Slide::new()], VisualTree::new(), true);
    let root = c.tree().root();

    for forward in [true, false] {
        c.on_scroll(&GestureEvent::vertical(forward, root));
        assert_eq!(c.state(), NavState::Idle);
    }
    assert_eq!(c.frames().requested(), 0);
    assert_eq!(c.source().count(), 2);
}

#[test]
fn empty_sequence_is_valid_but_inert() {
    let session = Session::new();
    let mut c = build(&session, Vec::new(), VisualTree::new(), false);
    let root = c.tree().root();
    c.on_scroll(&GestureEvent::vertical(true, root));
    assert_eq!(c.position(), SlidePosition::default());
    assert!(!c.is_locked());
}

// ============================================================================
// Lock exclusivity
// ============================================================================

#[test]
fn burst_of_gestures_while_locked_is_dropped() {
    let session = Session::new();
    let mut c = build(&session, vec![Slide::new(); 5], VisualTree::new(), false);
    let root = c.tree().root();

    c.on_scroll(&GestureEvent::vertical(true, root));
    pump_n(&mut c, 10);

    for _ in 0..25 {
        c.on_scroll(&GestureEvent::vertical(true, root));
        c.on_touch(&GestureEvent::vertical(false, root).with_kind(GestureKind::Touch));
        assert!(c.is_locked());
        assert_eq!(c.position().active_vertical, 0);
    }
    assert_eq!(c.frames().pending(), 1, "only the in-flight tween holds a frame");

    pump(&mut c);
    assert_eq!(c.position().active_vertical, 1, "exactly one step taken");
    assert_eq!(c.source().count(), 1, "completion unlocked exactly once");
    assert!(!c.is_locked());
}

#[test]
fn next_gesture_after_completion_is_accepted() {
    let session = Session::new();
    let mut c = build(&session, vec![Slide::new(); 3], VisualTree::new(), false);
    let root = c.tree().root();

    c.on_scroll(&GestureEvent::vertical(true, root));
    pump(&mut c);
    c.on_touch(&GestureEvent::vertical(true, root).with_kind(GestureKind::Touch));
    assert!(c.is_locked());
    pump(&mut c);
    assert_eq!(c.position().active_vertical, 2);
}

#[test]
fn unresolved_gesture_does_not_lock() {
    let session = Session::new();
    let mut c = build(&session, vec![Slide::new(); 3], VisualTree::new(), false);
    let root = c.tree().root();
    c.on_scroll(&GestureEvent::vertical(true, root).with_pending(false));
    assert_eq!(c.state(), NavState::Idle);
    assert!(c.in_flight().is_none());
}

// ============================================================================
// Horizontal navigation
// ============================================================================

#[test]
fn horizontal_gesture_on_plain_slide_is_noop() {
    let session = Session::new();
    let (mut c, plain, _) = deck_controller(&session);

    c.on_scroll(&GestureEvent::horizontal(true, plain));
    assert_eq!(c.position(), SlidePosition::default());
    assert_eq!(c.state(), NavState::Idle);
    assert_eq!(c.frames().requested(), 0);
    assert_eq!(c.source().count(), 1);
}

#[test]
fn horizontal_navigation_inside_slider() {
    let session = Session::new();
    let (mut c, _, in_slider) = deck_controller(&session);
    let root = c.tree().root();

    c.on_scroll(&GestureEvent::vertical(true, root));
    pump(&mut c);
    assert_eq!(c.axis_length(Axis::Horizontal), 3);

    c.on_scroll(&GestureEvent::horizontal(true, in_slider));
    assert_eq!(c.in_flight().map(|r| r.axis), Some(Axis::Horizontal));
    pump(&mut c);

    assert_eq!(
        c.position(),
        SlidePosition {
            active_vertical: 1,
            active_horizontal: 1,
        }
    );
    assert_eq!(c.surface().left, 800.0);
    assert_eq!(c.surface().top, 600.0);
}

#[test]
fn horizontal_end_of_slider_rejects() {
    let session = Session::new();
    let (mut c, _, in_slider) = deck_controller(&session);
    let root = c.tree().root();

    c.on_scroll(&GestureEvent::vertical(true, root));
    pump(&mut c);
    c.on_scroll(&GestureEvent::horizontal(false, in_slider));
    assert!(!c.is_locked());
    assert_eq!(c.position().active_horizontal, 0);
}

#[test]
fn horizontal_marker_on_non_slider_slide_has_no_sequence() {
    let session = Session::new();
    let (mut c, _, in_slider) = deck_controller(&session);

    // Active vertical slide 0 has no horizontal sequence.
    c.on_scroll(&GestureEvent::horizontal(true, in_slider));
    assert_eq!(c.axis_length(Axis::Horizontal), 0);
    assert!(!c.is_locked());
    assert_eq!(c.position(), SlidePosition::default());
}

#[test]
fn completions_touch_one_field_each() {
    let session = Session::new();
    let (mut c, _, in_slider) = deck_controller(&session);
    let root = c.tree().root();

    c.on_scroll(&GestureEvent::vertical(true, root));
    pump(&mut c);
    let after_vertical = c.position();
    assert_eq!(after_vertical.active_horizontal, 0);

    c.on_scroll(&GestureEvent::horizontal(true, in_slider));
    pump(&mut c);
    assert_eq!(c.position().active_vertical, after_vertical.active_vertical);
    assert_eq!(c.position().active_horizontal, 1);
}

#[test]
fn precomputed_path_is_used() {
    let session = Session::new();
    let (mut c, plain, in_slider) = deck_controller(&session);
    let root = c.tree().root();
    c.on_scroll(&GestureEvent::vertical(true, root));
    pump(&mut c);

    let path = c.tree().composed_path(in_slider);
    c.on_scroll(&GestureEvent::horizontal(true, plain).with_path(path));
    assert!(c.is_locked());
    pump(&mut c);
    assert_eq!(c.position().active_horizontal, 1);
}

// ============================================================================
// Shared store and viewport
// ============================================================================

#[test]
fn controllers_in_one_session_share_position() {
    let session = Session::new();
    let mut first = build(&session, vec![Slide::new(); 3], VisualTree::new(), false);
    let second = build(&session, vec![Slide::new(); 3], VisualTree::new(), false);
    assert!(first.store().ptr_eq(second.store()));

    let root = first.tree().root();
    first.on_scroll(&GestureEvent::vertical(true, root));
    pump(&mut first);
    assert_eq!(second.position().active_vertical, 1);
    assert!(!second.is_locked(), "locks are per controller");
}

#[test]
fn concurrent_axes_on_two_controllers_do_not_conflict() {
    let session = Session::new();
    let (mut vertical, _, _) = deck_controller(&session);
    let (mut horizontal, _, in_slider) = deck_controller(&session);
    let root = vertical.tree().root();

    vertical.on_scroll(&GestureEvent::vertical(true, root));
    pump(&mut vertical);

    // Both controllers transition at once on different axes.
    vertical.on_scroll(&GestureEvent::vertical(true, root));
    horizontal.on_scroll(&GestureEvent::horizontal(true, in_slider));
    assert!(vertical.is_locked() && horizontal.is_locked());

    pump(&mut horizontal);
    pump(&mut vertical);
    assert_eq!(
        session.position(),
        Some(SlidePosition {
            active_vertical: 2,
            active_horizontal: 1,
        })
    );
}

#[test]
fn resize_changes_later_offsets() {
    let session = Session::new();
    let mut c = build(&session, vec![Slide::new(); 3], VisualTree::new(), false);
    let root = c.tree().root();

    c.on_resize(ViewportSize::new(1024.0, 768.0));
    c.on_scroll(&GestureEvent::vertical(true, root));
    pump(&mut c);
    assert_eq!(c.surface().top, 768.0);
    assert_eq!(c.viewport(), ViewportSize::new(1024.0, 768.0));
}

#[test]
fn custom_timing_changes_frame_count() {
    let session = Session::new();
    let config = FullpageConfig {
        transition_ms: 300,
        frame_increment_ms: 20,
        ..FullpageConfig::default()
    };
    let mut c = FullpageBuilder::new()
        .slides(vec![Slide::new(); 2])
        .config(config)
        .viewport(VIEWPORT)
        .build(
            &session,
            ListenCounter::new(),
            ManualFrames::new(),
            ScrollOffsets::new(),
        )
        .expect("valid controller");
    let root = c.tree().root();

    c.on_scroll(&GestureEvent::vertical(true, root));
    assert_eq!(pump(&mut c), 15);
    assert_eq!(c.position().active_vertical, 1);
}

// ============================================================================
// Sliders of different lengths
// ============================================================================

fn mounted(session: &Session, slides: Vec<Slide>, infinite: bool) -> Controller {
    FullpageBuilder::new()
        .slides(slides)
        .infinite(infinite)
        .viewport(VIEWPORT)
        .build(
            session,
            ListenCounter::new(),
            ManualFrames::new(),
            ScrollOffsets::new(),
        )
        .expect("valid controller")
}

#[test]
fn default_tree_reaches_horizontal_slider() {
    let session = Session::new();
    let mut c = mounted(&session, vec![Slide::horizontal(vec![Slide::new(); 3])], false);
    let slider = c.slide_node(0).expect("mounted slider");

    c.on_scroll(&GestureEvent::horizontal(true, slider));
    pump(&mut c);
    assert_eq!(c.position().active_horizontal, 1);
    assert_eq!(c.surface().left, VIEWPORT.width);

    // The root sits outside every slider.
    let root = c.tree().root();
    c.on_scroll(&GestureEvent::horizontal(true, root));
    assert_eq!(c.state(), NavState::Idle);
    assert_eq!(c.position().active_horizontal, 1);
}

#[test]
fn shorter_slider_navigates_after_vertical_move() {
    let session = Session::new();
    let slides = vec![
        Slide::horizontal(vec![Slide::new(); 5]),
        Slide::horizontal(vec![Slide::new(); 2]),
    ];
    let mut c = mounted(&session, slides, false);
    let wide = c.slide_node(0).expect("first slider");
    let narrow = c.slide_node(1).expect("second slider");
    let root = c.tree().root();

    for _ in 0..4 {
        c.on_scroll(&GestureEvent::horizontal(true, wide));
        pump(&mut c);
    }
    assert_eq!(c.position().active_horizontal, 4);

    c.on_scroll(&GestureEvent::vertical(true, root));
    pump(&mut c);
    // Vertical completion leaves the horizontal field alone.
    assert_eq!(
        c.position(),
        SlidePosition {
            active_vertical: 1,
            active_horizontal: 4,
        }
    );
    assert_eq!(c.axis_length(Axis::Horizontal), 2);
    assert_eq!(c.active_index(Axis::Horizontal), 1);

    // Forward from the clamped last slide is a boundary.
    let requested = c.frames().requested();
    c.on_scroll(&GestureEvent::horizontal(true, narrow));
    assert_eq!(c.state(), NavState::Idle);
    assert_eq!(c.frames().requested(), requested);

    c.on_scroll(&GestureEvent::horizontal(false, narrow));
    let request = c.in_flight().expect("backward move accepted");
    assert_eq!((request.from_index, request.to_index), (1, 0));
    pump(&mut c);
    assert_eq!(c.position().active_horizontal, 0);
    assert_eq!(c.surface().left, 0.0);

    c.on_scroll(&GestureEvent::horizontal(true, narrow));
    pump(&mut c);
    assert_eq!(c.position().active_horizontal, 1);
    assert!(c.active_index(Axis::Horizontal) < c.axis_length(Axis::Horizontal));
}

#[test]
fn shorter_infinite_slider_wraps_from_clamped_index() {
    let session = Session::new();
    let slides = vec![
        Slide::horizontal(vec![Slide::new(); 4]),
        Slide::horizontal(vec![Slide::new(); 2]),
    ];
    let mut c = mounted(&session, slides, true);
    let wide = c.slide_node(0).expect("first slider");
    let narrow = c.slide_node(1).expect("second slider");
    let root = c.tree().root();

    for _ in 0..3 {
        c.on_scroll(&GestureEvent::horizontal(true, wide));
        pump(&mut c);
    }
    c.on_scroll(&GestureEvent::vertical(true, root));
    pump(&mut c);
    assert_eq!(c.position().active_horizontal, 3);

    c.on_scroll(&GestureEvent::horizontal(true, narrow));
    let request = c.in_flight().expect("wrap accepted");
    assert_eq!((request.from_index, request.to_index), (1, 0));
    pump(&mut c);
    assert_eq!(c.position().active_horizontal, 0);
}
