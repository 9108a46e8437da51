#![no_main]

use arbitrary::Arbitrary;
use fullpage_core::event::GestureEvent;
use fullpage_core::frame::{FrameId, ManualFrames};
use fullpage_core::geometry::ViewportSize;
use fullpage_core::gesture::ListenCounter;
use fullpage_core::surface::ScrollOffsets;
use fullpage_core::tree::{Capabilities, NodeId, VisualTree};
use fullpage_runtime::{FullpageBuilder, ScrollNavigation, Session, Slide};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Gesture {
        horizontal: bool,
        forward: bool,
        pending: bool,
        in_slider: bool,
    },
    Frame,
    StaleFrame(u64),
    Unlock,
    Resize(u16, u16),
}

#[derive(Debug, Arbitrary)]
struct Input {
    slides: u8,
    slider_at: u8,
    slider_len: u8,
    infinite: bool,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let slide_count = usize::from(input.slides % 8);
    let slider_at = usize::from(input.slider_at) % slide_count.max(1);
    let slider_len = usize::from(input.slider_len % 6);

    let slides: Vec<Slide> = (0..slide_count)
        .map(|i| {
            if i == slider_at {
                Slide::horizontal(vec![Slide::new(); slider_len])
            } else {
                Slide::new()
            }
        })
        .collect();

    let mut tree = VisualTree::new();
    let root = tree.root();
    let slider = tree.append(root, Capabilities::HORIZONTAL_SLIDER);
    let inside: NodeId = tree.append(slider, Capabilities::empty());
    let outside: NodeId = tree.append(root, Capabilities::empty());

    let session = Session::new();
    let Ok(mut nav) = FullpageBuilder::new()
        .slides(slides)
        .infinite(input.infinite)
        .tree(tree)
        .viewport(ViewportSize::new(800.0, 600.0))
        .build(&session, ListenCounter::new(), ManualFrames::new(), ScrollOffsets::new())
    else {
        return;
    };

    for op in input.ops.iter().take(512) {
        let before = nav.position();
        let in_flight = nav.in_flight();

        match *op {
            Op::Gesture { horizontal, forward, pending, in_slider } => {
                let origin = if in_slider { inside } else { outside };
                let event = if horizontal {
                    GestureEvent::horizontal(forward, origin)
                } else {
                    GestureEvent::vertical(forward, origin)
                };
                nav.on_scroll(&event.with_pending(pending));
                // A gesture never writes the store.
                assert_eq!(nav.position(), before);
                if in_flight.is_some() {
                    assert_eq!(nav.in_flight(), in_flight, "gesture replaced in-flight tween");
                }
            }
            Op::Frame => {
                if let Some(id) = nav.frames_mut().next_frame() {
                    nav.on_frame(id);
                }
            }
            Op::StaleFrame(raw) => {
                nav.on_frame(FrameId(raw | (1 << 63)));
                assert_eq!(nav.position(), before);
            }
            Op::Unlock => {
                nav.unlock_scroll();
                if in_flight.is_some() {
                    assert!(nav.is_locked(), "unlock released an in-flight tween");
                }
            }
            Op::Resize(w, h) => nav.on_resize(ViewportSize::new(f64::from(w), f64::from(h))),
        }

        // Lock and tween agree, and at most one frame is outstanding.
        if nav.in_flight().is_some() {
            assert!(nav.is_locked());
        }
        assert!(nav.frames().pending() <= 1);

        // At most one axis changes per step.
        let after = nav.position();
        let changed = usize::from(after.active_vertical != before.active_vertical)
            + usize::from(after.active_horizontal != before.active_horizontal);
        assert!(changed <= 1);
        if after != before {
            assert!(!nav.is_locked(), "store written before unlock");
        }

        assert!(after.active_vertical < slide_count.max(1));
        if let Some(request) = nav.in_flight() {
            assert!(request.to_index < nav.axis_length(request.axis));
        }
    }
});
