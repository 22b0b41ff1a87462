//! Carousel navigation tests
//!
//! Drives a mounted carousel the way the page does: key events through the
//! shared keyboard hub, touch samples straight to the instance.

use folio_carousel::{Carousel, Key, KeyboardHub, MountedCarousel, Navigation, PointerEvent};
use proptest::prelude::*;

fn images(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("shot-{i}.webp")).collect()
}

#[test]
fn wraparound_in_both_directions() {
    let mut c = Carousel::new(images(4)).unwrap();
    c.previous();
    assert_eq!(c.index(), 3);
    c.next();
    assert_eq!(c.index(), 0);
}

#[test]
fn swipe_threshold_contract() {
    let mut c = Carousel::new(images(4)).unwrap();

    c.handle_pointer(PointerEvent::Start { x: 300.0 });
    assert_eq!(
        c.handle_pointer(PointerEvent::End { x: 240.0 }),
        Some(Navigation::Next)
    );
    assert_eq!(c.index(), 1);

    c.handle_pointer(PointerEvent::Start { x: 300.0 });
    assert_eq!(c.handle_pointer(PointerEvent::End { x: 270.0 }), None);
    assert_eq!(c.index(), 1);
}

#[test]
fn tap_is_distinguishable_from_swipe() {
    let mut c = Carousel::new(images(2)).unwrap();
    c.handle_pointer(PointerEvent::Start { x: 50.0 });
    c.handle_pointer(PointerEvent::Move { x: 55.0 });
    c.handle_pointer(PointerEvent::End { x: 55.0 });
    assert!(!c.gesture().has_moved());

    c.handle_pointer(PointerEvent::Start { x: 50.0 });
    c.handle_pointer(PointerEvent::Move { x: 75.0 });
    c.handle_pointer(PointerEvent::End { x: 75.0 });
    assert!(c.gesture().has_moved());
    // 25 units is a move but not a swipe
    assert_eq!(c.index(), 0);
}

#[test]
fn goto_contract() {
    let mut c = Carousel::new(images(4)).unwrap();
    assert!(!c.goto(10));
    assert_eq!(c.index(), 0);
    assert!(c.goto(2));
    assert_eq!(c.index(), 2);
}

#[test]
fn two_mounted_carousels_share_the_keyboard() {
    let hub = KeyboardHub::new();
    let a = MountedCarousel::mount(Carousel::new(images(3)).unwrap(), &hub);
    let b = MountedCarousel::mount(Carousel::new(images(5)).unwrap(), &hub);

    hub.dispatch(Key::from_name("ArrowRight"));
    assert_eq!((a.index(), b.index()), (1, 1));

    drop(a);
    assert_eq!(hub.listener_count(), 1);
    hub.dispatch(Key::from_name("ArrowLeft"));
    assert_eq!(b.index(), 0);
}

#[test]
fn remount_starts_fresh() {
    let hub = KeyboardHub::new();
    let first = MountedCarousel::mount(Carousel::new(images(3)).unwrap(), &hub);
    first.goto(2);
    first.unmount();

    let second = MountedCarousel::mount(Carousel::new(images(3)).unwrap(), &hub);
    assert_eq!(second.index(), 0);
    assert_eq!(hub.listener_count(), 1);
}

#[test]
fn view_uses_label_prefix() {
    let c = Carousel::new(images(2))
        .unwrap()
        .with_label_prefix("Folio screenshot");
    let view = c.view();
    assert_eq!(view.slides[1].alt, "Folio screenshot 2");
    assert!(view.slides[0].active);
}

#[derive(Debug, Clone)]
enum Op {
    Previous,
    Next,
    Goto(usize),
    Swipe(f32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Previous),
        Just(Op::Next),
        (0usize..20).prop_map(Op::Goto),
        (-200.0f32..200.0).prop_map(Op::Swipe),
    ]
}

proptest! {
    #[test]
    fn index_always_in_range(len in 1usize..10, ops in prop::collection::vec(op(), 0..64)) {
        let mut c = Carousel::new(images(len)).unwrap();
        for op in ops {
            let before = c.index();
            match op {
                Op::Previous => c.previous(),
                Op::Next => c.next(),
                Op::Goto(i) => {
                    let moved = c.goto(i);
                    prop_assert_eq!(moved, i < len);
                    if !moved {
                        prop_assert_eq!(c.index(), before);
                    }
                }
                Op::Swipe(dx) => {
                    c.handle_pointer(PointerEvent::Start { x: 0.0 });
                    let nav = c.handle_pointer(PointerEvent::End { x: dx });
                    prop_assert_eq!(nav.is_some(), dx.abs() > 50.0);
                    prop_assert!(c.gesture().origin_x().is_none());
                }
            }
            prop_assert!(c.index() < len);
        }
    }

    #[test]
    fn next_then_previous_is_identity(len in 1usize..10, start in 0usize..10) {
        let mut c = Carousel::new(images(len)).unwrap();
        c.goto(start % len);
        let before = c.index();
        c.next();
        c.previous();
        prop_assert_eq!(c.index(), before);
    }
}
