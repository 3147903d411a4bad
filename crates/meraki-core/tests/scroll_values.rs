//! Scroll-derived values driven through a simulated viewport

use std::cell::RefCell;
use std::rc::Rc;

use meraki_core::{hero_opacity, navbar_scrolled, ScrollSample, ScrollTracker, ViewportHub};
use proptest::prelude::*;

#[test]
fn test_hero_fade_follows_scroll() {
    let hub = ViewportHub::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let fade = {
        let seen = Rc::clone(&seen);
        ScrollTracker::hero_fade(&hub, move |opacity| seen.borrow_mut().push(opacity))
    };
    assert_eq!(fade.value(), 1.0);

    hub.dispatch_scroll(ScrollSample::new(350.0, 1000.0));
    assert!((fade.value() - 0.5).abs() < 1e-9);

    hub.dispatch_scroll(ScrollSample::new(700.0, 1000.0));
    assert_eq!(fade.value(), 0.0);

    hub.dispatch_scroll(ScrollSample::new(1000.0, 1000.0));
    assert_eq!(fade.value(), 0.0);

    // The clamped 1000px sample did not change the value, so no extra callback
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn test_navbar_toggles_around_fifty_pixels() {
    let hub = ViewportHub::new();
    let toggles = Rc::new(RefCell::new(Vec::new()));

    let navbar = {
        let toggles = Rc::clone(&toggles);
        ScrollTracker::navbar(&hub, move |scrolled| toggles.borrow_mut().push(scrolled))
    };

    for offset in [0.0, 25.0, 50.0] {
        hub.dispatch_scroll(ScrollSample::new(offset, 800.0));
        assert!(!navbar.value(), "scrolled at {offset}");
    }

    hub.dispatch_scroll(ScrollSample::new(51.0, 800.0));
    assert!(navbar.value());

    hub.dispatch_scroll(ScrollSample::new(10.0, 800.0));
    assert!(!navbar.value());

    assert_eq!(*toggles.borrow(), vec![true, false]);
}

#[test]
fn test_tracker_seeds_from_last_sample() {
    let hub = ViewportHub::new();
    hub.dispatch_scroll(ScrollSample::new(400.0, 800.0));

    let navbar = ScrollTracker::navbar(&hub, |_| {});
    assert!(navbar.value());
}

#[test]
fn test_unmounted_tracker_ignores_scroll() {
    let hub = ViewportHub::new();
    let calls = Rc::new(RefCell::new(0u32));

    let fade = {
        let calls = Rc::clone(&calls);
        ScrollTracker::hero_fade(&hub, move |_| *calls.borrow_mut() += 1)
    };
    assert_eq!(hub.scroll_listener_count(), 1);

    fade.unmount();
    assert_eq!(hub.scroll_listener_count(), 0);

    hub.dispatch_scroll(ScrollSample::new(500.0, 1000.0));
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn test_hero_and_navbar_share_one_source() {
    let hub = ViewportHub::new();
    let fade = ScrollTracker::hero_fade(&hub, |_| {});
    let navbar = ScrollTracker::navbar(&hub, |_| {});

    hub.dispatch_scroll(ScrollSample::new(60.0, 1000.0));

    assert!(navbar.value());
    assert!(fade.value() < 1.0 && fade.value() > 0.9);
}

proptest! {
    /// Opacity always stays within [0, 1]
    #[test]
    fn test_hero_opacity_in_unit_range(offset in -5000.0f64..50_000.0, height in 0.0f64..5000.0) {
        let opacity = hero_opacity(ScrollSample::new(offset, height));
        prop_assert!((0.0..=1.0).contains(&opacity));
    }

    /// Scrolling further never makes the hero more opaque
    #[test]
    fn test_hero_opacity_monotonic(a in 0.0f64..5000.0, b in 0.0f64..5000.0, height in 1.0f64..3000.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let near = hero_opacity(ScrollSample::new(low, height));
        let far = hero_opacity(ScrollSample::new(high, height));
        prop_assert!(far <= near);
    }

    /// The navbar flag is exactly `offset > 50`
    #[test]
    fn test_navbar_matches_threshold(offset in -100.0f64..500.0) {
        prop_assert_eq!(navbar_scrolled(ScrollSample::new(offset, 900.0)), offset > 50.0);
    }
}
