//! Viewport context for the studio page.
//!
//! Provides the [`ViewportHub`] to all components via use_context, plus the
//! hooks sections use to subscribe to it.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(ViewportHub::new);
//!
//! // In a section component
//! let visible = use_reveal(SectionId::Services);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use meraki_core::{
    hero_opacity, navbar_scrolled, RevealSection, ScrollSample, ScrollTracker, SectionId,
    ViewportHub, ViewportSource,
};

/// Hook to access the viewport signal source from context.
pub fn use_viewport() -> ViewportHub {
    use_context::<ViewportHub>()
}

/// Hook for a section's reveal latch.
///
/// Returns a signal that turns `true` the first time the section crosses its
/// configured threshold and stays `true`. The observer is released when the
/// calling component is dropped.
pub fn use_reveal(section: SectionId) -> Signal<bool> {
    let hub = use_viewport();
    let mut visible = use_signal(|| false);

    let mounted = use_hook(move || {
        let reveal = RevealSection::mount_registered(&hub, section, move || visible.set(true));
        Rc::new(RefCell::new(Some(reveal)))
    });

    use_drop(move || {
        if let Some(reveal) = mounted.borrow_mut().take() {
            reveal.unmount();
        }
    });

    visible
}

/// Hook for the hero's scroll fade (1.0 at the top, 0.0 after 70% of a viewport).
pub fn use_hero_opacity() -> Signal<f64> {
    use_scroll_value(1.0, hero_opacity)
}

/// Hook for the navbar's scrolled style flag.
pub fn use_navbar_scrolled() -> Signal<bool> {
    use_scroll_value(false, navbar_scrolled)
}

fn use_scroll_value<T>(initial: T, derive: fn(ScrollSample) -> T) -> Signal<T>
where
    T: Copy + PartialEq + 'static,
{
    let hub = use_viewport();
    let mut value = use_signal(|| hub.last_scroll().map(derive).unwrap_or(initial));

    let tracker = use_hook(move || {
        let tracker = ScrollTracker::mount(&hub, initial, derive, move |next| value.set(next));
        Rc::new(RefCell::new(Some(tracker)))
    });

    use_drop(move || {
        if let Some(tracker) = tracker.borrow_mut().take() {
            tracker.unmount();
        }
    });

    value
}
