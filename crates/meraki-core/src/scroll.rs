//! Scroll-derived values
//!
//! Values recomputed from the scroll position on every notification: the
//! hero's fade-out opacity and the navbar's "scrolled past the top" flag.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::viewport::{ScrollSample, Subscription, ViewportSource};

/// Fraction of the viewport height over which the hero fades out
pub const HERO_FADE_SPAN: f64 = 0.7;

/// Scroll offset past which the navbar switches to its solid style
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Hero content opacity for a scroll position.
///
/// `clamp(1 - offset / (0.7 * viewport_height), 0, 1)`. With no usable
/// viewport height the hero is fully opaque at the top and hidden anywhere
/// below it.
pub fn hero_opacity(sample: ScrollSample) -> f64 {
    let span = sample.viewport_height * HERO_FADE_SPAN;
    if !(span.is_finite() && span > 0.0) || sample.offset_y.is_nan() {
        return if sample.offset_y <= 0.0 { 1.0 } else { 0.0 };
    }
    (1.0 - sample.offset_y / span).clamp(0.0, 1.0)
}

/// Whether the navbar should show its scrolled style
pub fn navbar_scrolled(sample: ScrollSample) -> bool {
    sample.offset_y > NAVBAR_SCROLL_THRESHOLD_PX
}

/// A value derived from the scroll position, kept current by a subscription.
///
/// `on_change` is only called when the derived value actually changes, so
/// redundant scroll events are coalesced without affecting the steady state.
pub struct ScrollTracker<T: Copy + PartialEq + 'static> {
    value: Rc<Cell<T>>,
    subscription: Subscription,
}

impl<T: Copy + PartialEq + 'static> ScrollTracker<T> {
    /// Subscribe `derive` to `source`.
    ///
    /// Starts from the source's last scroll sample when it has one,
    /// otherwise from `initial`.
    pub fn mount<S, F>(source: &S, initial: T, derive: fn(ScrollSample) -> T, mut on_change: F) -> Self
    where
        S: ViewportSource + ?Sized,
        F: FnMut(T) + 'static,
    {
        let seeded = source.last_scroll().map(derive).unwrap_or(initial);
        let value = Rc::new(Cell::new(seeded));

        let listener_value = Rc::clone(&value);
        let subscription = source.on_scroll(Box::new(move |sample| {
            let next = derive(sample);
            if listener_value.replace(next) != next {
                on_change(next);
            }
        }));

        Self {
            value,
            subscription,
        }
    }

    pub fn value(&self) -> T {
        self.value.get()
    }

    pub fn is_listening(&self) -> bool {
        self.subscription.is_active()
    }

    /// Release the scroll listener
    pub fn unmount(self) {
        self.subscription.cancel();
    }
}

impl ScrollTracker<f64> {
    /// Hero fade: opacity 1.0 at the top, 0.0 once 70% of a viewport is scrolled
    pub fn hero_fade<S, F>(source: &S, on_change: F) -> Self
    where
        S: ViewportSource + ?Sized,
        F: FnMut(f64) + 'static,
    {
        Self::mount(source, 1.0, hero_opacity, on_change)
    }
}

impl ScrollTracker<bool> {
    /// Navbar style toggle
    pub fn navbar<S, F>(source: &S, on_change: F) -> Self
    where
        S: ViewportSource + ?Sized,
        F: FnMut(bool) + 'static,
    {
        Self::mount(source, false, navbar_scrolled, on_change)
    }
}

impl<T: Copy + PartialEq + fmt::Debug + 'static> fmt::Debug for ScrollTracker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollTracker")
            .field("value", &self.value())
            .field("listening", &self.is_listening())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset: f64) -> ScrollSample {
        ScrollSample::new(offset, 1000.0)
    }

    #[test]
    fn test_hero_opacity_reference_points() {
        assert_eq!(hero_opacity(at(0.0)), 1.0);
        assert!((hero_opacity(at(350.0)) - 0.5).abs() < 1e-9);
        assert_eq!(hero_opacity(at(700.0)), 0.0);
        assert_eq!(hero_opacity(at(1000.0)), 0.0);
    }

    #[test]
    fn test_hero_opacity_overscroll_clamps_to_one() {
        assert_eq!(hero_opacity(at(-40.0)), 1.0);
    }

    #[test]
    fn test_hero_opacity_zero_height_viewport() {
        assert_eq!(hero_opacity(ScrollSample::new(0.0, 0.0)), 1.0);
        assert_eq!(hero_opacity(ScrollSample::new(10.0, 0.0)), 0.0);
        assert_eq!(hero_opacity(ScrollSample::new(10.0, f64::NAN)), 0.0);
    }

    #[test]
    fn test_navbar_threshold_is_exclusive() {
        assert!(!navbar_scrolled(at(0.0)));
        assert!(!navbar_scrolled(at(50.0)));
        assert!(navbar_scrolled(at(51.0)));
    }
}
