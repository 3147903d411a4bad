//! Viewport signal source
//!
//! Components never read the window's scroll position or observe elements
//! directly. They subscribe to a [`ViewportSource`] handed to them, and the
//! host feeds that source with whatever its document reports.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────┐   ViewportEvent (JSON)   ┌──────────────┐
//! │  host bridge │ ───────────────────────▶ │ ViewportHub  │
//! │ scroll + IO  │                          │  dispatch()  │
//! └──────────────┘                          └──────┬───────┘
//!                                                  │ fan-out
//!                         ┌────────────────────────┼───────────────────────┐
//!                         ▼                        ▼                       ▼
//!                  on_scroll listeners    observe(Studio) listeners   observe(Contact) ...
//! ```
//!
//! Every registration returns a [`Subscription`]. Dropping it releases the
//! listener, so acquire and release are always symmetric.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

use crate::error::SiteResult;
use crate::sections::SectionId;

/// One scroll notification from the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollSample {
    /// Current vertical scroll offset in CSS pixels
    pub offset_y: f64,
    /// Current viewport height in CSS pixels
    pub viewport_height: f64,
}

impl ScrollSample {
    pub fn new(offset_y: f64, viewport_height: f64) -> Self {
        Self {
            offset_y,
            viewport_height,
        }
    }
}

/// One intersection notification for an observed element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionSample {
    /// The observed section
    pub target: SectionId,
    /// Fraction of the element inside the (margin-adjusted) viewport, 0..=1
    pub ratio: f64,
    /// Whether the element currently intersects at all
    pub is_intersecting: bool,
}

impl IntersectionSample {
    pub fn entering(target: SectionId, ratio: f64) -> Self {
        Self {
            target,
            ratio,
            is_intersecting: true,
        }
    }

    pub fn leaving(target: SectionId) -> Self {
        Self {
            target,
            ratio: 0.0,
            is_intersecting: false,
        }
    }
}

/// Message forwarded by the host bridge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewportEvent {
    Scroll(ScrollSample),
    Intersection(IntersectionSample),
}

impl ViewportEvent {
    /// Parse one bridge message.
    pub fn from_json(raw: &str) -> SiteResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Collaborator interface through which components receive viewport signals.
pub trait ViewportSource {
    /// Register a listener called on every scroll notification
    fn on_scroll(&self, listener: Box<dyn FnMut(ScrollSample)>) -> Subscription;

    /// Register a listener for intersection notifications about `target`
    fn observe(
        &self,
        target: SectionId,
        listener: Box<dyn FnMut(IntersectionSample)>,
    ) -> Subscription;

    /// Most recent scroll sample, if any has been seen
    fn last_scroll(&self) -> Option<ScrollSample> {
        None
    }
}

/// Handle for one listener registration.
///
/// Dropping the handle (or calling [`Subscription::cancel`]) releases the
/// registration. Releasing after the source itself is gone is a no-op.
#[must_use = "dropping a Subscription immediately releases the listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A handle that owns no registration (e.g. the element was missing)
    pub fn detached() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Release the registration now
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

type ScrollListener = Rc<RefCell<Box<dyn FnMut(ScrollSample)>>>;
type IntersectionListener = Rc<RefCell<Box<dyn FnMut(IntersectionSample)>>>;

#[derive(Default)]
struct HubState {
    next_id: u64,
    scroll: Vec<(u64, ScrollListener)>,
    observers: Vec<(u64, SectionId, IntersectionListener)>,
    last_scroll: Option<ScrollSample>,
}

impl HubState {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-process viewport signal source.
///
/// Single-threaded: it lives on the UI thread and is cloned cheaply into
/// every component that needs it. Listeners may subscribe or release
/// (themselves included) while an event is being dispatched.
#[derive(Clone, Default)]
pub struct ViewportHub {
    state: Rc<RefCell<HubState>>,
}

impl ViewportHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fan one host event out to the matching listeners
    pub fn dispatch(&self, event: ViewportEvent) {
        match event {
            ViewportEvent::Scroll(sample) => self.dispatch_scroll(sample),
            ViewportEvent::Intersection(sample) => self.dispatch_intersection(sample),
        }
    }

    pub fn dispatch_scroll(&self, sample: ScrollSample) {
        let listeners = {
            let mut state = self.state.borrow_mut();
            state.last_scroll = Some(sample);
            state.scroll.clone()
        };

        for (id, listener) in listeners {
            // Released by an earlier listener during this dispatch
            if !self.state.borrow().scroll.iter().any(|(live, _)| *live == id) {
                continue;
            }
            // A listener that re-enters dispatch does not see its own event again
            if let Ok(mut listener) = listener.try_borrow_mut() {
                (*listener)(sample);
            }
        }
    }

    pub fn dispatch_intersection(&self, sample: IntersectionSample) {
        let listeners: Vec<(u64, IntersectionListener)> = self
            .state
            .borrow()
            .observers
            .iter()
            .filter(|(_, target, _)| *target == sample.target)
            .map(|(id, _, listener)| (*id, Rc::clone(listener)))
            .collect();

        if listeners.is_empty() {
            tracing::trace!(target_section = %sample.target, "Intersection for unobserved section");
            return;
        }

        for (id, listener) in listeners {
            if !self
                .state
                .borrow()
                .observers
                .iter()
                .any(|(live, _, _)| *live == id)
            {
                continue;
            }
            if let Ok(mut listener) = listener.try_borrow_mut() {
                (*listener)(sample);
            }
        }
    }

    /// Number of live scroll listeners
    pub fn scroll_listener_count(&self) -> usize {
        self.state.borrow().scroll.len()
    }

    /// Number of live intersection observers across all targets
    pub fn observer_count(&self) -> usize {
        self.state.borrow().observers.len()
    }

    fn release_handle(&self, id: u64, release: fn(&mut HubState, u64)) -> Subscription {
        let weak: Weak<RefCell<HubState>> = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                release(&mut state.borrow_mut(), id);
            }
        })
    }
}

impl ViewportSource for ViewportHub {
    fn on_scroll(&self, listener: Box<dyn FnMut(ScrollSample)>) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.allocate_id();
            state.scroll.push((id, Rc::new(RefCell::new(listener))));
            id
        };
        tracing::debug!(listener = id, "Scroll listener registered");

        self.release_handle(id, |state, id| {
            state.scroll.retain(|(live, _)| *live != id);
            tracing::debug!(listener = id, "Scroll listener released");
        })
    }

    fn observe(
        &self,
        target: SectionId,
        listener: Box<dyn FnMut(IntersectionSample)>,
    ) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.allocate_id();
            state
                .observers
                .push((id, target, Rc::new(RefCell::new(listener))));
            id
        };
        tracing::debug!(observer = id, section = %target, "Intersection observer registered");

        self.release_handle(id, |state, id| {
            state.observers.retain(|(live, _, _)| *live != id);
            tracing::debug!(observer = id, "Intersection observer released");
        })
    }

    fn last_scroll(&self) -> Option<ScrollSample> {
        self.state.borrow().last_scroll
    }
}

impl fmt::Debug for ViewportHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ViewportHub")
            .field("scroll_listeners", &state.scroll.len())
            .field("observers", &state.observers.len())
            .field("last_scroll", &state.last_scroll)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_parse_scroll_message() {
        let event =
            ViewportEvent::from_json(r#"{"kind":"scroll","offset_y":120.5,"viewport_height":900}"#)
                .unwrap();
        assert_eq!(event, ViewportEvent::Scroll(ScrollSample::new(120.5, 900.0)));
    }

    #[test]
    fn test_parse_intersection_message() {
        let event = ViewportEvent::from_json(
            r#"{"kind":"intersection","target":"our-work","ratio":0.25,"is_intersecting":true}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            ViewportEvent::Intersection(IntersectionSample::entering(SectionId::OurWork, 0.25))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_target() {
        let result = ViewportEvent::from_json(
            r#"{"kind":"intersection","target":"gallery","ratio":0.5,"is_intersecting":true}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_dropping_subscription_releases_listener() {
        let hub = ViewportHub::new();
        let calls = Rc::new(Cell::new(0));

        let sub = {
            let calls = Rc::clone(&calls);
            hub.on_scroll(Box::new(move |_| calls.set(calls.get() + 1)))
        };
        assert_eq!(hub.scroll_listener_count(), 1);

        hub.dispatch_scroll(ScrollSample::new(10.0, 800.0));
        drop(sub);
        hub.dispatch_scroll(ScrollSample::new(20.0, 800.0));

        assert_eq!(calls.get(), 1);
        assert_eq!(hub.scroll_listener_count(), 0);
    }

    #[test]
    fn test_intersection_only_reaches_its_target() {
        let hub = ViewportHub::new();
        let seen = Rc::new(Cell::new(0));

        let _sub = {
            let seen = Rc::clone(&seen);
            hub.observe(
                SectionId::Contact,
                Box::new(move |_| seen.set(seen.get() + 1)),
            )
        };

        hub.dispatch_intersection(IntersectionSample::entering(SectionId::Services, 1.0));
        assert_eq!(seen.get(), 0);
        hub.dispatch_intersection(IntersectionSample::entering(SectionId::Contact, 1.0));
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn test_listener_can_release_a_later_listener_mid_dispatch() {
        let hub = ViewportHub::new();
        let second_calls = Rc::new(Cell::new(0));
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let _first = {
            let victim = Rc::clone(&victim);
            hub.on_scroll(Box::new(move |_| {
                victim.borrow_mut().take();
            }))
        };
        let second = {
            let second_calls = Rc::clone(&second_calls);
            hub.on_scroll(Box::new(move |_| second_calls.set(second_calls.get() + 1)))
        };
        *victim.borrow_mut() = Some(second);

        hub.dispatch_scroll(ScrollSample::new(5.0, 800.0));
        assert_eq!(second_calls.get(), 0);
        assert_eq!(hub.scroll_listener_count(), 1);
    }

    #[test]
    fn test_release_after_hub_dropped_is_noop() {
        let hub = ViewportHub::new();
        let sub = hub.on_scroll(Box::new(|_| {}));
        drop(hub);
        sub.cancel();
    }

    #[test]
    fn test_last_scroll_tracks_latest_sample() {
        let hub = ViewportHub::new();
        assert!(hub.last_scroll().is_none());
        hub.dispatch(ViewportEvent::Scroll(ScrollSample::new(42.0, 700.0)));
        assert_eq!(hub.last_scroll(), Some(ScrollSample::new(42.0, 700.0)));
    }

    #[test]
    fn test_detached_subscription_is_inactive() {
        let sub = Subscription::detached();
        assert!(!sub.is_active());
        sub.cancel();
    }
}
