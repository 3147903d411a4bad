//! Scroll-triggered reveal latch
//!
//! Each content section plays its entrance animation once, the first time
//! enough of it scrolls into view. The latch is one-way: scrolling back up
//! never hides the section again.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::sections::SectionId;
use crate::viewport::{IntersectionSample, Subscription, ViewportSource};

/// One-way visibility flag owned by a single section instance.
///
/// Clones share the same flag.
#[derive(Clone, Default)]
pub struct RevealLatch {
    revealed: Rc<Cell<bool>>,
}

impl RevealLatch {
    /// A fresh, hidden latch
    pub fn initialize() -> Self {
        Self::default()
    }

    /// Reveal the latch and return its state, which is always `true`.
    ///
    /// Calling it again changes nothing.
    pub fn reveal(&self) -> bool {
        self.revealed.set(true);
        true
    }

    /// Reveal the latch, reporting whether this call is the one that
    /// newly revealed it.
    pub fn reveal_once(&self) -> bool {
        !self.revealed.replace(true)
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed.get()
    }
}

impl fmt::Debug for RevealLatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RevealLatch").field(&self.is_revealed()).finish()
    }
}

const RATIO_TOLERANCE: f64 = 1e-3;

/// Intersection settings for one section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Visible fraction at which the section reveals
    pub threshold: f64,
    /// Bottom root margin in pixels, negative shrinks the viewport
    pub root_margin_bottom_px: i32,
}

impl RevealConfig {
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin_bottom_px: 0,
        }
    }

    pub const fn with_root_margin_bottom(mut self, px: i32) -> Self {
        self.root_margin_bottom_px = px;
        self
    }

    /// Whether `sample` crosses this threshold.
    ///
    /// Hosts report the ratio at which they fired the crossing, which can
    /// land a hair under the threshold, so a small tolerance applies.
    pub fn is_crossed_by(&self, sample: &IntersectionSample) -> bool {
        sample.is_intersecting && sample.ratio + RATIO_TOLERANCE >= self.threshold
    }

    /// CSS `rootMargin` string for the host's observer
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.root_margin_bottom_px)
    }
}

/// A reveal latch bound to a viewport source for the life of a section.
///
/// Dropping the section (or calling [`RevealSection::unmount`]) releases its
/// observer.
#[derive(Debug)]
pub struct RevealSection {
    latch: RevealLatch,
    config: Option<RevealConfig>,
    subscription: Subscription,
}

impl RevealSection {
    /// Register an observer for `element` and latch on its first crossing.
    ///
    /// `element` is `None` when the section's root element is not in the
    /// document. Registration is then skipped and the latch stays hidden.
    /// `on_reveal` runs exactly once, when the latch flips.
    pub fn mount<S, F>(
        source: &S,
        element: Option<SectionId>,
        config: RevealConfig,
        on_reveal: F,
    ) -> Self
    where
        S: ViewportSource + ?Sized,
        F: FnOnce() + 'static,
    {
        let latch = RevealLatch::initialize();

        let Some(target) = element else {
            tracing::debug!("Reveal section has no element, observer skipped");
            return Self {
                latch,
                config: None,
                subscription: Subscription::detached(),
            };
        };

        let mut on_reveal = Some(on_reveal);
        let listener_latch = latch.clone();
        let subscription = source.observe(
            target,
            Box::new(move |sample: IntersectionSample| {
                if !config.is_crossed_by(&sample) {
                    return;
                }
                if listener_latch.reveal_once() {
                    tracing::debug!(section = %target, ratio = sample.ratio, "Section revealed");
                    if let Some(callback) = on_reveal.take() {
                        callback();
                    }
                }
            }),
        );

        Self {
            latch,
            config: Some(config),
            subscription,
        }
    }

    /// Mount using the section's registered configuration.
    ///
    /// Sections without a reveal configuration mount detached.
    pub fn mount_registered<S, F>(source: &S, section: SectionId, on_reveal: F) -> Self
    where
        S: ViewportSource + ?Sized,
        F: FnOnce() + 'static,
    {
        match section.reveal() {
            Some(config) => Self::mount(source, Some(section), config, on_reveal),
            None => Self {
                latch: RevealLatch::initialize(),
                config: None,
                subscription: Subscription::detached(),
            },
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.latch.is_revealed()
    }

    pub fn latch(&self) -> &RevealLatch {
        &self.latch
    }

    pub fn config(&self) -> Option<RevealConfig> {
        self.config
    }

    /// Whether an observer is registered with the source
    pub fn is_observing(&self) -> bool {
        self.subscription.is_active()
    }

    /// Release the observer. The latch value is left as it was.
    pub fn unmount(self) {
        self.subscription.cancel();
    }
}
