//! Meraki The Art Studio - Site Core
//!
//! Renderer-independent behaviour of the studio's single-page site.
//!
//! ## Overview
//!
//! The page is a fixed sequence of sections. Each content section owns a
//! one-way reveal latch that flips the first time it scrolls into view; the
//! hero and navbar track values derived from the scroll position. None of
//! them read global window state: they subscribe to a [`ViewportSource`]
//! that the host injects, which makes every behaviour drivable from tests.
//!
//! ## Quick Start
//!
//! ```
//! use meraki_core::{IntersectionSample, RevealSection, SectionId, ViewportHub};
//!
//! let hub = ViewportHub::new();
//! let services = RevealSection::mount_registered(&hub, SectionId::Services, || {});
//! assert!(!services.is_revealed());
//!
//! hub.dispatch_intersection(IntersectionSample::entering(SectionId::Services, 0.3));
//! assert!(services.is_revealed());
//!
//! hub.dispatch_intersection(IntersectionSample::leaving(SectionId::Services));
//! assert!(services.is_revealed());
//! ```

pub mod contact;
pub mod content;
pub mod error;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod viewport;

// Re-exports
pub use contact::{ContactForm, Inquiry, InquiryHandler, ProjectType, SubmitOutcome};
pub use content::{staggered, Stagger};
pub use error::{SiteError, SiteResult};
pub use reveal::{RevealConfig, RevealLatch, RevealSection};
pub use scroll::{hero_opacity, navbar_scrolled, ScrollTracker};
pub use sections::{anchor_slug, SectionId};
pub use viewport::{
    IntersectionSample, ScrollSample, Subscription, ViewportEvent, ViewportHub, ViewportSource,
};
