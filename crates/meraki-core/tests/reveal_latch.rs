//! Reveal latch behaviour against a simulated viewport
//!
//! Drives every reveal-latched section through intersection events the way
//! the host bridge would, and checks the one-way latch contract.

use std::cell::Cell;
use std::rc::Rc;

use meraki_core::{IntersectionSample, RevealConfig, RevealSection, SectionId, ViewportHub};
use proptest::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

fn counting_mount(hub: &ViewportHub, section: SectionId) -> (RevealSection, Rc<Cell<u32>>) {
    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);
    let mounted = RevealSection::mount_registered(hub, section, move || {
        counter.set(counter.get() + 1);
    });
    (mounted, fired)
}

// ============================================================================
// Contract Tests
// ============================================================================

#[test]
fn test_every_section_starts_hidden_and_reveals_once() {
    for section in SectionId::revealing() {
        let hub = ViewportHub::new();
        let (mounted, fired) = counting_mount(&hub, section);
        assert!(!mounted.is_revealed(), "{section} visible on mount");

        let threshold = section.reveal().unwrap().threshold;
        hub.dispatch_intersection(IntersectionSample::entering(section, threshold + 0.05));
        assert!(mounted.is_revealed(), "{section} did not reveal");

        hub.dispatch_intersection(IntersectionSample::entering(section, 1.0));
        assert_eq!(fired.get(), 1, "{section} reveal callback fired twice");
    }
}

#[test]
fn test_exit_events_do_not_reset() {
    let hub = ViewportHub::new();
    let (mounted, _) = counting_mount(&hub, SectionId::Contact);

    hub.dispatch_intersection(IntersectionSample::entering(SectionId::Contact, 0.5));
    hub.dispatch_intersection(IntersectionSample::leaving(SectionId::Contact));
    hub.dispatch_intersection(IntersectionSample::entering(SectionId::Contact, 0.01));

    assert!(mounted.is_revealed());
}

#[test]
fn test_below_threshold_does_not_reveal() {
    let hub = ViewportHub::new();
    let (about, fired) = counting_mount(&hub, SectionId::Studio);

    // About uses 0.2, so a 15% peek is not enough
    hub.dispatch_intersection(IntersectionSample::entering(SectionId::Studio, 0.15));
    assert!(!about.is_revealed());
    assert_eq!(fired.get(), 0);

    hub.dispatch_intersection(IntersectionSample::entering(SectionId::Studio, 0.2));
    assert!(about.is_revealed());
}

#[test]
fn test_sections_latch_independently() {
    let hub = ViewportHub::new();
    let (services, _) = counting_mount(&hub, SectionId::Services);
    let (projects, _) = counting_mount(&hub, SectionId::OurWork);

    hub.dispatch_intersection(IntersectionSample::entering(SectionId::Services, 0.4));

    assert!(services.is_revealed());
    assert!(!projects.is_revealed());
}

#[test]
fn test_unmount_releases_observer_and_freezes_state() {
    let hub = ViewportHub::new();
    let (mounted, fired) = counting_mount(&hub, SectionId::OurApproach);
    let latch = mounted.latch().clone();
    assert_eq!(hub.observer_count(), 1);

    mounted.unmount();
    assert_eq!(hub.observer_count(), 0);

    hub.dispatch_intersection(IntersectionSample::entering(SectionId::OurApproach, 1.0));
    assert!(!latch.is_revealed());
    assert_eq!(fired.get(), 0);
}

#[test]
fn test_missing_element_is_noop() {
    let hub = ViewportHub::new();
    let mounted = RevealSection::mount(&hub, None, RevealConfig::new(0.1), || {
        panic!("reveal callback must not run");
    });

    assert!(!mounted.is_observing());
    assert_eq!(hub.observer_count(), 0);

    hub.dispatch_intersection(IntersectionSample::entering(SectionId::Services, 1.0));
    assert!(!mounted.is_revealed());
    mounted.unmount();
}

// ============================================================================
// Property Tests
// ============================================================================

fn sample_strategy() -> impl Strategy<Value = IntersectionSample> {
    (0.0f64..=1.0, any::<bool>()).prop_map(|(ratio, is_intersecting)| IntersectionSample {
        target: SectionId::Testimonials,
        ratio,
        is_intersecting,
    })
}

proptest! {
    /// Once revealed, no later event sequence hides the section again
    #[test]
    fn test_latch_never_resets(samples in prop::collection::vec(sample_strategy(), 0..40)) {
        let hub = ViewportHub::new();
        let (mounted, fired) = counting_mount(&hub, SectionId::Testimonials);
        let config = SectionId::Testimonials.reveal().unwrap();

        let mut expected = false;
        for sample in samples {
            hub.dispatch_intersection(sample);
            expected |= config.is_crossed_by(&sample);
            prop_assert_eq!(mounted.is_revealed(), expected);
        }
        prop_assert_eq!(fired.get(), u32::from(expected));
    }
}
