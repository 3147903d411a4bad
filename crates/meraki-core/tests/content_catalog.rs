//! Static content collections: sizes, order and stagger formulas

use std::time::Duration;

use meraki_core::content::{
    staggered, CONTACT_DETAILS, CONTACT_TITLE_BREATHE_DELAY_MS, FOOTER_COLUMN_STAGGER,
    FOOTER_LEGAL_DELAY_MS, FOOTER_QUICK_LINKS, FOOTER_SOCIALS_DELAY_MS, PROCESS_ENTRANCE,
    PROCESS_LOOP, PROCESS_STEPS, PROCESS_TITLE_BREATHE_DELAY_MS, PROJECTS, PROJECT_ENTRANCE,
    PROJECT_TITLE_BREATHE_DELAY_MS, SERVICES, SERVICE_ENTRANCE, SERVICE_LOOP, TESTIMONIALS,
    TESTIMONIALS_TITLE_BREATHE_DELAY_MS, TESTIMONIAL_ENTRANCE, TESTIMONIAL_LOOP,
};
use meraki_core::SectionId;

#[test]
fn test_collection_sizes() {
    assert_eq!(SERVICES.len(), 3);
    assert_eq!(PROJECTS.len(), 3);
    assert_eq!(PROCESS_STEPS.len(), 4);
    assert_eq!(TESTIMONIALS.len(), 4);
}

#[test]
fn test_declared_order_is_display_order() {
    let steps: Vec<_> = PROCESS_STEPS.iter().map(|s| s.number).collect();
    assert_eq!(steps, vec!["01", "02", "03", "04"]);

    let projects: Vec<_> = PROJECTS.iter().map(|p| p.title).collect();
    assert_eq!(
        projects,
        vec![
            "The Zenith Penthouse",
            "Serene Minimalist Villa",
            "Aura Boutique Studio"
        ]
    );

    let names: Vec<_> = TESTIMONIALS.iter().map(|t| t.name).collect();
    assert_eq!(
        names,
        vec!["Arjun Mehta", "Sanya Kapoor", "Vikram Singh", "Priya Sharma"]
    );
}

#[test]
fn test_process_entrance_delays() {
    let delays: Vec<_> = staggered(PROCESS_STEPS, PROCESS_ENTRANCE)
        .map(|(_, _, delay)| delay)
        .collect();
    assert_eq!(
        delays,
        vec![
            Duration::from_millis(100),
            Duration::from_millis(300),
            Duration::from_millis(500),
            Duration::from_millis(700),
        ]
    );
    assert_eq!(PROCESS_ENTRANCE.delay_ms(2), 500);
}

#[test]
fn test_entrance_delays_per_collection() {
    assert_eq!(SERVICE_ENTRANCE.delay_ms(0), 400);
    assert_eq!(SERVICE_ENTRANCE.delay_ms(2), 800);
    assert_eq!(PROJECT_ENTRANCE.delay_ms(0), 500);
    assert_eq!(PROJECT_ENTRANCE.delay_ms(2), 900);
    assert_eq!(TESTIMONIAL_ENTRANCE.delay_ms(0), 300);
    assert_eq!(TESTIMONIAL_ENTRANCE.delay_ms(3), 900);
}

#[test]
fn test_loop_delays_per_collection() {
    assert_eq!(SERVICE_LOOP.css(2), "1000ms");
    assert_eq!(PROCESS_LOOP.css(3), "1800ms");
    assert_eq!(TESTIMONIAL_LOOP.css(1), "800ms");
}

#[test]
fn test_footer_fade_in_sequence() {
    let mut delays: Vec<u64> = (0..4).map(|i| FOOTER_COLUMN_STAGGER.delay_ms(i)).collect();
    delays.push(FOOTER_SOCIALS_DELAY_MS);
    delays.push(FOOTER_LEGAL_DELAY_MS);
    assert_eq!(delays, vec![300, 500, 700, 900, 1000, 1200]);
}

#[test]
fn test_heading_breathe_phases() {
    assert_eq!(PROJECT_TITLE_BREATHE_DELAY_MS, 200);
    assert_eq!(PROCESS_TITLE_BREATHE_DELAY_MS, 300);
    assert_eq!(TESTIMONIALS_TITLE_BREATHE_DELAY_MS, 400);
    assert_eq!(CONTACT_TITLE_BREATHE_DELAY_MS, 400);
}

#[test]
fn test_footer_links_point_at_real_sections() {
    let targets: Vec<_> = FOOTER_QUICK_LINKS.iter().map(|l| l.target).collect();
    assert_eq!(
        targets,
        vec![
            SectionId::Home,
            SectionId::Studio,
            SectionId::Services,
            SectionId::OurWork,
            SectionId::Contact,
        ]
    );
}

#[test]
fn test_only_location_detail_is_plain_text() {
    let plain: Vec<_> = CONTACT_DETAILS
        .iter()
        .filter(|d| d.href.is_none())
        .map(|d| d.label)
        .collect();
    assert_eq!(plain, vec!["Studio Location"]);
}
