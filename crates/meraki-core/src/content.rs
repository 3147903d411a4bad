//! Static site content
//!
//! Every collection is an ordered, immutable slice; display order is the
//! declared order. Entrance and loop animation offsets are simple functions
//! of an item's index, captured by [`Stagger`].

use std::time::Duration;

use crate::sections::{anchor_slug, SectionId};

/// Linear animation offset: `base + index * step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub base_ms: u64,
    pub step_ms: u64,
}

impl Stagger {
    pub const fn new(base_ms: u64, step_ms: u64) -> Self {
        Self { base_ms, step_ms }
    }

    pub fn delay_ms(&self, index: usize) -> u64 {
        self.base_ms + index as u64 * self.step_ms
    }

    pub fn delay(&self, index: usize) -> Duration {
        Duration::from_millis(self.delay_ms(index))
    }

    /// CSS time value, e.g. `"700ms"`
    pub fn css(&self, index: usize) -> String {
        format!("{}ms", self.delay_ms(index))
    }
}

/// Pair each item with its index and staggered delay, in display order
pub fn staggered<T>(
    items: &[T],
    stagger: Stagger,
) -> impl Iterator<Item = (usize, &T, Duration)> + '_ {
    items
        .iter()
        .enumerate()
        .map(move |(index, item)| (index, item, stagger.delay(index)))
}

// === Studio ===

pub const STUDIO_NAME: &str = "Meraki";
pub const STUDIO_SUBTITLE: &str = "The Art Studio";
pub const STUDIO_EMAIL: &str = "hello@merakiartstudio.com";
pub const STUDIO_PHONE_DISPLAY: &str = "+91 85300 28111";
pub const STUDIO_PHONE_DIAL: &str = "8530028111";
pub const STUDIO_LOCATION: &str = "India";

/// Messaging deep link used by the floating contact button
pub const WHATSAPP_LINK: &str = "https://wa.me/918530028111";

pub const HERO_VIDEO: &str = "Hyper_cinematic_architectural_1080p_202601061.mp4";
pub const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1618221195710-dd6b41faaea6?auto=format&fit=crop&q=80&w=1500";

// === Navigation ===

pub const NAV_ITEMS: &[&str] = &["Our Work", "Services", "The Studio", "Contact"];

/// Breathing animation offset for nav links: `(index + 1) * 200ms`
pub const NAV_STAGGER: Stagger = Stagger::new(200, 200);

/// In-page href for a nav label
pub fn nav_href(label: &str) -> String {
    format!("#{}", anchor_slug(label))
}

// === Services ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Residential Interiors",
        description: "Luxury home interiors designed around lifestyle, comfort and timeless aesthetics.",
        image: "https://images.unsplash.com/photo-1616486338812-3dadae4b4ace?auto=format&fit=crop&q=80&w=800",
    },
    Service {
        title: "Commercial Interiors",
        description: "Workspaces, offices and retail interiors that combine functionality with refined design.",
        image: "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&q=80&w=800",
    },
    Service {
        title: "Turnkey Solutions",
        description: "End-to-end interior execution from design, materials selection to final handover.",
        image: "https://images.unsplash.com/photo-1503387762-592deb58ef4e?auto=format&fit=crop&q=80&w=800",
    },
];

pub const SERVICE_ENTRANCE: Stagger = Stagger::new(400, 200);
pub const SERVICE_LOOP: Stagger = Stagger::new(0, 500);

// === Projects ===

/// Grid footprint of a project card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSize {
    Large,
    Medium,
}

impl ProjectSize {
    pub fn class(&self) -> &'static str {
        match self {
            ProjectSize::Large => "project-card--large",
            ProjectSize::Medium => "project-card--medium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    pub size: ProjectSize,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "The Zenith Penthouse",
        location: "Mumbai",
        image: "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d?auto=format&fit=crop&q=80&w=2000",
        size: ProjectSize::Large,
    },
    Project {
        title: "Serene Minimalist Villa",
        location: "New Delhi",
        image: "https://images.unsplash.com/photo-1600566752355-35792bedcfea?auto=format&fit=crop&q=80&w=1200",
        size: ProjectSize::Medium,
    },
    Project {
        title: "Aura Boutique Studio",
        location: "Lucknow",
        image: "https://images.unsplash.com/photo-1497366811353-6870744d04b2?auto=format&fit=crop&q=80&w=1200",
        size: ProjectSize::Medium,
    },
];

pub const PROJECT_ENTRANCE: Stagger = Stagger::new(500, 200);

// === Design process ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        number: "01",
        title: "Concept & Consultation",
        description: "Understanding client vision, lifestyle and project requirements.",
    },
    ProcessStep {
        number: "02",
        title: "Design & Planning",
        description: "Creating refined layouts, materials and design concepts.",
    },
    ProcessStep {
        number: "03",
        title: "Execution & Detailing",
        description: "Precision-driven execution with close attention to every detail.",
    },
    ProcessStep {
        number: "04",
        title: "Final Styling & Handover",
        description: "Delivering a polished, functional and beautifully finished space.",
    },
];

pub const PROCESS_ENTRANCE: Stagger = Stagger::new(100, 200);
pub const PROCESS_LOOP: Stagger = Stagger::new(0, 600);

// === Testimonials ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub text: &'static str,
    pub name: &'static str,
    pub project: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        text: "Dheeraj Designs transformed our home into a beautifully functional and elegant space. Every detail was handled with precision and a clear understanding of our lifestyle.",
        name: "Arjun Mehta",
        project: "Residential Interior – Lucknow",
    },
    Testimonial {
        text: "The studio's approach to minimalist luxury is unmatched. They managed to create a workspace that is both professional and inspiringly calm. Highly recommended.",
        name: "Sanya Kapoor",
        project: "Boutique Office – New Delhi",
    },
    Testimonial {
        text: "From the first consultation to the final handover, the process was seamless. Their eye for materials and light really brought our vision to life in ways we didn't expect.",
        name: "Vikram Singh",
        project: "Modern Villa – Mumbai",
    },
    Testimonial {
        text: "An absolute pleasure to work with. They have a unique talent for balancing architectural rigor with warm, livable aesthetics. Our penthouse feels like a sanctuary.",
        name: "Priya Sharma",
        project: "Penthouse – Lucknow",
    },
];

pub const TESTIMONIAL_ENTRANCE: Stagger = Stagger::new(300, 200);
pub const TESTIMONIAL_LOOP: Stagger = Stagger::new(0, 800);

// === Contact details ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    /// Link target, or `None` for plain text
    pub href: Option<&'static str>,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        label: "Email",
        value: STUDIO_EMAIL,
        href: Some("mailto:hello@merakiartstudio.com"),
    },
    ContactDetail {
        label: "Phone",
        value: STUDIO_PHONE_DISPLAY,
        href: Some("tel:8530028111"),
    },
    ContactDetail {
        label: "Studio Location",
        value: STUDIO_LOCATION,
        href: None,
    },
];

pub const CONTACT_DETAIL_LOOP: Stagger = Stagger::new(0, 400);

// === Footer ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub target: SectionId,
}

pub const FOOTER_QUICK_LINKS: &[FooterLink] = &[
    FooterLink { label: "Home", target: SectionId::Home },
    FooterLink { label: "About", target: SectionId::Studio },
    FooterLink { label: "Services", target: SectionId::Services },
    FooterLink { label: "Projects", target: SectionId::OurWork },
    FooterLink { label: "Contact", target: SectionId::Contact },
];

pub const FOOTER_SERVICES: &[&str] = &[
    "Residential Interiors",
    "Commercial Interiors",
    "Turnkey Solutions",
    "Design Consultation",
];

pub const SOCIAL_LINKS: &[&str] = &["Instagram", "Facebook", "Pinterest", "Behance"];

/// Fade-in offsets of the four footer columns
pub const FOOTER_COLUMN_STAGGER: Stagger = Stagger::new(300, 200);

/// Fade-in offset of the socials row
pub const FOOTER_SOCIALS_DELAY_MS: u64 = 1000;

/// Fade-in offset of the legal bar
pub const FOOTER_LEGAL_DELAY_MS: u64 = 1200;

// === Heading breathe phases ===
//
// Offsets into the looping `breathe` animation so headings pulse out of step.

pub const PROJECT_TITLE_BREATHE_DELAY_MS: u64 = 200;
pub const PROCESS_TITLE_BREATHE_DELAY_MS: u64 = 300;
pub const TESTIMONIALS_TITLE_BREATHE_DELAY_MS: u64 = 400;
pub const CONTACT_TITLE_BREATHE_DELAY_MS: u64 = 400;

pub const FOOTER_BRAND_LINE: &str =
    "A luxury interior design studio helping homeowners and businesses design stylish, functional and elegant spaces.";
pub const FOOTER_LEGAL_LINE: &str = "© Meraki The Art Studio. All rights reserved.";
pub const FOOTER_MOTTO: &str = "Designing stylish & functional spaces.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_formula() {
        let stagger = Stagger::new(400, 200);
        assert_eq!(stagger.delay_ms(0), 400);
        assert_eq!(stagger.delay_ms(2), 800);
        assert_eq!(stagger.delay(1), Duration::from_millis(600));
        assert_eq!(stagger.css(1), "600ms");
    }

    #[test]
    fn test_staggered_preserves_order() {
        let titles: Vec<_> = staggered(SERVICES, SERVICE_ENTRANCE)
            .map(|(index, service, delay)| (index, service.title, delay.as_millis()))
            .collect();
        assert_eq!(
            titles,
            vec![
                (0, "Residential Interiors", 400),
                (1, "Commercial Interiors", 600),
                (2, "Turnkey Solutions", 800),
            ]
        );
    }

    #[test]
    fn test_nav_hrefs_resolve_to_sections() {
        let hrefs: Vec<_> = NAV_ITEMS.iter().map(|label| nav_href(label)).collect();
        assert_eq!(hrefs, vec!["#our-work", "#services", "#the-studio", "#contact"]);
        for label in NAV_ITEMS {
            assert!(anchor_slug(label).parse::<SectionId>().is_ok());
        }
    }

    #[test]
    fn test_nav_breathing_offsets() {
        assert_eq!(NAV_STAGGER.css(0), "200ms");
        assert_eq!(NAV_STAGGER.css(3), "800ms");
    }

    #[test]
    fn test_project_sizes() {
        assert_eq!(PROJECTS[0].size, ProjectSize::Large);
        assert!(PROJECTS[1..].iter().all(|p| p.size == ProjectSize::Medium));
    }
}
