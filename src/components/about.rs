//! About Section
//!
//! Studio introduction: copy on one side, portrait image on the other.
//! Reveals at 20% visibility, later than the other sections.

use dioxus::prelude::*;
use meraki_core::content::ABOUT_IMAGE;
use meraki_core::SectionId;

use super::reveal::{margin_attr, reveal_class, threshold_attr, Motion, SectionEyebrow};
use crate::context::use_reveal;

const SECTION: SectionId = SectionId::Studio;

#[component]
pub fn About() -> Element {
    let visible = use_reveal(SECTION);
    let shown = visible();

    rsx! {
        section {
            id: SECTION.anchor(),
            class: "section about",
            "data-reveal-threshold": threshold_attr(SECTION),
            "data-reveal-margin": margin_attr(SECTION),

            div { class: "about-grid",
                div { class: reveal_class("about-copy slow", Motion::Fade, shown),
                    SectionEyebrow { label: "About The Studio".to_string() }

                    h2 { class: reveal_class("section-title breathe slow delay-200", Motion::Rise, shown),
                        "Transforming spaces into "
                        br { class: "wide-only" }
                        " works of living art"
                    }

                    div { class: reveal_class("about-body slow delay-500", Motion::Rise, shown),
                        p { class: "body-text",
                            strong { "Meraki The Art Studio" }
                            " is an architectural interior design firm dedicated to helping homeowners and businesses design stylish, functional, and highly personalized environments."
                        }
                        p { class: "body-text",
                            "With over "
                            strong { "100 successful projects" }
                            ", we combine technical precision with an artistic soul, ensuring every corner of your space serves a purpose while exuding elegance."
                        }
                    }

                    div { class: reveal_class("about-cta slow delay-700", Motion::Rise, shown),
                        a { class: "btn-underline dark", href: SectionId::OurApproach.href(),
                            "Explore Our Design Philosophy"
                        }
                    }
                }

                div { class: reveal_class("about-media slower", Motion::Zoom, shown),
                    div { class: "about-frame",
                        img {
                            class: "about-image slow-pan",
                            src: ABOUT_IMAGE,
                            alt: "Luxury Interior Studio View",
                        }
                        div { class: "image-veil" }
                    }
                    div { class: "about-caption",
                        span { "100+ Projects Completed · Artistic Excellence" }
                    }
                }
            }
        }
    }
}
