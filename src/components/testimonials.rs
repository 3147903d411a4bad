//! Testimonials Section
//!
//! Client quotes in a two-column grid. The observer's bottom root margin is
//! pulled in by 100px so the cards start once the section is well inside
//! the viewport.

use dioxus::prelude::*;
use meraki_core::content::{
    Testimonial, TESTIMONIALS, TESTIMONIALS_TITLE_BREATHE_DELAY_MS, TESTIMONIAL_ENTRANCE,
    TESTIMONIAL_LOOP,
};
use meraki_core::SectionId;

use super::reveal::{margin_attr, reveal_class, threshold_attr, Motion, SectionEyebrow};
use crate::context::use_reveal;

const SECTION: SectionId = SectionId::Testimonials;

#[component]
pub fn Testimonials() -> Element {
    let visible = use_reveal(SECTION);
    let shown = visible();

    rsx! {
        section {
            id: SECTION.anchor(),
            class: "section testimonials",
            "data-reveal-threshold": threshold_attr(SECTION),
            "data-reveal-margin": margin_attr(SECTION),

            div { class: "testimonials-watermark breathe", "aria-hidden": "true", "Voices" }

            div { class: "section-inner layered",
                header { class: reveal_class("section-header", Motion::Rise, shown),
                    SectionEyebrow { label: "Testimonials".to_string(), class: "wide-tracking".to_string() }
                    h2 {
                        class: "section-title large breathe",
                        style: "animation-delay: {TESTIMONIALS_TITLE_BREATHE_DELAY_MS}ms;",
                        "Exceptional spaces, "
                        br { class: "wide-only" }
                        " unmatched experiences"
                    }
                    div { class: if shown { "title-rule delay-700 is-visible" } else { "title-rule delay-700" } }
                    p { class: "section-lede soft",
                        "We pride ourselves on the relationships we build. Here is how our clients describe their journey with Dheeraj Designs."
                    }
                }

                div { class: "testimonials-grid",
                    for (index, testimonial) in TESTIMONIALS.iter().enumerate() {
                        TestimonialCard {
                            key: "{testimonial.name}",
                            testimonial: *testimonial,
                            index: index,
                            visible: shown,
                        }
                    }
                }

                div { class: reveal_class("testimonials-cta delay-1500", Motion::Fade, shown),
                    a { class: "cta-drop", href: SectionId::Contact.href(),
                        span { class: "cta-drop-label", "Start Your Project" }
                        div { class: "cta-drop-track",
                            div { class: "scroll-indicator-bar" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial, index: usize, visible: bool) -> Element {
    let entrance = TESTIMONIAL_ENTRANCE.css(index);
    let float = TESTIMONIAL_LOOP.css(index);

    rsx! {
        blockquote {
            class: reveal_class("testimonial-card", Motion::Float, visible),
            style: "transition-delay: {entrance};",

            div { class: "testimonial-bloom" }

            div { class: "testimonial-body",
                div { class: "testimonial-mark", "\u{201C}" }
                p { class: "testimonial-text", "{testimonial.text}" }

                footer { class: "testimonial-author",
                    div { class: "testimonial-rule" }
                    div {
                        span { class: "testimonial-name", "{testimonial.name}" }
                        span { class: "testimonial-project", "{testimonial.project}" }
                    }
                }
            }

            // Looping float only starts after the entrance
            div {
                class: if visible { "testimonial-float float" } else { "testimonial-float" },
                style: "animation-delay: {float};",
            }
        }
    }
}
