//! Services Section
//!
//! Three service cards rising in with a 200ms stagger after a 400ms lead-in.

use dioxus::prelude::*;
use meraki_core::content::{Service, SERVICES, SERVICE_ENTRANCE, SERVICE_LOOP};
use meraki_core::{staggered, SectionId};

use super::reveal::{margin_attr, reveal_class, threshold_attr, Motion, SectionEyebrow};
use crate::context::use_reveal;

const SECTION: SectionId = SectionId::Services;

#[component]
pub fn Services() -> Element {
    let visible = use_reveal(SECTION);
    let shown = visible();

    rsx! {
        section {
            id: SECTION.anchor(),
            class: "section services",
            "data-reveal-threshold": threshold_attr(SECTION),
            "data-reveal-margin": margin_attr(SECTION),

            div { class: "section-inner",
                header { class: "section-header",
                    div { class: reveal_class("", Motion::Rise, shown),
                        SectionEyebrow { label: "Our Services".to_string() }
                    }
                    h2 { class: reveal_class("section-title breathe delay-300", Motion::Rise, shown),
                        "Thoughtfully crafted "
                        br { class: "wide-only" }
                        " interior solutions"
                    }
                    p { class: reveal_class("section-lede delay-500", Motion::Rise, shown),
                        "From concept to completion, we design spaces that balance beauty, function and comfort."
                    }
                }

                div { class: "services-grid",
                    for (index, service, _) in staggered(SERVICES, SERVICE_ENTRANCE) {
                        ServiceCard {
                            key: "{service.title}",
                            service: *service,
                            index: index,
                            visible: shown,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ServiceCard(service: Service, index: usize, visible: bool) -> Element {
    let entrance = SERVICE_ENTRANCE.css(index);
    let float = SERVICE_LOOP.css(index);

    rsx! {
        article {
            class: reveal_class("service-card float", Motion::Rise, visible),
            style: "transition-delay: {entrance}; animation-delay: {float};",

            div { class: "service-image-frame",
                img { class: "service-image", src: service.image, alt: service.title }
                div { class: "image-veil" }
            }

            h3 { class: "card-title breathe", style: "animation-delay: {float};",
                "{service.title}"
            }
            p { class: "card-text", "{service.description}" }

            div { class: "card-rule" }
        }
    }
}
