//! Design Process Section
//!
//! Four numbered steps sliding in from the right, 200ms apart, with a thin
//! divider between neighbours on wide screens.

use dioxus::prelude::*;
use meraki_core::content::{
    ProcessStep, PROCESS_ENTRANCE, PROCESS_LOOP, PROCESS_STEPS, PROCESS_TITLE_BREATHE_DELAY_MS,
};
use meraki_core::{staggered, SectionId};

use super::reveal::{margin_attr, reveal_class, threshold_attr, Motion, SectionEyebrow};
use crate::context::use_reveal;

const SECTION: SectionId = SectionId::OurApproach;

#[component]
pub fn DesignProcess() -> Element {
    let visible = use_reveal(SECTION);
    let shown = visible();
    let last = PROCESS_STEPS.len() - 1;

    rsx! {
        section {
            id: SECTION.anchor(),
            class: "section process",
            "data-reveal-threshold": threshold_attr(SECTION),
            "data-reveal-margin": margin_attr(SECTION),

            div { class: "section-inner",
                header { class: reveal_class("section-header centered", Motion::Rise, shown),
                    SectionEyebrow { label: "Our Approach".to_string() }
                    h2 {
                        class: "section-title breathe",
                        style: "animation-delay: {PROCESS_TITLE_BREATHE_DELAY_MS}ms;",
                        "Our Design Philosophy"
                    }
                    p { class: "section-lede",
                        "A thoughtful process that transforms ideas into timeless interior spaces."
                    }
                }

                div { class: "process-grid",
                    for (index, step, _) in staggered(PROCESS_STEPS, PROCESS_ENTRANCE) {
                        ProcessStepCard {
                            key: "{step.number}",
                            step: *step,
                            index: index,
                            visible: shown,
                            is_last: index == last,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProcessStepCard(step: ProcessStep, index: usize, visible: bool, is_last: bool) -> Element {
    let entrance = PROCESS_ENTRANCE.css(index);
    let pulse = PROCESS_LOOP.css(index);

    rsx! {
        div {
            class: reveal_class("process-step", Motion::FromRight, visible),
            style: "transition-delay: {entrance};",

            span { class: "process-number pulse", style: "animation-delay: {pulse};",
                "{step.number}"
            }

            div { class: "float", style: "animation-delay: {pulse};",
                h3 { class: "card-title", "{step.title}" }
                p { class: "card-text narrow", "{step.description}" }
            }

            if !is_last {
                div { class: if visible { "process-divider is-visible" } else { "process-divider" } }
            }
        }
    }
}
