//! Featured Projects Section
//!
//! Portfolio grid: one wide feature card over two portrait cards. Titles and
//! locations surface on hover.

use dioxus::prelude::*;
use meraki_core::content::{Project, PROJECTS, PROJECT_ENTRANCE, PROJECT_TITLE_BREATHE_DELAY_MS};
use meraki_core::SectionId;

use super::reveal::{margin_attr, reveal_class, threshold_attr, Motion, SectionEyebrow};
use crate::context::use_reveal;

const SECTION: SectionId = SectionId::OurWork;

#[component]
pub fn FeaturedProjects() -> Element {
    let visible = use_reveal(SECTION);
    let shown = visible();

    rsx! {
        section {
            id: SECTION.anchor(),
            class: "section projects",
            "data-reveal-threshold": threshold_attr(SECTION),
            "data-reveal-margin": margin_attr(SECTION),

            div { class: "section-inner",
                header { class: "section-header",
                    div { class: reveal_class("", Motion::Rise, shown),
                        SectionEyebrow { label: "Our Work".to_string() }
                    }
                    h2 { class: reveal_class("section-title breathe delay-300", Motion::Rise, shown),
                        "Selected Interior Projects"
                    }
                    p { class: reveal_class("section-lede delay-500", Motion::Rise, shown),
                        "A glimpse into our design philosophy through carefully crafted spaces."
                    }
                }

                div { class: "projects-grid",
                    for (index, project) in PROJECTS.iter().enumerate() {
                        ProjectCard {
                            key: "{project.title}",
                            project: *project,
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
fn ProjectCard(project: Project, index: usize, visible: bool) -> Element {
    let entrance = PROJECT_ENTRANCE.css(index);
    let base = format!("project-card {}", project.size.class());

    rsx! {
        article {
            class: reveal_class(&base, Motion::Rise, visible),
            style: "transition-delay: {entrance};",

            img { class: "project-image slow-pan", src: project.image, alt: project.title }
            div { class: "project-shade" }

            div { class: "project-caption",
                span { class: "project-location breathe", "{project.location}" }
                h3 {
                    class: "project-title breathe",
                    style: "animation-delay: {PROJECT_TITLE_BREATHE_DELAY_MS}ms;",
                    "{project.title}"
                }
            }
        }
    }
}
