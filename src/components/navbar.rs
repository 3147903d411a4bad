//! Navigation Bar Component
//!
//! Fixed header over the page. Transparent with light text while the hero
//! is on screen; solid with dark text once the page scrolls past 50px.

use dioxus::prelude::*;
use meraki_core::content::{nav_href, NAV_ITEMS, NAV_STAGGER, STUDIO_NAME, STUDIO_SUBTITLE};
use meraki_core::SectionId;

use crate::context::use_navbar_scrolled;

/// Fixed navigation bar
///
/// - Left: studio wordmark
/// - Right: in-page anchor links with staggered breathing animation
/// - Mobile: menu glyph (links hidden)
#[component]
pub fn Navbar() -> Element {
    let scrolled = use_navbar_scrolled();

    rsx! {
        nav { class: if scrolled() { "navbar scrolled" } else { "navbar" },
            div { class: "navbar-inner",
                a { class: "navbar-brand breathe", href: SectionId::Home.href(),
                    "{STUDIO_NAME} "
                    span { class: "navbar-brand-sub", "{STUDIO_SUBTITLE}" }
                }

                div { class: "navbar-links",
                    for (index, label) in NAV_ITEMS.iter().enumerate() {
                        a {
                            key: "{label}",
                            class: "navbar-link breathe",
                            href: nav_href(label),
                            style: "animation-delay: {NAV_STAGGER.css(index)};",
                            "{label}"
                            span { class: "navbar-link-underline" }
                        }
                    }
                }

                div { class: "navbar-menu", "aria-hidden": "true",
                    span { class: "navbar-menu-line" }
                    span { class: "navbar-menu-line short" }
                }
            }
        }
    }
}
