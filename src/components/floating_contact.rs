//! Floating Contact Button
//!
//! Persistent WhatsApp shortcut pinned above all content.

use dioxus::prelude::*;
use meraki_core::content::WHATSAPP_LINK;

#[component]
pub fn FloatingContact() -> Element {
    rsx! {
        a {
            class: "floating-contact",
            href: WHATSAPP_LINK,
            target: "_blank",
            rel: "noopener noreferrer",
            "aria-label": "Chat with the studio on WhatsApp",

            // Chat bubble glyph
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "26",
                height: "26",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "1.6",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M7.9 20A9 9 0 1 0 4 16.1L2 22Z" }
            }
        }
    }
}
