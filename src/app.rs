use dioxus::prelude::*;
use meraki_core::ViewportHub;

use crate::bridge::use_viewport_bridge;
use crate::components::{
    About, Contact, DesignProcess, FeaturedProjects, FloatingContact, Footer, Hero, Navbar,
    Services, Testimonials,
};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the viewport context, starts the host bridge,
/// and composes the page top to bottom in its fixed order.
#[component]
pub fn App() -> Element {
    let hub = use_context_provider(ViewportHub::new);
    use_viewport_bridge(hub);

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "page",
            Navbar {}
            main {
                Hero {}
                About {}
                Services {}
                FeaturedProjects {}
                DesignProcess {}
                Testimonials {}
                Contact {}
            }
            Footer {}
            FloatingContact {}
        }
    }
}
