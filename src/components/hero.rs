//! Hero Component
//!
//! Full-viewport intro panel over a looping video. Its content fades out as
//! the user scrolls past it.

use dioxus::prelude::*;
use meraki_core::content::{HERO_VIDEO, STUDIO_NAME, STUDIO_SUBTITLE};
use meraki_core::SectionId;

use crate::context::use_hero_opacity;

#[component]
pub fn Hero() -> Element {
    let opacity = use_hero_opacity();

    rsx! {
        section { id: SectionId::Home.anchor(), class: "hero",
            // Background video
            div { class: "hero-media",
                div { class: "hero-media-fade",
                    video {
                        class: "hero-video",
                        autoplay: true,
                        muted: true,
                        r#loop: true,
                        playsinline: true,
                        "disablepictureinpicture": "true",
                        source { src: HERO_VIDEO, r#type: "video/mp4" }
                        "Your browser does not support the video tag."
                    }
                }
                div { class: "hero-overlay" }
            }

            div { class: "hero-content", style: "opacity: {opacity};",
                div { class: "hero-copy breathe",
                    p { class: "hero-kicker fade-up", "100+ Projects Delivered Globally" }

                    h1 { class: "hero-title fade-up delay-100",
                        "{STUDIO_NAME}"
                        br {}
                        span { class: "hero-title-sub", "{STUDIO_SUBTITLE}" }
                    }

                    p { class: "hero-lede fade-up delay-200",
                        "Helping homeowners and businesses design stylish, functional and artistic spaces that inspire."
                    }

                    div { class: "hero-actions",
                        a { class: "btn-solid scale-in delay-300", href: SectionId::OurWork.href(),
                            "Explore Our Projects"
                        }
                        a { class: "btn-underline fade-up delay-400", href: SectionId::Contact.href(),
                            "Start Consultation"
                        }
                    }
                }
            }

            // Scroll indicator
            div { class: "scroll-indicator",
                span { class: "scroll-indicator-label breathe", "Scroll" }
                div { class: "scroll-indicator-track",
                    div { class: "scroll-indicator-bar" }
                }
            }
        }
    }
}
