//! Footer Component
//!
//! Site map, services, contact info, socials and the legal line. The whole
//! footer reveals once, then its columns fade in 200ms apart.

use dioxus::prelude::*;
use meraki_core::content::{
    CONTACT_DETAILS, FOOTER_BRAND_LINE, FOOTER_COLUMN_STAGGER, FOOTER_LEGAL_DELAY_MS,
    FOOTER_LEGAL_LINE, FOOTER_MOTTO, FOOTER_QUICK_LINKS, FOOTER_SERVICES, FOOTER_SOCIALS_DELAY_MS,
    SOCIAL_LINKS, STUDIO_NAME, STUDIO_SUBTITLE,
};
use meraki_core::SectionId;

use super::reveal::{margin_attr, reveal_class, threshold_attr, Motion};
use crate::context::use_reveal;

const SECTION: SectionId = SectionId::Footer;

#[component]
pub fn Footer() -> Element {
    let visible = use_reveal(SECTION);
    let shown = visible();

    let column = |index: usize| format!("transition-delay: {};", FOOTER_COLUMN_STAGGER.css(index));

    rsx! {
        footer {
            id: SECTION.anchor(),
            class: reveal_class("site-footer slower", Motion::Rise, shown),
            "data-reveal-threshold": threshold_attr(SECTION),
            "data-reveal-margin": margin_attr(SECTION),

            div { class: "section-inner",
                div { class: "footer-grid",
                    div { class: reveal_class("footer-brand", Motion::Fade, shown), style: column(0),
                        h4 { class: "footer-wordmark",
                            "{STUDIO_NAME}"
                            span { class: "footer-wordmark-sub", "{STUDIO_SUBTITLE}" }
                        }
                        p { class: "footer-text", "{FOOTER_BRAND_LINE}" }
                    }

                    div { class: reveal_class("footer-column", Motion::Fade, shown), style: column(1),
                        span { class: "footer-heading", "Quick Links" }
                        for link in FOOTER_QUICK_LINKS {
                            a { key: "{link.label}", class: "footer-link", href: link.target.href(),
                                "{link.label}"
                            }
                        }
                    }

                    div { class: reveal_class("footer-column", Motion::Fade, shown), style: column(2),
                        span { class: "footer-heading", "Services" }
                        for service in FOOTER_SERVICES {
                            a { key: "{service}", class: "footer-link", href: SectionId::Services.href(),
                                "{service}"
                            }
                        }
                    }

                    div { class: reveal_class("footer-column", Motion::Fade, shown), style: column(3),
                        span { class: "footer-heading", "Contact Info" }
                        for detail in CONTACT_DETAILS {
                            div { key: "{detail.label}", class: "footer-contact",
                                span { class: "footer-contact-label", "{detail.label}" }
                                if let Some(href) = detail.href {
                                    a { class: "footer-link", href: href, "{detail.value}" }
                                } else {
                                    span { "{detail.value}" }
                                }
                            }
                        }
                    }
                }

                div { class: reveal_class("footer-socials", Motion::Fade, shown), style: "transition-delay: {FOOTER_SOCIALS_DELAY_MS}ms;",
                    for social in SOCIAL_LINKS {
                        a { key: "{social}", class: "footer-social", href: "#", "{social}" }
                    }
                }

                div { class: reveal_class("footer-bar", Motion::Rise, shown), style: "transition-delay: {FOOTER_LEGAL_DELAY_MS}ms;",
                    p { class: "footer-legal", "{FOOTER_LEGAL_LINE}" }
                    p { class: "footer-motto", "{FOOTER_MOTTO}" }
                }
            }
        }
    }
}
