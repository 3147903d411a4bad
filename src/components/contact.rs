//! Contact Section
//!
//! Consultation pitch, studio contact details, and the inquiry form. The
//! form is inert: submitting it is absorbed and the entered values stay.

use dioxus::prelude::*;
use meraki_core::content::{
    CONTACT_DETAILS, CONTACT_DETAIL_LOOP, CONTACT_TITLE_BREATHE_DELAY_MS, STUDIO_PHONE_DISPLAY,
};
use meraki_core::{ContactForm, ProjectType, SectionId};

use super::reveal::{margin_attr, reveal_class, threshold_attr, Motion, SectionEyebrow};
use crate::context::use_reveal;

const SECTION: SectionId = SectionId::Contact;

#[component]
pub fn Contact() -> Element {
    let visible = use_reveal(SECTION);
    let shown = visible();

    rsx! {
        section {
            id: SECTION.anchor(),
            class: "section contact",
            "data-reveal-threshold": threshold_attr(SECTION),
            "data-reveal-margin": margin_attr(SECTION),

            div { class: "section-inner",
                header { class: reveal_class("section-header", Motion::Rise, shown),
                    SectionEyebrow { label: "Consultation".to_string() }
                    h2 {
                        class: "section-title breathe",
                        style: "animation-delay: {CONTACT_TITLE_BREATHE_DELAY_MS}ms;",
                        "Ready to redesign "
                        br { class: "wide-only" }
                        " your world?"
                    }
                    p { class: "section-lede",
                        "Let's discuss how Meraki The Art Studio can help you create a stylish and functional space."
                    }
                }

                div { class: "contact-grid",
                    div { class: reveal_class("contact-details delay-500", Motion::FromLeft, shown),
                        p { class: "body-text",
                            "Whether it's your dream home or a business workspace, we bring artistic vision and functional design to the table."
                        }

                        div { class: "contact-list",
                            for (index, detail) in CONTACT_DETAILS.iter().enumerate() {
                                div {
                                    key: "{detail.label}",
                                    class: "contact-item float",
                                    style: "animation-delay: {CONTACT_DETAIL_LOOP.css(index)};",
                                    span { class: "field-label", "{detail.label}" }
                                    if let Some(href) = detail.href {
                                        a { class: "contact-value link", href: href, "{detail.value}" }
                                    } else {
                                        span { class: "contact-value", "{detail.value}" }
                                    }
                                }
                            }
                        }
                    }

                    InquiryForm { visible: shown }
                }
            }
        }
    }
}

/// The consultation form. No handler is wired, so submit only suppresses
/// the default action.
#[component]
fn InquiryForm(visible: bool) -> Element {
    let mut form = use_signal(ContactForm::new);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let outcome = form.read().submit(None);
        tracing::debug!(?outcome, "Inquiry submitted");
    };

    let on_project_type = move |e: FormEvent| {
        if let Err(err) = form.write().select_project_type(&e.value()) {
            tracing::warn!(error = %err, "Ignored project type selection");
        }
    };

    let current = form.read().clone();

    rsx! {
        form {
            class: reveal_class("inquiry-form delay-700", Motion::FromRight, visible),
            onsubmit: on_submit,

            div { class: "field-row",
                label { class: "field",
                    span { class: "field-label", "Name" }
                    input {
                        r#type: "text",
                        class: "field-input",
                        placeholder: "Your full name",
                        value: "{current.name}",
                        oninput: move |e| form.write().set_name(e.value()),
                    }
                }
                label { class: "field",
                    span { class: "field-label", "Email" }
                    input {
                        r#type: "email",
                        class: "field-input",
                        placeholder: "email@example.com",
                        value: "{current.email}",
                        oninput: move |e| form.write().set_email(e.value()),
                    }
                }
            }

            label { class: "field",
                span { class: "field-label", "Phone" }
                input {
                    r#type: "tel",
                    class: "field-input",
                    placeholder: STUDIO_PHONE_DISPLAY,
                    value: "{current.phone}",
                    oninput: move |e| form.write().set_phone(e.value()),
                }
            }

            label { class: "field",
                span { class: "field-label", "Project Type" }
                select {
                    class: "field-input",
                    value: current.project_type.label(),
                    onchange: on_project_type,
                    for choice in ProjectType::ALL {
                        option {
                            key: "{choice.label()}",
                            value: choice.label(),
                            selected: choice == current.project_type,
                            "{choice.label()}"
                        }
                    }
                }
            }

            div { class: "form-actions",
                button { r#type: "submit", class: "btn-solid dark", "Send Inquiry" }
            }
        }
    }
}
