//! Contact form submit behaviour

use std::cell::RefCell;

use meraki_core::{ContactForm, Inquiry, InquiryHandler, ProjectType, SubmitOutcome};

#[derive(Default)]
struct RecordingHandler {
    received: RefCell<Vec<Inquiry>>,
}

impl InquiryHandler for RecordingHandler {
    fn handle(&self, inquiry: Inquiry) {
        self.received.borrow_mut().push(inquiry);
    }
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_name("Asha Rao");
    form.set_email("asha@example.com");
    form.set_phone("+91 90000 00000");
    form.select_project_type("Boutique Office").unwrap();
    form
}

#[test]
fn test_unwired_submit_is_suppressed_and_keeps_fields() {
    let form = filled_form();
    let before = form.clone();

    assert_eq!(form.submit(None), SubmitOutcome::Suppressed);
    assert_eq!(form, before);
}

#[test]
fn test_wired_submit_hands_snapshot() {
    let form = filled_form();
    let handler = RecordingHandler::default();

    assert_eq!(form.submit(Some(&handler)), SubmitOutcome::Handed);

    let received = handler.received.borrow();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].name, "Asha Rao");
    assert_eq!(received[0].project_type, ProjectType::BoutiqueOffice);
    assert_eq!(form.name, "Asha Rao");
}

#[test]
fn test_empty_form_submits_without_validation() {
    let form = ContactForm::new();
    assert_eq!(form.submit(None), SubmitOutcome::Suppressed);
    assert!(form.name.is_empty());
}

#[test]
fn test_inquiry_serializes_for_external_endpoints() {
    let json = serde_json::to_value(filled_form().inquiry()).unwrap();
    assert_eq!(json["email"], "asha@example.com");
    assert_eq!(json["project_type"], "BoutiqueOffice");
}
