//! Contact and application form submission.
//!
//! Native submission is always prevented. Field values are read by id,
//! validated in `state::forms`, and the outcome is surfaced as a banner.

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::components::banner_stack::Notifier;
use crate::state::banner::BannerKind;
use crate::state::forms::{ApplicationForm, ContactForm, SubmitOutcome, submit_application, submit_contact};
use crate::util::bootstrap;
use crate::util::dom::listen;

const APPLY_MODAL_ID: &str = "applyModal";

pub fn init(document: &Document, notifier: Notifier) {
    init_contact_form(document, notifier);
    init_apply_form(document, notifier);
}

/// Current value of the form control with `id`; empty when absent.
fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        log::debug!("forms: missing field #{id}");
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn find_form(document: &Document, id: &str) -> Option<HtmlFormElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlFormElement>().ok()
}

/// Show the outcome; returns whether the submission was accepted.
fn report(notifier: Notifier, outcome: SubmitOutcome) -> bool {
    match outcome {
        SubmitOutcome::Accepted(message) => {
            notifier.notify(BannerKind::Success, message);
            true
        }
        SubmitOutcome::Rejected(message) => {
            notifier.notify(BannerKind::Error, message);
            false
        }
    }
}

fn init_contact_form(document: &Document, notifier: Notifier) {
    let Some(form) = find_form(document, "contactForm") else {
        log::debug!("forms: no #contactForm on this page");
        return;
    };
    let doc = document.clone();
    let target = form.clone();
    listen(&form, "submit", move |ev: Event| {
        ev.prevent_default();
        let values = ContactForm {
            name: field_value(&doc, "name"),
            email: field_value(&doc, "email"),
            subject: field_value(&doc, "subject"),
            message: field_value(&doc, "message"),
        };
        if report(notifier, submit_contact(&values)) {
            target.reset();
        }
    });
}

fn init_apply_form(document: &Document, notifier: Notifier) {
    let Some(form) = find_form(document, "applyForm") else {
        log::debug!("forms: no #applyForm on this page");
        return;
    };
    let doc = document.clone();
    let target = form.clone();
    listen(&form, "submit", move |ev: Event| {
        ev.prevent_default();
        let values = ApplicationForm {
            name: field_value(&doc, "studentName"),
            email: field_value(&doc, "studentEmail"),
            phone: field_value(&doc, "studentPhone"),
            grade: field_value(&doc, "highSchoolGrade"),
            motivation: field_value(&doc, "motivation"),
        };
        if report(notifier, submit_application(&values)) {
            target.reset();
            match doc.get_element_by_id(APPLY_MODAL_ID) {
                Some(modal) => bootstrap::hide_modal(&modal),
                None => log::debug!("forms: no #{APPLY_MODAL_ID} to close"),
            }
        }
    });
}
