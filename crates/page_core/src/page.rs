//! Page-load wiring: year stamp plus the two independent controllers.

use std::sync::Arc;

use chrono::{Datelike, Local};
use shared::protocol::HIDDEN_PAGE_PATH;
use tracing::debug;

use crate::{
    form::FormController,
    gate::GateController,
    surface::{
        AnswerInput, Browser, ContactForm, ModalElement, ModalLibrary, StatusRegion,
        SubmitControl, TextSlot,
    },
    transport::ContactTransport,
};

/// Handles found on the page. Anything the host cannot provide stays `None`.
pub struct PageCapabilities {
    pub year: Option<Box<dyn TextSlot>>,
    pub contact_form: Option<Box<dyn ContactForm>>,
    pub contact_submit: Option<Box<dyn SubmitControl>>,
    pub status: Option<Box<dyn StatusRegion>>,
    pub modal: Option<Box<dyn ModalElement>>,
    pub modal_library: Option<Box<dyn ModalLibrary>>,
    pub answer_input: Option<Box<dyn AnswerInput>>,
    pub answer_submit: Option<Box<dyn SubmitControl>>,
    pub browser: Box<dyn Browser>,
    pub hidden_path: String,
}

impl PageCapabilities {
    /// A page with no optional elements at all.
    pub fn bare(browser: Box<dyn Browser>) -> Self {
        Self {
            year: None,
            contact_form: None,
            contact_submit: None,
            status: None,
            modal: None,
            modal_library: None,
            answer_input: None,
            answer_submit: None,
            browser,
            hidden_path: HIDDEN_PAGE_PATH.to_string(),
        }
    }
}

pub struct PageControllers {
    pub form: FormController,
    pub gate: Option<GateController>,
}

pub fn initialize(
    capabilities: PageCapabilities,
    transport: Arc<dyn ContactTransport>,
) -> PageControllers {
    let PageCapabilities {
        year,
        contact_form,
        contact_submit,
        status,
        modal,
        modal_library,
        answer_input,
        answer_submit,
        browser,
        hidden_path,
    } = capabilities;

    if let Some(mut slot) = year {
        stamp_year(slot.as_mut(), Local::now().year());
    }

    let form = FormController::new(contact_form, contact_submit, status, transport);
    debug!(bound = form.is_bound(), "contact form controller ready");

    let gate = GateController::install(
        modal,
        modal_library,
        answer_input,
        answer_submit,
        browser,
        hidden_path,
    );

    PageControllers { form, gate }
}

pub fn stamp_year(slot: &mut dyn TextSlot, year: i32) {
    slot.set_text(&year.to_string());
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
