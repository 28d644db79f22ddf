//! Terminal-backed page handles.

use page_core::{
    surface::{
        AnswerInput, Browser, ContactForm, ModalElement, ModalHandle, ModalLibrary,
        StatusRegion, SubmitControl, TextSlot,
    },
    PageCapabilities,
};
use shared::domain::StatusTone;
use tracing::debug;

use crate::config::Settings;

pub struct ConsoleYear;

impl TextSlot for ConsoleYear {
    fn set_text(&mut self, text: &str) {
        println!("© {text}");
    }
}

pub struct ConsoleForm {
    fields: Vec<(String, String)>,
}

impl ConsoleForm {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }
}

impl ContactForm for ConsoleForm {
    fn entries(&self) -> Vec<(String, String)> {
        self.fields.clone()
    }

    fn reset(&mut self) {
        for (_, value) in &mut self.fields {
            value.clear();
        }
        debug!("contact form cleared");
    }
}

pub struct ConsoleButton {
    label: &'static str,
}

impl SubmitControl for ConsoleButton {
    fn set_disabled(&mut self, disabled: bool) {
        debug!(button = self.label, disabled, "button state changed");
    }
}

#[derive(Default)]
pub struct ConsoleStatus {
    tone: StatusTone,
}

impl StatusRegion for ConsoleStatus {
    fn set_tone(&mut self, tone: StatusTone) {
        self.tone = tone;
    }

    fn set_text(&mut self, text: &str) {
        println!("[{}] {text}", self.tone.class_name());
    }
}

pub struct ConsoleModal;

impl ModalElement for ConsoleModal {
    fn id(&self) -> &str {
        "secretModal"
    }
}

pub struct ConsoleModalLibrary;

impl ModalLibrary for ConsoleModalLibrary {
    fn bind(&self, element: &dyn ModalElement) -> Box<dyn ModalHandle> {
        Box::new(ConsoleModalHandle {
            id: element.id().to_string(),
        })
    }
}

struct ConsoleModalHandle {
    id: String,
}

impl ModalHandle for ConsoleModalHandle {
    fn hide(&mut self) {
        println!("({} closed)", self.id);
    }
}

pub struct ConsoleAnswer {
    value: String,
}

impl AnswerInput for ConsoleAnswer {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn focus(&mut self) {
        debug!("answer input focused");
    }
}

pub struct ConsoleBrowser {
    origin: String,
}

impl Browser for ConsoleBrowser {
    fn navigate(&mut self, path: &str) {
        println!("-> {}{path}", self.origin.trim_end_matches('/'));
    }

    fn alert(&mut self, message: &str) {
        println!("! {message}");
    }
}

pub struct ConsolePage {
    pub fields: Vec<(String, String)>,
    pub answer: Option<String>,
    pub modal_library: bool,
}

impl ConsolePage {
    pub fn into_capabilities(self, settings: &Settings) -> PageCapabilities {
        let mut caps = PageCapabilities::bare(Box::new(ConsoleBrowser {
            origin: settings.server_url.clone(),
        }));
        caps.hidden_path = settings.hidden_path.clone();
        caps.year = Some(Box::new(ConsoleYear));
        caps.contact_form = Some(Box::new(ConsoleForm::new(self.fields)));
        caps.contact_submit = Some(Box::new(ConsoleButton { label: "contact" }));
        caps.status = Some(Box::new(ConsoleStatus::default()));
        caps.modal = Some(Box::new(ConsoleModal));
        if self.modal_library {
            caps.modal_library = Some(Box::new(ConsoleModalLibrary));
        }
        caps.answer_input = self
            .answer
            .map(|value| Box::new(ConsoleAnswer { value }) as Box<dyn AnswerInput>);
        caps.answer_submit = Some(Box::new(ConsoleButton { label: "secret" }));
        caps
    }
}
