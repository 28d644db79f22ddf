//! Handles onto the page the controllers are allowed to touch.
//!
//! Every handle except [`Browser`] is optional at initialization; a host
//! without a given element simply leaves it out.

use shared::domain::StatusTone;

/// Element whose only job is to display a line of text.
pub trait TextSlot: Send {
    fn set_text(&mut self, text: &str);
}

pub trait ContactForm: Send {
    /// Current named field values, in document order.
    fn entries(&self) -> Vec<(String, String)>;
    /// Restores every field to its empty/default value.
    fn reset(&mut self);
}

pub trait SubmitControl: Send {
    fn set_disabled(&mut self, disabled: bool);
}

pub trait StatusRegion: Send {
    fn set_tone(&mut self, tone: StatusTone);
    fn set_text(&mut self, text: &str);
}

/// Modal container element. Presence is all the gate needs from it.
pub trait ModalElement: Send {
    fn id(&self) -> &str;
}

/// Third-party modal presentation library.
pub trait ModalLibrary: Send {
    fn bind(&self, element: &dyn ModalElement) -> Box<dyn ModalHandle>;
}

pub trait ModalHandle: Send {
    fn hide(&mut self);
}

pub trait AnswerInput: Send {
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
    fn focus(&mut self);
}

/// Window-level operations. Always available.
pub trait Browser: Send {
    /// Full navigation to `path`, leaving the current page.
    fn navigate(&mut self, path: &str);
    /// Blocking alert.
    fn alert(&mut self, message: &str);
}

/// Dispatched submit action.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Key press inside the answer input.
#[derive(Debug)]
pub struct KeyEvent {
    key: String,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default_prevented: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
