//! Modal question gating the hidden page.

use shared::{copy, domain::GateAttempt};
use tracing::{debug, info, warn};

use crate::surface::{
    AnswerInput, Browser, KeyEvent, ModalElement, ModalHandle, ModalLibrary, SubmitControl,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GatePhase {
    #[default]
    Closed,
    Shown,
    /// Terminal for the lifetime of the page.
    Navigated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Navigated,
    Rejected,
}

pub struct GateController {
    modal: Box<dyn ModalHandle>,
    input: Option<Box<dyn AnswerInput>>,
    submit_button: Option<Box<dyn SubmitControl>>,
    browser: Box<dyn Browser>,
    hidden_path: String,
    phase: GatePhase,
}

impl GateController {
    /// Installs the gate. Returns `None`, installing nothing, unless both the
    /// modal element and the presentation library are available.
    pub fn install(
        element: Option<Box<dyn ModalElement>>,
        library: Option<Box<dyn ModalLibrary>>,
        input: Option<Box<dyn AnswerInput>>,
        submit_button: Option<Box<dyn SubmitControl>>,
        browser: Box<dyn Browser>,
        hidden_path: impl Into<String>,
    ) -> Option<Self> {
        let (Some(element), Some(library)) = (element, library) else {
            debug!("gate not installed: modal element or library unavailable");
            return None;
        };

        let modal = library.bind(element.as_ref());
        debug!(
            modal = element.id(),
            click = submit_button.is_some(),
            enter = input.is_some(),
            "gate installed"
        );

        Some(Self {
            modal,
            input,
            submit_button,
            browser,
            hidden_path: hidden_path.into(),
            phase: GatePhase::Closed,
        })
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    /// Modal finished opening.
    pub fn on_shown(&mut self) {
        if self.phase == GatePhase::Navigated {
            return;
        }
        self.phase = GatePhase::Shown;
        if let Some(input) = self.input.as_mut() {
            input.focus();
        }
    }

    /// Click on the modal submit button. `None` when no button is bound.
    pub fn on_click(&mut self) -> Option<GateOutcome> {
        self.submit_button.as_ref()?;
        self.check()
    }

    /// Key press inside the answer input. Only Enter triggers a check, and
    /// its default action is suppressed.
    pub fn on_keydown(&mut self, event: &mut KeyEvent) -> Option<GateOutcome> {
        self.input.as_ref()?;
        if event.key() != "Enter" {
            return None;
        }
        event.prevent_default();
        self.check()
    }

    fn check(&mut self) -> Option<GateOutcome> {
        if self.phase == GatePhase::Navigated {
            debug!("gate check ignored after navigation");
            return None;
        }

        let raw = self.input.as_ref().map(|input| input.value());
        let attempt = GateAttempt::from_raw(raw.as_deref());

        if attempt.is_accepted() {
            info!(path = %self.hidden_path, "gate answer accepted");
            self.browser.navigate(&self.hidden_path);
            self.phase = GatePhase::Navigated;
            return Some(GateOutcome::Navigated);
        }

        warn!(answer_len = attempt.as_str().len(), "gate answer rejected");
        self.browser.alert(copy::GATE_REJECTED);
        self.modal.hide();
        if let Some(input) = self.input.as_mut() {
            input.set_value("");
        }
        self.phase = GatePhase::Closed;
        Some(GateOutcome::Rejected)
    }
}

#[cfg(test)]
#[path = "tests/gate_tests.rs"]
mod tests;
