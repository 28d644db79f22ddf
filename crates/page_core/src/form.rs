//! Contact form submission lifecycle.

use std::{panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;
use shared::{
    copy,
    domain::{FormSubmission, StatusTone, SubmitResult, UiState},
    protocol::ContactAck,
};
use tracing::{debug, error, info, warn};

use crate::{
    surface::{ContactForm, StatusRegion, SubmitControl, SubmitEvent},
    transport::{ContactTransport, TransportResponse},
};

pub struct FormController {
    form: Option<Box<dyn ContactForm>>,
    submit: Option<Box<dyn SubmitControl>>,
    status: Option<Box<dyn StatusRegion>>,
    transport: Arc<dyn ContactTransport>,
    state: UiState,
}

impl FormController {
    pub fn new(
        form: Option<Box<dyn ContactForm>>,
        submit: Option<Box<dyn SubmitControl>>,
        status: Option<Box<dyn StatusRegion>>,
        transport: Arc<dyn ContactTransport>,
    ) -> Self {
        Self {
            form,
            submit,
            status,
            transport,
            state: UiState::Idle,
        }
    }

    /// Whether a form is attached, i.e. whether submissions can do anything.
    pub fn is_bound(&self) -> bool {
        self.form.is_some()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Handles one submit action end to end.
    ///
    /// Returns `None` when no form is attached. The submit control is
    /// re-enabled before this returns on every path that disabled it.
    pub async fn on_submit(&mut self, event: &mut SubmitEvent) -> Option<SubmitResult> {
        event.prevent_default();

        let Some(form) = self.form.as_mut() else {
            debug!("submit ignored: no contact form attached");
            return None;
        };

        let submission: FormSubmission = form.entries().into_iter().collect();

        if let Some(button) = self.submit.as_mut() {
            button.set_disabled(true);
        }
        if let Some(status) = self.status.as_mut() {
            status.set_text(copy::SENDING);
        }
        self.state = UiState::Submitting;

        let result = deliver(self.transport.as_ref(), &submission).await;

        match &result {
            SubmitResult::Success => {
                info!(fields = submission.len(), "contact submission accepted");
                if let Some(status) = self.status.as_mut() {
                    status.set_tone(StatusTone::Success);
                    status.set_text(copy::SUBMIT_SUCCEEDED);
                }
                form.reset();
            }
            SubmitResult::Failure(message) => {
                warn!(%message, "contact submission rejected");
                if let Some(status) = self.status.as_mut() {
                    status.set_tone(StatusTone::Error);
                    status.set_text(message);
                }
            }
        }
        self.state = UiState::from(result.clone());

        if let Some(button) = self.submit.as_mut() {
            button.set_disabled(false);
        }

        Some(result)
    }
}

async fn deliver(transport: &dyn ContactTransport, submission: &FormSubmission) -> SubmitResult {
    match AssertUnwindSafe(transport.post_contact(submission))
        .catch_unwind()
        .await
    {
        Ok(Ok(response)) => classify_response(&response),
        Ok(Err(err)) => {
            warn!(error = %err, "contact request did not complete");
            SubmitResult::Failure(copy::SUBMIT_FAILED.to_string())
        }
        Err(_) => {
            error!("contact transport panicked");
            SubmitResult::Failure(copy::SUBMIT_FAILED.to_string())
        }
    }
}

/// Success requires both a 2xx status and an explicit `"ok": true` body.
pub fn classify_response(response: &TransportResponse) -> SubmitResult {
    let ack = ContactAck::from_body(&response.body);
    if response.is_success() && ack.ok {
        return SubmitResult::Success;
    }

    debug!(status = response.status, ok = ack.ok, "unacknowledged contact reply");
    SubmitResult::Failure(
        ack.reason()
            .unwrap_or(copy::SUBMIT_FAILED)
            .to_string(),
    )
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
