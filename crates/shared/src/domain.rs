use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Answer that opens the hidden page. Cosmetic gate, not a credential.
pub const ACCEPTED_GATE_ANSWER: &str = "2";

/// Field values captured from the contact form at the instant of submission.
///
/// The snapshot is owned, so edits made to the form while a request is in
/// flight never reach the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSubmission(BTreeMap<String, String>);

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormSubmission
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        // Later duplicates win, matching how a form's entries collapse into one object.
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    Success,
    Failure(String),
}

impl SubmitResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl UiState {
    /// Whether the submit control should be enabled in this state.
    pub fn accepts_input(&self) -> bool {
        !matches!(self, Self::Submitting)
    }
}

impl From<SubmitResult> for UiState {
    fn from(value: SubmitResult) -> Self {
        match value {
            SubmitResult::Success => Self::Succeeded,
            SubmitResult::Failure(message) => Self::Failed(message),
        }
    }
}

/// Visual tone of the status region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusTone {
    #[default]
    Neutral,
    Success,
    Error,
}

impl StatusTone {
    pub fn class_name(self) -> &'static str {
        match self {
            StatusTone::Neutral => "toast",
            StatusTone::Success => "toast success",
            StatusTone::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateAttempt(String);

impl GateAttempt {
    /// Builds an attempt from raw input text; `None` stands for a missing input.
    pub fn from_raw(raw: Option<&str>) -> Self {
        Self(raw.unwrap_or_default().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_accepted(&self) -> bool {
        self.0 == ACCEPTED_GATE_ANSWER
    }
}
