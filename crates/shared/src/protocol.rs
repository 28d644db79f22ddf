use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const CONTACT_PATH: &str = "/api/contact";
pub const HIDDEN_PAGE_PATH: &str = "/insider";

/// Acknowledgement returned by the contact endpoint.
///
/// Only a literal JSON `true` in `ok` counts as accepted. `error` and
/// `message` are kept only when they are non-empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAck {
    #[serde(default)]
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactAck {
    /// Parses a response body. Anything that is not a JSON object reads as an
    /// empty mapping, which is an unacknowledged reply.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => Self::from_map(&map),
            _ => Self::default(),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let text = |key: &str| {
            map.get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Self {
            ok: matches!(map.get("ok"), Some(Value::Bool(true))),
            error: text("error"),
            message: text("message"),
        }
    }

    /// Server-supplied failure reason, `error` preferred over `message`.
    pub fn reason(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}
