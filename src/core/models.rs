//! Response payload types for the LibInsult service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Parsed `json`-format response body.
///
/// The service always reports `error`; `error_message` accompanies a true
/// `error`, and `insult` a false one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsultPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insult: Option<String>,

    pub error: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<InsultArgs>,
}

/// Echo of the request arguments the service expanded the template with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InsultArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// The service echoes further keys (who, plural, ...) depending on the
    /// request; kept so raw output stays faithful to the wire payload.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Raw fetch result, shaped by the requested format.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInsult {
    /// Undecoded html or txt body.
    Text(String),
    /// Parsed json body, service-reported error fields included as-is.
    Json(InsultPayload),
}

impl RawInsult {
    /// The text body, if this was an html or txt fetch.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(body) => Some(body),
            Self::Json(_) => None,
        }
    }

    /// The parsed payload, if this was a json fetch.
    #[must_use]
    pub const fn as_json(&self) -> Option<&InsultPayload> {
        match self {
            Self::Json(payload) => Some(payload),
            Self::Text(_) => None,
        }
    }
}
