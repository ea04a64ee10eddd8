//! Inbound envelope types shared by every message.
//!
//! An envelope is a JSON object with a `header.messageType` discriminant and
//! one payload field whose name is derived from the discriminant
//! (`OnQueryIntervals` -> `onQueryIntervalsMessage`). Everything except the
//! discriminant is kept as raw JSON so that unknown or extra fields never
//! cause a decode failure; handlers parse the payload they need on demand.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::PayloadError;

// ---------------------------------------------------------------------------
// MessageType
// ---------------------------------------------------------------------------

/// Discriminant carried in `header.messageType`.
///
/// Matching is exact and case-sensitive. Any other string decodes to
/// `Unrecognized` rather than failing, so the dispatcher can answer with a
/// "not supported" response instead of treating the envelope as malformed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageType {
    OnRegisterReports,
    OnQueryIntervals,
    OnEventIntervalStart,
    OnEventComplete,
    OnError,
    /// A discriminant outside the closed set, kept verbatim.
    Unrecognized(String),
}

impl MessageType {
    /// Wire name of this message type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::OnRegisterReports => "OnRegisterReports",
            Self::OnQueryIntervals => "OnQueryIntervals",
            Self::OnEventIntervalStart => "OnEventIntervalStart",
            Self::OnEventComplete => "OnEventComplete",
            Self::OnError => "OnError",
            Self::Unrecognized(name) => name,
        }
    }

    /// Returns `false` only for [`MessageType::Unrecognized`].
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Name of the envelope field holding this type's payload.
    ///
    /// The first character is lowercased and `Message` is appended.
    #[must_use]
    pub fn payload_key(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!("{}{}Message", first.to_lowercase(), chars.as_str()),
            None => "Message".to_string(),
        }
    }
}

impl From<&str> for MessageType {
    fn from(name: &str) -> Self {
        match name {
            "OnRegisterReports" => Self::OnRegisterReports,
            "OnQueryIntervals" => Self::OnQueryIntervals,
            "OnEventIntervalStart" => Self::OnEventIntervalStart,
            "OnEventComplete" => Self::OnEventComplete,
            "OnError" => Self::OnError,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for MessageType {
    fn from(name: String) -> Self {
        match Self::from(name.as_str()) {
            Self::Unrecognized(_) => Self::Unrecognized(name),
            known => known,
        }
    }
}

impl From<MessageType> for String {
    fn from(message_type: MessageType) -> Self {
        match message_type {
            MessageType::Unrecognized(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Header / Envelope
// ---------------------------------------------------------------------------

/// Envelope header. Fields other than `messageType` are preserved untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub message_type: MessageType,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Inbound message envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub header: Header,
    /// Every top-level field except `header`, including the payload.
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl Envelope {
    /// Creates an envelope with the given discriminant and no payload.
    #[must_use]
    pub fn new(message_type: MessageType) -> Self {
        Self {
            header: Header {
                message_type,
                extra: Map::new(),
            },
            body: Map::new(),
        }
    }

    /// Stores `payload` under the key derived from the message type.
    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        let key = self.header.message_type.payload_key();
        self.body.insert(key, payload);
        self
    }

    #[must_use]
    pub fn message_type(&self) -> &MessageType {
        &self.header.message_type
    }

    /// Raw payload for this envelope's message type, if present.
    #[must_use]
    pub fn payload(&self) -> Option<&Value> {
        self.body.get(&self.header.message_type.payload_key())
    }

    /// Parses the payload into a typed structure.
    ///
    /// # Errors
    ///
    /// Returns `PayloadError::Missing` when the payload field is absent and
    /// `PayloadError::Invalid` when it does not match `T`.
    pub fn parse_payload<T: DeserializeOwned>(&self) -> Result<T, PayloadError> {
        let key = self.header.message_type.payload_key();
        let payload = self
            .body
            .get(&key)
            .ok_or_else(|| PayloadError::Missing { key: key.clone() })?;
        T::deserialize(payload).map_err(|source| PayloadError::Invalid { key, source })
    }
}
