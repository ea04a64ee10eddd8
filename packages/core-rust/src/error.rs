//! Error types for the envelope codec and payload extraction.

/// Failure to turn raw request bytes into an [`Envelope`](crate::messages::Envelope).
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The bytes are not well-formed JSON, or do not fit the envelope shape.
    #[error("envelope is not well-formed: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The top-level JSON value is not an object.
    #[error("envelope is not a JSON object")]
    NotAnObject,
    /// `header.messageType` is absent or not a string.
    #[error("envelope is missing header.messageType")]
    MissingMessageType,
}

/// Failure to serialize a response envelope.
///
/// Never produced for the response types this crate builds; it exists
/// because `serde_json` serialization is fallible in its signature.
#[derive(Debug, thiserror::Error)]
#[error("failed to encode response: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

/// Failure to read a typed payload out of an envelope.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("payload `{key}` is missing")]
    Missing { key: String },
    #[error("payload `{key}` is malformed: {source}")]
    Invalid {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
