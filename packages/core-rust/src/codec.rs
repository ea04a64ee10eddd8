//! Envelope codec: raw bytes to [`Envelope`] and [`ResponseMessage`] to bytes.
//!
//! The codec validates only the top-level shape. Payload contents are left
//! as raw JSON for the handler that owns them.

use serde_json::Value;

use crate::error::{DecodeError, EncodeError};
use crate::messages::{Envelope, ResponseMessage};

/// Content type of every encoded response.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Stateless conversion between wire bytes and message types.
pub trait EnvelopeCodec: Send + Sync {
    /// Decodes an inbound envelope.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` when the bytes are not well-formed or when
    /// `header.messageType` is missing or not a string.
    fn decode(&self, bytes: &[u8]) -> Result<Envelope, DecodeError>;

    /// Encodes a typed response envelope.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError` if the serializer fails.
    fn encode(&self, message: &ResponseMessage) -> Result<Vec<u8>, EncodeError>;

    /// MIME type written alongside encoded responses.
    fn content_type(&self) -> &'static str;
}

/// JSON implementation of [`EnvelopeCodec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl EnvelopeCodec for JsonCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Envelope, DecodeError> {
        let value: Value = serde_json::from_slice(bytes)?;
        if !value.is_object() {
            return Err(DecodeError::NotAnObject);
        }
        match value.get("header").and_then(|h| h.get("messageType")) {
            Some(Value::String(_)) => {}
            _ => return Err(DecodeError::MissingMessageType),
        }
        Ok(serde_json::from_value(value)?)
    }

    fn encode(&self, message: &ResponseMessage) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(message)?)
    }

    fn content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::messages::{MessageType, QueryIntervalsResponse, Report};

    #[test]
    fn decodes_query_envelope() {
        let bytes = br#"{"header":{"messageType":"OnQueryIntervals"},"onQueryIntervalsMessage":{"startTimet":1,"endTimet":2,"granularityInSeconds":1,"rIds":[]}}"#;
        let envelope = JsonCodec.decode(bytes).unwrap();
        assert_eq!(envelope.message_type(), &MessageType::OnQueryIntervals);
        assert!(envelope.payload().is_some());
    }

    #[test]
    fn unknown_type_is_not_a_decode_error() {
        let envelope = JsonCodec
            .decode(br#"{"header":{"messageType":"OnBogusType"}}"#)
            .unwrap();
        assert_eq!(
            envelope.message_type(),
            &MessageType::Unrecognized("OnBogusType".into())
        );
    }

    #[test]
    fn rejects_invalid_json() {
        let err = JsonCodec.decode(b"{not json").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn rejects_empty_body() {
        let err = JsonCodec.decode(b"").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn rejects_non_object_top_level() {
        let err = JsonCodec.decode(b"[1,2,3]").unwrap_err();
        assert!(matches!(err, DecodeError::NotAnObject));
    }

    #[test]
    fn rejects_missing_header() {
        let err = JsonCodec.decode(br#"{"onErrorMessage":{}}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingMessageType));
    }

    #[test]
    fn rejects_missing_or_non_string_message_type() {
        for body in [
            json!({ "header": {} }),
            json!({ "header": { "messageType": null } }),
            json!({ "header": { "messageType": 7 } }),
            json!({ "header": "OnError" }),
        ] {
            let bytes = serde_json::to_vec(&body).unwrap();
            let err = JsonCodec.decode(&bytes).unwrap_err();
            assert!(
                matches!(err, DecodeError::MissingMessageType),
                "expected MissingMessageType for {body}"
            );
        }
    }

    #[test]
    fn encodes_compact_json() {
        let msg = ResponseMessage::OnQueryIntervalsResponseMessage(QueryIntervalsResponse {
            reports: vec![Report {
                report_intervals: Vec::new(),
            }],
        });
        let bytes = JsonCodec.encode(&msg).unwrap();
        assert_eq!(
            bytes,
            br#"{"onQueryIntervalsResponseMessage":{"reports":[{"reportIntervals":[]}]}}"#
        );
        assert_eq!(JsonCodec.content_type(), "application/json");
    }
}
