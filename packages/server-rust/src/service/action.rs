//! Outbound actions and the dispatch error taxonomy.

use bytes::Bytes;
use http::StatusCode;
use venlink_core::{DecodeError, EncodeError, PayloadError, ResponseMessage};

/// Body of the 400 response for a discriminant outside the closed set.
pub const UNSUPPORTED_BODY: &str = "Message type not supported";

/// Body of every 500 response. Details go to the log, not the client.
pub const HANDLER_FAULT_BODY: &str = "An error occurred";

/// What a response builder produced, before encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A typed response envelope.
    Message(ResponseMessage),
    /// A bare acknowledgment with an empty body.
    Ack,
}

/// Response body attached to an [`OutboundAction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    Json {
        content_type: &'static str,
        bytes: Bytes,
    },
    Text(String),
}

/// Status code plus optional body handed back to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundAction {
    pub status: StatusCode,
    pub body: Option<ResponseBody>,
}

impl OutboundAction {
    /// 200 with an empty body.
    #[must_use]
    pub fn ack() -> Self {
        Self {
            status: StatusCode::OK,
            body: None,
        }
    }

    /// 200 with an encoded envelope.
    #[must_use]
    pub fn json(content_type: &'static str, bytes: impl Into<Bytes>) -> Self {
        Self {
            status: StatusCode::OK,
            body: Some(ResponseBody::Json {
                content_type,
                bytes: bytes.into(),
            }),
        }
    }

    /// Plain-text diagnostic with the given status.
    #[must_use]
    pub fn text(status: StatusCode, text: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(ResponseBody::Text(text.into())),
        }
    }
}

/// A builder-side failure: the envelope was well-formed but could not be
/// answered.
#[derive(Debug, thiserror::Error)]
pub enum HandlerFault {
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("query asks for {requested} report intervals, limit is {limit}")]
    TooManyIntervals { requested: u64, limit: u64 },
}

/// Every way a dispatch can fail. Each maps to exactly one status code.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("failed to decode envelope: {0}")]
    Decode(#[from] DecodeError),
    #[error("message type not supported: {0}")]
    UnsupportedMessageType(String),
    #[error("handler fault: {0}")]
    HandlerFault(#[from] HandlerFault),
}

impl DispatchError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedMessageType(_) => StatusCode::BAD_REQUEST,
            Self::Decode(_) | Self::HandlerFault(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short diagnostic safe to send to the client.
    #[must_use]
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::UnsupportedMessageType(_) => UNSUPPORTED_BODY,
            Self::Decode(_) | Self::HandlerFault(_) => HANDLER_FAULT_BODY,
        }
    }
}

impl From<DispatchError> for OutboundAction {
    fn from(err: DispatchError) -> Self {
        Self::text(err.status(), err.client_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_type_maps_to_400() {
        let action = OutboundAction::from(DispatchError::UnsupportedMessageType("X".into()));
        assert_eq!(action.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            action.body,
            Some(ResponseBody::Text(UNSUPPORTED_BODY.to_string()))
        );
    }

    #[test]
    fn decode_error_maps_to_500() {
        let action = OutboundAction::from(DispatchError::Decode(DecodeError::NotAnObject));
        assert_eq!(action.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            action.body,
            Some(ResponseBody::Text(HANDLER_FAULT_BODY.to_string()))
        );
    }

    #[test]
    fn handler_fault_maps_to_500() {
        let fault = HandlerFault::from(PayloadError::Missing {
            key: "onQueryIntervalsMessage".into(),
        });
        let err = DispatchError::from(fault);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("onQueryIntervalsMessage"));
    }

    #[test]
    fn interval_limit_fault_maps_to_500_without_details() {
        let err = DispatchError::from(HandlerFault::TooManyIntervals {
            requested: 4_000_000_001,
            limit: 100_000,
        });
        assert!(err.to_string().contains("4000000001"));

        let action = OutboundAction::from(err);
        assert_eq!(action.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            action.body,
            Some(ResponseBody::Text(HANDLER_FAULT_BODY.to_string()))
        );
    }

    #[test]
    fn ack_has_no_body() {
        let action = OutboundAction::ack();
        assert_eq!(action.status, StatusCode::OK);
        assert!(action.body.is_none());
    }
}
