//! VEN message endpoint handler.
//!
//! Every path without a dedicated route lands here, as does every non-GET
//! request to the health routes. The method is checked before the body is
//! read; only POST bodies are buffered and handed to the dispatcher.

use axum::extract::{FromRequest, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use tracing::debug;

use super::AppState;
use crate::service::{OutboundAction, ResponseBody};

/// A request used a method other than POST.
#[derive(Debug, thiserror::Error)]
#[error("Only POST allowed")]
pub struct TransportMethodError {
    pub method: Method,
}

impl IntoResponse for TransportMethodError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

impl IntoResponse for OutboundAction {
    fn into_response(self) -> Response {
        match self.body {
            None => self.status.into_response(),
            Some(ResponseBody::Json {
                content_type,
                bytes,
            }) => (self.status, [(CONTENT_TYPE, content_type)], bytes).into_response(),
            Some(ResponseBody::Text(text)) => (self.status, text).into_response(),
        }
    }
}

/// Accepts a POSTed envelope and answers with the dispatcher's action.
///
/// A body over the configured limit is answered 413 without dispatching.
pub async fn message_handler(State(state): State<AppState>, request: Request) -> Response {
    if request.method() != Method::POST {
        let method = request.method().clone();
        debug!(%method, "rejected non-POST request");
        return TransportMethodError { method }.into_response();
    }

    let guard = state.shutdown.admit_message();
    let response = match Bytes::from_request(request, &state).await {
        Ok(body) => state.dispatcher.handle(&body).into_response(),
        Err(rejection) => {
            debug!(error = %rejection, "failed to read message body");
            rejection.into_response()
        }
    };
    guard.settle(response.status());
    response
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};

    use super::*;
    use crate::network::handlers::health::tests::test_state;

    fn request(method: Method, body: &'static str) -> Request {
        axum::http::Request::builder()
            .method(method)
            .uri("/")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn get_is_rejected_before_dispatch() {
        let state = test_state();
        let response = message_handler(
            State(state.clone()),
            request(Method::GET, r#"{"header":{"messageType":"OnRegisterReports"}}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Only POST allowed");
        // Never admitted, so nothing was tallied.
        assert_eq!(state.shutdown.tally().rejected, 0);
    }

    #[tokio::test]
    async fn post_is_dispatched_and_tallied() {
        let state = test_state();
        let response = message_handler(
            State(state.clone()),
            request(Method::POST, r#"{"header":{"messageType":"OnEventComplete"}}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.is_empty());

        let tally = state.shutdown.tally();
        assert_eq!(tally.in_flight, 0);
        assert_eq!(tally.answered, 1);
    }

    #[tokio::test]
    async fn unsupported_type_is_tallied_as_rejected() {
        let state = test_state();
        let response = message_handler(
            State(state.clone()),
            request(Method::POST, r#"{"header":{"messageType":"OnBogusType"}}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.shutdown.tally().rejected, 1);
    }

    #[tokio::test]
    async fn json_action_sets_content_type() {
        let response = OutboundAction::json("application/json", b"{}".to_vec()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(body_text(response).await, "{}");
    }

    #[tokio::test]
    async fn text_action_is_plain_text() {
        let response =
            OutboundAction::text(StatusCode::BAD_REQUEST, "Message type not supported")
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers()[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(body_text(response).await, "Message type not supported");
    }
}
