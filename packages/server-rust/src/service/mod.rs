//! Message handling pipeline.
//!
//! 1. **Decoding** (`venlink_core::codec`): bytes -> `Envelope`
//! 2. **Dispatch** (`dispatcher`): `Envelope` -> builder, by `MessageType`
//! 3. **Building** (`builders`): one response builder per message type
//! 4. **Actions** (`action`): status code + optional body for the transport

pub mod action;
pub mod builders;
pub mod dispatcher;

pub use action::{
    DispatchError, HandlerFault, OutboundAction, Reply, ResponseBody, HANDLER_FAULT_BODY,
    UNSUPPORTED_BODY,
};
pub use dispatcher::{MessageDispatcher, DEFAULT_MAX_REPORT_INTERVALS};
