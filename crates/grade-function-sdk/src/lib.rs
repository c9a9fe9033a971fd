//! Grade Function SDK - Types and utilities for writing grade service handlers
//!
//! This crate provides the core types that handlers use to interact with the
//! hosting gateway: the invocation event helpers, the response envelope, the
//! handler error model, and the stdio IPC framing.

pub mod error;
pub mod event;
pub mod ipc;
pub mod response;

pub mod prelude {
    //! Common imports for grade service handlers
    pub use crate::error::HandlerError;
    pub use crate::event::{self, Context};
    pub use crate::ipc::{read_event, send_response};
    pub use crate::response::Response;
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use error::HandlerError;
pub use event::Context;
pub use response::Response;
