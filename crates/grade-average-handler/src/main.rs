//! Grade average handler - process entry point
//!
//! Runs the gateway invocation loop: read one event frame from stdin, invoke
//! the handler, write the response frame to stdout. Logs go to stderr since
//! stdout carries the response frames.

mod handler;

use anyhow::Result;
use grade_function_sdk::event::Context;
use grade_function_sdk::ipc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,grade_average_handler=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting grade average handler");

    while let Some(event) = ipc::read_event()? {
        let ctx = Context {
            request_id: Uuid::new_v4().to_string(),
        };

        tracing::debug!(request_id = %ctx.request_id, "Invocation received");

        let response = handler::handle(event, &ctx);

        tracing::debug!(
            request_id = %ctx.request_id,
            status = response.status_code,
            "Invocation complete"
        );

        if let Err(e) = ipc::send_response(&response) {
            tracing::error!(request_id = %ctx.request_id, "Failed to send response: {e}");
        }
    }

    tracing::info!("Event stream closed, shutting down");
    Ok(())
}
