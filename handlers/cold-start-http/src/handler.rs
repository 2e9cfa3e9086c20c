//! Cold-start reporting handler
//!
//! Answers `"true"` to the first invocation it sees and `"false"` to every
//! invocation after that. The process builds exactly one [`ColdStart`] and
//! registers it with the runtime, so the answer tells a caller whether it hit
//! a fresh process or a reused one.

use std::sync::atomic::{AtomicBool, Ordering};

use faas_sdk::prelude::*;

/// Handler holding the cold-start flag
///
/// The flag moves from cold to warm exactly once. The swap is atomic, so
/// even racing first invocations on different threads see a single `"true"`.
#[derive(Debug)]
pub struct ColdStart {
    is_cold: AtomicBool,
}

impl ColdStart {
    /// Create a handler in the cold state
    pub fn new() -> Self {
        Self {
            is_cold: AtomicBool::new(true),
        }
    }

    /// Whether the next invocation will report a cold start
    pub fn is_cold(&self) -> bool {
        self.is_cold.load(Ordering::Acquire)
    }

    /// Report the current state and mark the process warm
    pub fn handle(&self, ctx: &Context, _body: &str) -> StructuredResponse {
        let was_cold = self.is_cold.swap(false, Ordering::AcqRel);
        if was_cold {
            tracing::info!(request_id = %ctx.request_id, "Cold start");
        }
        StructuredResponse::text(was_cold.to_string())
    }
}

impl Default for ColdStart {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for ColdStart {
    fn invoke(&self, ctx: Context, body: String) -> BoxFuture<'static, Result<StructuredResponse, HandlerError>> {
        let response = self.handle(&ctx, &body);
        Box::pin(std::future::ready(Ok(response)))
    }
}
