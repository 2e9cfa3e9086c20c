//! The handler contract between functions and the invocation runtime
//!
//! A handler takes the invocation [`Context`] and the request body and yields a
//! [`StructuredResponse`], possibly asynchronously. Plain functions and
//! closures are handlers as long as they return either a response or a
//! `Result<StructuredResponse, HandlerError>`.
//!
//! # Example
//!
//! ```ignore
//! use faas_sdk::prelude::*;
//!
//! // Synchronous, infallible
//! pub fn handle(_ctx: &Context, _body: &str) -> StructuredResponse {
//!     StructuredResponse::text("")
//! }
//!
//! // Suspending
//! let handler = service_fn(|_ctx: Context, body: String| async move {
//!     Ok::<_, HandlerError>(StructuredResponse::text(body))
//! });
//! ```

use std::future::Future;
use std::pin::Pin;

use crate::{Context, HandlerError, StructuredResponse};

/// Type alias for boxed future returned by handlers
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Static contract of a synchronous, infallible HTTP function.
///
/// ```ignore
/// let _: HttpFunction = handle;
/// ```
pub type HttpFunction = fn(&Context, &str) -> StructuredResponse;

/// A unit of deployable logic the runtime can invoke.
pub trait Handler: Send + Sync + 'static {
    /// Invoke the handler for one request.
    fn invoke(&self, ctx: Context, body: String) -> BoxFuture<'static, Result<StructuredResponse, HandlerError>>;
}

/// Return types a synchronous handler may produce.
pub trait IntoHandlerResult {
    fn into_handler_result(self) -> Result<StructuredResponse, HandlerError>;
}

impl IntoHandlerResult for StructuredResponse {
    fn into_handler_result(self) -> Result<StructuredResponse, HandlerError> {
        Ok(self)
    }
}

impl IntoHandlerResult for Result<StructuredResponse, HandlerError> {
    fn into_handler_result(self) -> Result<StructuredResponse, HandlerError> {
        self
    }
}

impl<F, R> Handler for F
where
    F: Fn(&Context, &str) -> R + Send + Sync + 'static,
    R: IntoHandlerResult,
{
    fn invoke(&self, ctx: Context, body: String) -> BoxFuture<'static, Result<StructuredResponse, HandlerError>> {
        // Runs to completion before the future is even polled.
        let result = self(&ctx, &body).into_handler_result();
        Box::pin(std::future::ready(result))
    }
}

/// Handler built from an async closure, see [`service_fn`].
#[derive(Clone, Copy, Debug)]
pub struct ServiceFn<F> {
    f: F,
}

/// Adapt an async function taking owned arguments into a [`Handler`].
pub fn service_fn<F, Fut>(f: F) -> ServiceFn<F>
where
    F: Fn(Context, String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<StructuredResponse, HandlerError>> + Send + 'static,
{
    ServiceFn { f }
}

impl<F, Fut> Handler for ServiceFn<F>
where
    F: Fn(Context, String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<StructuredResponse, HandlerError>> + Send + 'static,
{
    fn invoke(&self, ctx: Context, body: String) -> BoxFuture<'static, Result<StructuredResponse, HandlerError>> {
        Box::pin((self.f)(ctx, body))
    }
}
