//! Function SDK - types for writing serverless function handlers
//!
//! This crate defines the contract between a function and the invocation
//! runtime: the per-request [`Context`], the [`StructuredResponse`] a handler
//! returns and the [`Handler`] trait the runtime invokes.

pub mod context;
pub mod error;
pub mod handler;
pub mod response;

pub mod prelude {
    //! Common imports for function handlers
    pub use crate::context::{Context, RequestId};
    pub use crate::error::HandlerError;
    pub use crate::handler::{service_fn, BoxFuture, Handler, HttpFunction};
    pub use crate::response::{StructuredResponse, TEXT_PLAIN};
}

// Re-export key types at crate root
pub use context::{Context, RequestId};
pub use error::HandlerError;
pub use handler::{service_fn, BoxFuture, Handler, HttpFunction, IntoHandlerResult};
pub use response::{StructuredResponse, TEXT_PLAIN};
