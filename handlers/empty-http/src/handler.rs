use faas_sdk::prelude::*;

/// Empty function
///
/// Ignores the context and the body and returns an empty `text/plain`
/// response. Used as the baseline when measuring invocation overhead.
pub fn handle(_ctx: &Context, _body: &str) -> StructuredResponse {
    StructuredResponse::text("")
}
