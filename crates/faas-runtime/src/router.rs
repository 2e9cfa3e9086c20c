//! Function router - hands every incoming request to the registered handler
//!
//! Apart from the two health checks, every method on every path invokes the
//! one handler the runtime was started with.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use http_body_util::LengthLimitError;
use std::collections::HashMap;
use std::sync::Arc;

use faas_sdk::{Context, RequestId, StructuredResponse};

use crate::RuntimeState;

/// Create the router that serves the function
pub fn create_router(state: Arc<RuntimeState>) -> Router {
    Router::new()
        .route("/health/readiness", get(health_check))
        .route("/health/liveness", get(health_check))
        .route("/", any(handle_invocation))
        .route("/{*path}", any(handle_invocation))
        .with_state(state)
}

/// Readiness and liveness check
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Build a context from the request, invoke the handler and write its result
async fn handle_invocation(
    State(state): State<Arc<RuntimeState>>,
    request: Request<Body>,
) -> Response {
    let request_id = RequestId::new();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Incoming invocation"
    );

    let query: HashMap<String, String> = request.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        })
        .unwrap_or_default();

    let headers = collect_headers(request.headers());

    let body_bytes = match axum::body::to_bytes(request.into_body(), state.config.max_body_bytes).await {
        Ok(b) => b,
        Err(e) if is_length_limit(&e) => {
            tracing::warn!(request_id = %request_id, limit = state.config.max_body_bytes, "Request body too large");
            return (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response();
        }
        Err(e) => {
            tracing::warn!(request_id = %request_id, "Failed to read body: {}", e);
            return (StatusCode::BAD_REQUEST, "Failed to read body").into_response();
        }
    };
    let body = String::from_utf8_lossy(&body_bytes).into_owned();

    let ctx = Context {
        request_id: request_id.clone(),
        method,
        path,
        query,
        headers,
    };

    let timeout = state.config.handler_timeout();
    let result = tokio::time::timeout(timeout, state.handler.invoke(ctx, body)).await;

    let structured = match result {
        Ok(Ok(response)) => response,
        Ok(Err(e)) => {
            tracing::warn!(request_id = %request_id, status = e.status_code(), "Handler error: {}", e);
            e.into_response()
        }
        Err(_) => {
            tracing::error!(request_id = %request_id, ?timeout, "Handler timed out");
            return (StatusCode::GATEWAY_TIMEOUT, "Handler timed out").into_response();
        }
    };

    tracing::debug!(request_id = %request_id, status = structured.status(), "Invocation complete");
    into_http_response(structured, &request_id)
}

/// Flatten request headers into the context map.
///
/// Values are decoded lossily; repeated names are joined with `", "`.
fn collect_headers(map: &HeaderMap) -> HashMap<String, String> {
    let mut headers: HashMap<String, String> = HashMap::new();
    for (name, value) in map {
        let value = String::from_utf8_lossy(value.as_bytes());
        headers.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    headers
}

/// Whether a body read failed because it exceeded the configured limit
fn is_length_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = source {
        if e.is::<LengthLimitError>() {
            return true;
        }
        source = e.source();
    }
    false
}

/// Final status for a structured response; 1xx and codes past 599 become 200
fn final_status(code: u16) -> Option<StatusCode> {
    StatusCode::from_u16(code)
        .ok()
        .filter(|status| !status.is_informational() && status.as_u16() < 600)
}

/// Serialize a structured response onto HTTP, copying headers verbatim
fn into_http_response(structured: StructuredResponse, request_id: &RequestId) -> Response {
    let status = final_status(structured.status()).unwrap_or_else(|| {
        tracing::warn!(request_id = %request_id, status = structured.status(), "Invalid status code, sending 200");
        StatusCode::OK
    });
    let mut response = Response::new(Body::from(structured.body));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    for (key, value) in structured.headers {
        match (HeaderName::try_from(key.as_str()), HeaderValue::try_from(value.as_str())) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => {
                tracing::warn!(request_id = %request_id, header = %key, "Skipping invalid response header");
            }
        }
    }

    response
}
