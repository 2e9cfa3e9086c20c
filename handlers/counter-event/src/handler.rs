use faas_sdk::prelude::*;

/// Counter event handler
///
/// The event data is a decimal integer. The reply is the same event (every
/// `ce-*` header copied over) carrying that integer plus one, with the
/// content type of the incoming event.
///
/// # Example
/// ```ignore
/// curl -X POST http://localhost:8080/ \
///   -H "ce-id: 1" -H "ce-type: counter" -H "ce-source: /sensor" \
///   -H "ce-specversion: 1.0" -H "Content-Type: text/plain" \
///   -d '41'
/// # => 42
/// ```
pub fn handle(ctx: &Context, body: &str) -> Result<StructuredResponse, HandlerError> {
    tracing::info!(
        request_id = %ctx.request_id,
        id = ctx.header("ce-id").map(String::as_str).unwrap_or("-"),
        event_type = ctx.header("ce-type").map(String::as_str).unwrap_or("-"),
        source = ctx.header("ce-source").map(String::as_str).unwrap_or("-"),
        "Received event"
    );
    tracing::debug!(request_id = %ctx.request_id, raw = ?body, len = body.len(), "Event data");

    let counter: i64 = body.trim()
        .parse()
        .map_err(|e| HandlerError::InvalidBody(format!("expected an integer, got {:?}: {}", body, e)))?;

    let next = counter.checked_add(1)
        .ok_or_else(|| HandlerError::InvalidBody(format!("counter {} cannot be incremented", counter)))?;

    let content_type = ctx.content_type()
        .cloned()
        .unwrap_or_else(|| TEXT_PLAIN.to_string());

    let response = ctx.cloud_event_headers()
        .fold(StructuredResponse::new(), |response, (key, value)| response.with_header(key.clone(), value.clone()))
        .with_header("content-type", content_type)
        .with_body(next.to_string());

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> Context {
        Context::default()
            .with_header("ce-id", "evt-1")
            .with_header("ce-type", "dev.example.counter")
            .with_header("ce-source", "/workload")
            .with_header("ce-specversion", "1.0")
    }

    #[test]
    fn test_increments_counter() {
        let result = handle(&event(), "41").unwrap();
        assert_eq!(result.body, "42");
        assert_eq!(result.header("content-type").map(String::as_str), Some("text/plain"));
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(handle(&event(), " 7\n").unwrap().body, "8");
        assert_eq!(handle(&event(), "-1").unwrap().body, "0");
    }

    #[test]
    fn test_echoes_event_headers() {
        let ctx = event()
            .with_header("content-type", "application/octet-stream")
            .with_header("accept", "*/*");
        let result = handle(&ctx, "0").unwrap();

        assert_eq!(result.header("ce-id").map(String::as_str), Some("evt-1"));
        assert_eq!(result.header("ce-type").map(String::as_str), Some("dev.example.counter"));
        assert_eq!(result.header("ce-source").map(String::as_str), Some("/workload"));
        assert_eq!(result.header("ce-specversion").map(String::as_str), Some("1.0"));
        assert_eq!(result.header("content-type").map(String::as_str), Some("application/octet-stream"));
        assert!(result.header("accept").is_none());
    }

    #[test]
    fn test_rejects_non_integer() {
        for body in ["", "abc", "4.2", "1 2"] {
            let err = handle(&event(), body).unwrap_err();
            assert!(matches!(err, HandlerError::InvalidBody(_)), "body {:?} gave {:?}", body, err);
            assert_eq!(err.status_code(), 400);
        }
    }

    #[test]
    fn test_rejects_overflow() {
        let err = handle(&event(), &i64::MAX.to_string()).unwrap_err();
        assert!(matches!(err, HandlerError::InvalidBody(_)));
    }
}
