use cold_start_http::ColdStart;
use faas_runtime::RuntimeConfig;

fn local() -> RuntimeConfig {
    RuntimeConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..RuntimeConfig::default()
    }
}

async fn post_empty(client: &reqwest::Client, url: &str) -> reqwest::Response {
    client.post(format!("{}/", url)).body("").send().await.unwrap()
}

#[tokio::test]
async fn test_first_request_cold_then_warm() {
    let server = faas_runtime::start(ColdStart::new(), local()).await.unwrap();
    let client = reqwest::Client::new();

    let first = post_empty(&client, &server.url()).await;
    assert_eq!(first.status(), reqwest::StatusCode::OK);
    let content_type = first.headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("text/plain"), "content-type was {:?}", content_type);
    assert_eq!(first.text().await.unwrap(), "true");

    let second = post_empty(&client, &server.url()).await;
    assert_eq!(second.status(), reqwest::StatusCode::OK);
    assert_eq!(second.text().await.unwrap(), "false");

    drop(client);
    server.close().await.unwrap();
}

#[tokio::test]
async fn test_health_checks_do_not_warm_up() {
    let server = faas_runtime::start(ColdStart::new(), local()).await.unwrap();
    let client = reqwest::Client::new();

    let health = client
        .get(format!("{}/health/readiness", server.url()))
        .send()
        .await
        .unwrap();
    assert!(health.status().is_success());

    let first = post_empty(&client, &server.url()).await;
    assert_eq!(first.text().await.unwrap(), "true");

    drop(client);
    server.close().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_first_requests() {
    let server = faas_runtime::start(ColdStart::new(), local()).await.unwrap();
    let client = reqwest::Client::new();

    let requests = (0..8).map(|_| {
        let client = client.clone();
        let url = server.url();
        tokio::spawn(async move { post_empty(&client, &url).await.text().await.unwrap() })
    });

    let mut cold = 0;
    for request in requests.collect::<Vec<_>>() {
        if request.await.unwrap() == "true" {
            cold += 1;
        }
    }
    assert_eq!(cold, 1);

    drop(client);
    server.close().await.unwrap();
}
