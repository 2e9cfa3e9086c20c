#[tokio::main]
async fn main() -> anyhow::Result<()> {
    faas_runtime::run(empty_http::handle).await
}
