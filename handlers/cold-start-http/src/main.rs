use cold_start_http::ColdStart;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    faas_runtime::run(ColdStart::new()).await
}
