#[tokio::main]
async fn main() -> anyhow::Result<()> {
    faas_runtime::run(counter_event::handle).await
}
