#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lorebook_server::start().await
}
