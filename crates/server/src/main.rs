use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    buildsheet_server::run().await
}
