#[tokio::main]
async fn main() -> anyhow::Result<()> {
    concept_cards_cli::run().await
}
