use eyre::Report;

#[tokio::main]
async fn main() -> Result<(), Report> {
    walletdesk::run().await
}
