use srlatest::config::ConfigLoader;
use srlatest::logger;
use srlatest::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = ConfigLoader::new()?.load()?;
    logger::init(&settings.logger)?;

    Server::new(settings).run().await
}
