use clap::Parser;
use todo_hal::{Config, Server, Store};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    let app = todo_hal::app(&config, Store::new());

    if let Err(e) = Server::bind(config.addr()).serve(app).await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}
