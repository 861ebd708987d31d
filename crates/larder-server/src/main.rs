use clap::Parser;
use larder_core::Engine;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "larder-server", about = "Larder cookbook HTTP service")]
struct Cli {
    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let addr = format!("{}:{}", cli.host, cli.port);
    info!("starting larder-server on {addr}");

    let engine = Arc::new(Engine::new());
    larder_server::run_server(&engine, &addr);
}
