use std::net::IpAddr;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use student_groups::api::{self, ServerConfig};
use student_groups::repository::Repository;

const DEFAULT_PORT: u16 = 3902;

#[derive(Parser)]
#[command(name = "groups")]
#[command(about = "Organise students into groups over a JSON API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "student_groups=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(host: IpAddr, port: u16) -> anyhow::Result<()> {
    let repo = Repository::new();
    let config = ServerConfig::from_env();
    if let Some(origins) = &config.cors_origins {
        tracing::info!("CORS restricted to {:?}", origins);
    }

    let app = api::create_router_with_config(repo, config);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Student groups server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port, host }) => serve(host, port).await,
        None => serve(IpAddr::from([127, 0, 0, 1]), DEFAULT_PORT).await,
    }
}
