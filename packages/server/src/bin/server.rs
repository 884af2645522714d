//! Realtime group chat server.
//!
//! Serves the landing and chat pages, the account API and the `/ws` endpoint.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin agora-server
//! cargo run --bin agora-server -- --host 0.0.0.0 --port 3000 --users-file ./users.json
//! cargo run --bin agora-server -- --in-memory
//! ```

use std::{path::PathBuf, sync::Arc};

use agora_server::{
    bootstrap::build_server,
    domain::UserRepository,
    infrastructure::repository::{InMemoryUserRepository, JsonFileUserRepository},
};
use agora_shared::logger::setup_logger;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "agora-server")]
#[command(about = "Realtime group chat server with presence", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "10000")]
    port: u16,

    /// JSON file holding the registered users
    #[arg(short = 'f', long, default_value = "users.json")]
    users_file: PathBuf,

    /// Keep users in memory only (the users file is ignored)
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(&[env!("CARGO_PKG_NAME"), "tower_http"], "debug");

    let args = Args::parse();

    let repository: Arc<dyn UserRepository> = if args.in_memory {
        tracing::info!("Using in-memory user store");
        Arc::new(InMemoryUserRepository::new())
    } else {
        match JsonFileUserRepository::open(args.users_file.clone()).await {
            Ok(repository) => {
                tracing::info!("Using user file {}", repository.path().display());
                Arc::new(repository)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to open user file {}: {}",
                    args.users_file.display(),
                    e
                );
                std::process::exit(1);
            }
        }
    };

    let server = build_server(repository);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
