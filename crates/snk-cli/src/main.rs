use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "snk")]
#[command(about = "Snack shop ordering client", long_about = None)]
struct Cli {
    /// Layered config paths in merge order (later files override earlier)
    #[arg(long = "config", global = true)]
    config_paths: Vec<String>,

    /// Backend base URL; overrides config and SNK_BACKEND_URL
    #[arg(long, global = true)]
    backend_url: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the snack catalog
    Menu,

    /// List deliverable rooms grouped by floor
    Rooms,

    /// Build a cart and submit it in one step
    Order {
        /// Snack id to add; repeat for more units or more snacks
        #[arg(long = "item", required = true)]
        items: Vec<i64>,

        /// Delivery floor
        #[arg(long, allow_negative_numbers = true)]
        floor: i32,

        /// Delivery room (must be on --floor)
        #[arg(long)]
        room: String,
    },

    /// Interactive ordering session on stdin/stdout
    Shell,

    /// Compute layered config hash + print canonical JSON
    ConfigHash {
        /// Paths in merge order
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env.local if present (dev convenience).
    let _ = dotenvy::from_filename(".env.local");

    init_tracing();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::ConfigHash { paths } => commands::config_hash(&paths),

        Commands::Menu => {
            let cfg = commands::resolve_config(&cli.config_paths, cli.backend_url.as_deref())?;
            commands::catalog::menu(&cfg).await
        }

        Commands::Rooms => {
            let cfg = commands::resolve_config(&cli.config_paths, cli.backend_url.as_deref())?;
            commands::catalog::rooms(&cfg).await
        }

        Commands::Order { items, floor, room } => {
            let cfg = commands::resolve_config(&cli.config_paths, cli.backend_url.as_deref())?;
            commands::order::run(&cfg, &items, floor, &room).await
        }

        Commands::Shell => {
            let cfg = commands::resolve_config(&cli.config_paths, cli.backend_url.as_deref())?;
            commands::shell::run_stdio(&cfg).await
        }
    }
}

/// Logs go to stderr; stdout carries command output only.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();
}
