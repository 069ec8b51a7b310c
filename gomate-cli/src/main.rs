//! # gomate
//!
//! Command-line front end for the GoMate travel app.
//!
//! ## Commands
//!
//! - `login`: Sign in with username and password
//! - `register`: Create a local account and sign in
//! - `logout`: Sign out and forget the stored session
//! - `status`: Show the signed-in user, theme and favorites count
//! - `destinations`: Fetch destinations, optionally filtered
//! - `favorite`: Toggle a destination in favorites
//! - `favorites`: List favorites
//! - `theme`: Switch between dark and light
//!
//! Every command restores the persisted session, favorites and theme first.
//!
//! ## Example
//!
//! ```bash
//! # Sign in
//! gomate login --username emilys
//!
//! # Browse, search, and favorite
//! gomate destinations --search europe
//! gomate favorite japan
//! gomate favorites
//!
//! # Offline demo with fixtures and a fixed seed
//! gomate --mock --seed 42 destinations
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gomate_client::{App, ClientConfig, FileStore, HttpApi, MockApi, RemoteApi};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{auth, destinations, favorites, status, theme};
use config::{Config, CONFIG_FILE_NAME};

/// Command-line front end for the GoMate travel app.
#[derive(Parser, Debug)]
#[command(name = "gomate")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Data directory for the persisted state and config
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (default: <data-dir>/gomate.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use built-in fixtures instead of the network (for testing/demo)
    #[arg(long, global = true)]
    mock: bool,

    /// Seed for reproducible destination data (overrides config)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in with username and password
    Login {
        /// Username
        #[arg(long, short)]
        username: String,

        /// Password (will prompt if not provided)
        #[arg(long, short)]
        password: Option<String>,
    },

    /// Create a local account and sign in
    Register {
        /// Username
        #[arg(long, short)]
        username: String,

        /// Email address
        #[arg(long, short)]
        email: String,

        /// First name
        #[arg(long)]
        first_name: String,

        /// Last name
        #[arg(long)]
        last_name: String,

        /// Password (will prompt if not provided)
        #[arg(long, short)]
        password: Option<String>,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the signed-in user, theme and favorites count
    Status,

    /// Fetch and list destinations
    Destinations {
        /// Only show destinations whose name or region contains this text
        #[arg(long, short)]
        search: Option<String>,
    },

    /// Add a destination to favorites, or remove it if already there
    Favorite {
        /// Destination name, e.g. "japan"
        name: String,
    },

    /// List favorites
    Favorites,

    /// Switch the theme
    Theme {
        /// New theme
        #[arg(value_enum)]
        mode: theme::Mode,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Determine data directory
    let data_dir = match cli.data_dir.clone() {
        Some(dir) => dir,
        None => default_data_dir()?,
    };

    tokio::fs::create_dir_all(&data_dir)
        .await
        .context("Failed to create data directory")?;

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| data_dir.join(CONFIG_FILE_NAME));
    let config = Config::load(&config_path).await?;

    let mut client_config =
        ClientConfig::default().with_sample_size(config.destinations.sample_size);
    if let Some(seed) = cli.seed.or(config.destinations.seed) {
        client_config = client_config.with_seed(seed);
    }

    let store = FileStore::open(config.state_path(&data_dir))
        .await
        .context("Failed to open state file")?;

    if cli.mock {
        tracing::debug!("using mock remote API");
        run(App::new(store, MockApi::new(), client_config), cli.command).await
    } else {
        let api = HttpApi::new(config.api.clone());
        run(App::new(store, api, client_config), cli.command).await
    }
}

async fn run<A: RemoteApi>(app: App<FileStore, A>, command: Commands) -> Result<()> {
    app.restore().await;

    match command {
        Commands::Login { username, password } => {
            let password = match password {
                Some(p) => p,
                None => prompt_password()?,
            };
            auth::login(&app, &username, &password).await?;
        }
        Commands::Register {
            username,
            email,
            first_name,
            last_name,
            password,
        } => {
            let password = match password {
                Some(p) => p,
                None => prompt_password()?,
            };
            let request = gomate_types::RegisterRequest {
                username,
                email,
                first_name,
                last_name,
                password,
            };
            auth::register(&app, request).await?;
        }
        Commands::Logout => {
            auth::logout(&app).await;
        }
        Commands::Status => {
            status::run(&app).await;
        }
        Commands::Destinations { search } => {
            destinations::run(&app, search.as_deref()).await?;
        }
        Commands::Favorite { name } => {
            favorites::toggle(&app, &name).await?;
        }
        Commands::Favorites => {
            favorites::list(&app).await;
        }
        Commands::Theme { mode } => {
            theme::run(&app, mode).await;
        }
    }

    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` wins unless `--verbose` is set.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn prompt_password() -> Result<String> {
    rpassword::prompt_password("Password: ").context("Failed to read password")
}

/// Get the default data directory for gomate.
fn default_data_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "gomate", "gomate")
        .context("Could not determine home directory")?;
    Ok(dirs.data_dir().to_path_buf())
}
