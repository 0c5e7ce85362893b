//! FolderKV CLI
//!
//! Command-line interface for inspecting and editing a store folder.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use folderkv::{AsyncStorage, BaseDir, Config, KeyedFileStore};
use tracing_subscriber::{fmt, EnvFilter};

/// FolderKV CLI
#[derive(Parser, Debug)]
#[command(name = "folderkv")]
#[command(about = "CLI for a FolderKV key-value folder")]
#[command(version)]
struct Args {
    /// Base directory (defaults to the platform documents directory)
    #[arg(short, long, conflicts_with = "cache")]
    location: Option<String>,

    /// Use the platform cache directory as the base directory
    #[arg(long)]
    cache: bool,

    /// Namespace folder under the base directory
    #[arg(short, long, default_value = folderkv::config::DEFAULT_FOLDER)]
    folder: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Set {
        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },

    /// Delete a key
    Del {
        /// The key to delete
        key: String,
    },

    /// List all keys
    Keys,
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,folderkv=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> folderkv::Result<ExitCode> {
    let mut builder = Config::builder().folder(args.folder);
    if let Some(location) = args.location {
        builder = builder.location(location);
    } else if args.cache {
        builder = builder.base_dir(BaseDir::Cache)?;
    } else {
        builder = builder.base_dir(BaseDir::Documents)?;
    }
    let config = builder.build();

    tracing::info!("FolderKV CLI v{}", folderkv::VERSION);

    let store = KeyedFileStore::open(config)?;
    tracing::info!("Namespace root: {}", store.namespace_root().display());

    match args.command {
        Commands::Get { key } => match store.get_item(&key).await? {
            Some(value) => println!("{}", value),
            None => {
                tracing::info!("No value for {:?}", key);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Set { key, value } => store.set_item(&key, &value).await?,
        Commands::Del { key } => store.remove_item(&key).await?,
        Commands::Keys => {
            for key in store.get_all_keys().await? {
                println!("{}", key);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
