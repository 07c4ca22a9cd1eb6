use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use shadowgrid::browser::StoredGameBrowser;
use shadowgrid::catalog::StoredGameCatalog;
use shadowgrid::cli::{Cli, Commands};
use shadowgrid::config::Config;
use shadowgrid::game::{self, GameModel, SUSPENDED_SESSION};
use shadowgrid::persistence::GameDataAccess;
use shadowgrid::store::{BlobStore, FileBlobStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shadowgrid=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    // Handle Init immediately without loading config
    if let Some(Commands::Init) = &cli.command {
        return handle_init();
    }

    // Handle ConfigSample immediately without loading config
    if let Some(Commands::ConfigSample { output }) = &cli.command {
        let path = output
            .clone()
            .unwrap_or_else(|| PathBuf::from("./shadowgrid.sample.yml"));
        Config::sample().save(&path)?;
        println!("sample config written to {}", path.display());
        return Ok(());
    }

    let config = Config::load(&cli.config_path)?;
    let store: Arc<dyn BlobStore> = Arc::new(FileBlobStore::new(&config.storage.save_dir)?);

    match cli.command {
        Some(Commands::Init) | Some(Commands::ConfigSample { .. }) => {
            // Already handled
        }
        Some(Commands::New { name, size, guards }) => {
            let size = size.unwrap_or(config.game.table_size);
            let guards = guards.unwrap_or(config.game.guard_count);
            let mut rng = rand::thread_rng();

            let model = GameModel::new(store, game::new_game(size, guards, &mut rng));
            model.save_game(&name).await?;
            println!("stored new {size}x{size} game as {name:?}");
        }
        Some(Commands::Show { name }) => {
            let access = GameDataAccess::new(store, game::markers::GUARD);
            let table = access.load(&name).await?;

            print!("{table}");
            for guard in &table.guards {
                println!(
                    "guard at ({}, {}) facing {}",
                    guard.row,
                    guard.col,
                    guard.facing.as_str()
                );
            }
        }
        Some(Commands::Saves) | None => {
            print_saves(store).await?;
        }
    }

    Ok(())
}

async fn print_saves(store: Arc<dyn BlobStore>) -> anyhow::Result<()> {
    let catalog = StoredGameCatalog::new(Some(store), SUSPENDED_SESSION);
    let (intents, _rx) = tokio::sync::mpsc::unbounded_channel();
    let mut browser = StoredGameBrowser::new(&catalog, intents);

    catalog.refresh().await?;
    browser.sync();

    if browser.entries().is_empty() {
        println!("no stored games");
        return Ok(());
    }

    println!("stored games:");
    for entry in browser.entries() {
        println!(
            "  {} (saved {})",
            entry.name,
            entry.modified.format("%Y-%m-%d %H:%M:%S")
        );
    }
    Ok(())
}

fn handle_init() -> anyhow::Result<()> {
    let config_path = Config::default_path();
    if config_path.exists() {
        println!("config already exists at {}", config_path.display());
        return Ok(());
    }

    let config = Config::sample();
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::create_dir_all(&config.storage.save_dir)?;
    config.save(&config_path)?;

    println!("config written to {}", config_path.display());
    println!("saves directory: {}", config.storage.save_dir.display());
    Ok(())
}
