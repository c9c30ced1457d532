use std::path::PathBuf;

use diary_core::storage::DiaryData;
use diary_core::{JsonFileStore, StoreConfig};

use crate::app::resolve_config_path;
use crate::cli::{Cli, InitArgs};
use crate::config::{write_config, DiaryConfig};

pub fn handle_init(cli: &Cli, args: &InitArgs) -> anyhow::Result<()> {
    let requested = match args.path.clone().or_else(|| cli.store.clone()) {
        Some(path) => PathBuf::from(path),
        None => StoreConfig::default().path,
    };
    // The config always holds an absolute path.
    let store_path = if requested.is_absolute() {
        requested
    } else {
        std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("Failed to resolve working directory: {}", e))?
            .join(requested)
    };
    let config_path = match &args.config_path {
        Some(path) => PathBuf::from(path),
        None => resolve_config_path()?,
    };

    write_config(&config_path, &DiaryConfig::new(store_path.clone()))?;

    let store = JsonFileStore::new(StoreConfig::new(&store_path));
    if !store_path.exists() {
        store.write_document(&DiaryData::default())?;
    }

    tracing::info!(
        store = %store_path.display(),
        config = %config_path.display(),
        "initialized diary"
    );
    if !cli.quiet {
        println!("Initialized diary at {}", store_path.display());
        println!("Config written to {}", config_path.display());
    }
    Ok(())
}
