use std::path::PathBuf;

use diary_core::{EntryService, JsonFileStore, StoreConfig};

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, DiaryConfig};

pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("DIARY_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file if one exists.
pub fn load_config() -> anyhow::Result<Option<DiaryConfig>> {
    let config_path = resolve_config_path()?;
    if !config_path.exists() {
        return Ok(None);
    }
    read_config(&config_path).map(Some)
}

/// Store path precedence: `--store`/`DIARY_STORE`, then the config file,
/// then the default relative path.
pub fn resolve_store_config(cli: &Cli) -> anyhow::Result<StoreConfig> {
    if let Some(path) = cli.store.as_ref().filter(|p| !p.trim().is_empty()) {
        return Ok(StoreConfig::new(path));
    }

    match load_config()? {
        Some(config) => Ok(StoreConfig::new(config.store.path)),
        None => Ok(StoreConfig::default()),
    }
}

pub fn open_service(cli: &Cli) -> anyhow::Result<EntryService<JsonFileStore>> {
    let config = resolve_store_config(cli)?;
    tracing::debug!(path = %config.path.display(), "using store");
    Ok(EntryService::new(JsonFileStore::new(config)))
}
