use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// New-game defaults
    #[serde(default)]
    pub game: GameConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one file per stored session
    #[serde(default = "default_save_dir")]
    pub save_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Table side length for new games
    #[serde(default = "default_table_size")]
    pub table_size: usize,

    /// Guards placed by the new-game generator
    #[serde(default = "default_guard_count")]
    pub guard_count: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            save_dir: default_save_dir(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            table_size: default_table_size(),
            guard_count: default_guard_count(),
        }
    }
}

fn base_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".shadowgrid")
}

fn default_save_dir() -> PathBuf {
    base_dir().join("saves")
}

fn default_table_size() -> usize {
    11
}

fn default_guard_count() -> usize {
    3
}

impl Config {
    pub fn load(path: &Option<String>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            PathBuf::from(p)
        } else {
            let default_paths = vec![
                Some(Self::default_path()),
                dirs::config_dir().map(|c| c.join("shadowgrid.yml")),
                Some(PathBuf::from("./shadowgrid.yml")),
            ];

            default_paths
                .into_iter()
                .flatten()
                .find(|p| p.exists())
                .context(
                    "no config file found; run `shadowgrid init` or create ~/.shadowgrid/config.yml",
                )?
        };

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config: {}", config_path.display()))?;
        let config: Config = serde_yml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", config_path.display()))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yml::to_string(self).context("failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Generate a sample configuration
    pub fn sample() -> Self {
        Config {
            storage: StorageConfig::default(),
            game: GameConfig::default(),
        }
    }

    pub fn default_path() -> PathBuf {
        base_dir().join("config.yml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_roundtrips_through_yaml() {
        let sample = Config::sample();
        let yaml = serde_yml::to_string(&sample).unwrap();
        let parsed: Config = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed.game.table_size, sample.game.table_size);
        assert_eq!(parsed.storage.save_dir, sample.storage.save_dir);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Config = serde_yml::from_str("game:\n  table_size: 7\n").unwrap();
        assert_eq!(parsed.game.table_size, 7);
        assert_eq!(parsed.game.guard_count, default_guard_count());
        assert_eq!(parsed.storage.save_dir, default_save_dir());
    }
}
