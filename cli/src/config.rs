use anyhow::{Context, Result};
use rewear_economics::{RewardCalculator, RewardConfig};
use rewear_marketplace::{catalog, SortStrategy, UserProfile};
use rewear_primitives::Role;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";
const CATALOG_FILE: &str = "catalog.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON catalog to browse; the demo catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// The member using the CLI
    pub viewer: UserProfile,
    pub default_sort: SortStrategy,
    pub leaderboard_size: usize,
    pub rewards: RewardConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            viewer: UserProfile {
                id: "demo".to_string(),
                name: "Demo User".to_string(),
                role: Role::Both,
                city: "San Francisco".to_string(),
                rating: 5.0,
                points: 156,
            },
            default_sort: SortStrategy::Latest,
            leaderboard_size: 10,
            rewards: RewardConfig::default(),
        }
    }
}

/// Explicit path, or `~/.rewear/config.json`
fn resolve(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => dirs::home_dir()
            .map(|home| home.join(".rewear").join(CONFIG_FILE))
            .context("Unable to determine home directory for config"),
    }
}

impl Config {
    /// Read the config file, falling back to defaults when it does not exist.
    /// `catalog_override` wins over the stored catalog path.
    pub fn load(config_path: Option<&Path>, catalog_override: Option<&Path>) -> Result<Self> {
        let path = resolve(config_path)?;

        let mut config: Config = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config {:?}", path))?;
            serde_json::from_str(&raw).with_context(|| format!("Invalid config {:?}", path))?
        } else {
            Config::default()
        };

        if let Some(catalog) = catalog_override {
            config.catalog_path = Some(catalog.to_path_buf());
        }
        Ok(config)
    }

    pub fn save(&self, config_path: &Path) -> Result<()> {
        if let Some(dir) = config_path.parent() {
            fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
        }
        fs::write(config_path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write config {:?}", config_path))
    }

    /// Write a default config. With `demo_catalog`, the built-in listings are
    /// also written to `catalog.json` beside it and used as the catalog.
    pub fn init(config_path: Option<&Path>, force: bool, demo_catalog: bool) -> Result<PathBuf> {
        let path = resolve(config_path)?;
        if path.exists() && !force {
            anyhow::bail!("{:?} already exists, pass --force to overwrite", path);
        }

        let mut config = Config::default();
        if demo_catalog {
            let catalog_path = path.with_file_name(CATALOG_FILE);
            if let Some(dir) = catalog_path.parent() {
                fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
            }
            catalog::save_catalog(&catalog_path, &catalog::demo_items())
                .with_context(|| format!("Failed to write catalog {:?}", catalog_path))?;
            config.catalog_path = Some(catalog_path);
        }

        config.save(&path)?;
        Ok(path)
    }

    pub fn reward_calculator(&self) -> RewardCalculator {
        RewardCalculator::new(self.rewards.clone())
    }
}
