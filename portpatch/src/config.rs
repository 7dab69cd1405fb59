use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use etcetera::base_strategy::{choose_base_strategy, BaseStrategy};

pub const APP_NAME: &str = "portpatch";

static CONFIG_DIR_OVERRIDE: OnceLock<PathBuf> = OnceLock::new();

pub fn set_config_dir_override(dir: &Path) {
    CONFIG_DIR_OVERRIDE
        .set(dir.to_path_buf())
        .expect("Config dir override should only be set once");
}

fn config_dir() -> anyhow::Result<PathBuf> {
    if let Some(dir) = CONFIG_DIR_OVERRIDE.get() {
        return Ok(dir.clone());
    }
    let strategy =
        choose_base_strategy().map_err(|e| anyhow!("Unable to find config directory: {e}"))?;
    Ok(strategy.config_dir().join(APP_NAME))
}

fn config_file() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The compose file to patch when no path is passed on the command line. For example:
    /// ```toml
    /// compose_file = "/srv/app/infra/docker-compose.yml"
    /// ```
    pub compose_file: Option<PathBuf>,
}

pub fn load_config() -> anyhow::Result<Config> {
    load_config_from(&config_file()?)
}

pub fn load_config_from(config_file: &Path) -> anyhow::Result<Config> {
    if fs::exists(config_file)? {
        let contents = fs::read_to_string(config_file)
            .with_context(|| format!("Failed to read config file {}", config_file.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", config_file.display()))?;
        Ok(config)
    } else {
        Ok(Config::default())
    }
}
