use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of config files, later files take precedence.
pub const CONFIG_PATHS_ENV: &str = "EZFORM_CONFIG";

/// Loads the config from the files listed in `EZFORM_CONFIG`, or from
/// [`DEFAULT_CONFIG_PATH`] if the variable is not set.
pub fn load() -> anyhow::Result<Config> {
    let paths = config_paths(std::env::var(CONFIG_PATHS_ENV).ok().as_deref());
    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_override(paths, &[])
}

/// Loads the given config files and applies every override (a TOML snippet
/// like `contact_api.endpoint = "..."`) on top of them.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    overrides
        .iter()
        .fold(builder, |builder, snippet| {
            builder.add_source(File::from_str(snippet, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

fn config_paths(env: Option<&str>) -> Vec<PathBuf> {
    match env {
        Some(paths) if !paths.trim().is_empty() => paths
            .split(':')
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .collect(),
        _ => vec![DEFAULT_CONFIG_PATH.into()],
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub contact_api: ContactApiConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactApiConfig {
    pub endpoint: Option<Url>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HttpConfig {
    pub timeout_seconds: Option<u64>,
}

impl HttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}
