use std::path::PathBuf;
use std::sync::Arc;

use easy_config_store::ConfigStore;
use eyre::{Result, ensure};
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub type Config = Arc<ConfigInner>;

pub fn config(path: PathBuf) -> Result<Config> {
    let config_store = ConfigStore::<ConfigInner>::read(path, "config".to_string())?;
    let inner = (*config_store).clone();

    validate(&inner)?;

    info!("config parsing successful");
    debug!("loaded configuration:\n{}", toml::to_string_pretty(&inner)?);

    Ok(Arc::new(inner))
}

fn validate(inner: &ConfigInner) -> Result<()> {
    ensure!(
        (1..=3).contains(&inner.limits.max_references),
        "max_references must be between 1 and 3, got {}",
        inner.limits.max_references
    );
    ensure!(
        inner.limits.max_education_entries >= 1,
        "max_education_entries must be at least 1"
    );
    ensure!(
        inner.limits.max_work_entries >= 1,
        "max_work_entries must be at least 1"
    );
    ensure!(
        (1..=10).contains(&inner.limits.max_languages),
        "max_languages must be between 1 and 10, got {}",
        inner.limits.max_languages
    );
    ensure!(
        (1..=10).contains(&inner.limits.max_skills),
        "max_skills must be between 1 and 10, got {}",
        inner.limits.max_skills
    );
    Ok(())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ConfigInner {
    pub limits: LimitsConfig,
    pub input: InputConfig,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LimitsConfig {
    #[serde(default = "default_max_education")]
    pub max_education_entries: usize,
    #[serde(default = "default_max_work")]
    pub max_work_entries: usize,
    #[serde(default = "default_max_references")]
    pub max_references: usize,
    #[serde(default = "default_max_languages")]
    pub max_languages: usize,
    #[serde(default = "default_max_skills")]
    pub max_skills: usize,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct InputConfig {
    #[serde(default)]
    pub responsibility_delimiter: Delimiter,
}

/// How the free-text responsibilities field is cut into bullet points.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Comma,
    Newline,
}

impl Delimiter {
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Newline => '\n',
        }
    }
}

fn default_max_education() -> usize {
    5
}

fn default_max_work() -> usize {
    5
}

fn default_max_references() -> usize {
    3
}

fn default_max_languages() -> usize {
    10
}

fn default_max_skills() -> usize {
    10
}

impl Default for ConfigInner {
    fn default() -> Self {
        let cfg = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.default.toml",));

        toml::from_str(cfg).unwrap() // should be okay
    }
}
