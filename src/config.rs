//! Runtime configuration, read from the environment (and `.env`).

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::SiteError;
use crate::models::{substrate_features, FeatureList, IconRole};
use crate::render::SectionStyles;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_STATIC_DIR: &str = "./static";

/// What the binary should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Write the rendered page and exit.
    #[default]
    Render,
    /// Serve a local preview over HTTP.
    Serve,
}

impl std::str::FromStr for Mode {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "render" => Ok(Self::Render),
            "serve" => Ok(Self::Serve),
            other => Err(SiteError::Config(format!(
                "unknown command {other:?} (expected \"render\" or \"serve\")"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub features_path: Option<PathBuf>,
    pub bind_addr: String,
    pub static_dir: PathBuf,
    pub output_path: Option<PathBuf>,
    pub styles: SectionStyles,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            features_path: None,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            output_path: None,
            styles: SectionStyles::default(),
        }
    }
}

impl SiteConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, SiteError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SiteError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        config.features_path = get("FEATURES_PATH").map(PathBuf::from);
        config.output_path = get("OUTPUT_PATH").map(PathBuf::from);
        if let Some(addr) = get("BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(dir) = get("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(class) = get("SECTION_CLASS") {
            config.styles.section_class = Cow::Owned(class);
        }
        if let Some(class) = get("ICON_CLASS") {
            config.styles.icon_class = Cow::Owned(class);
        }
        if let Some(role) = get("ICON_ROLE") {
            config.styles.icon_role = role
                .parse::<IconRole>()
                .map_err(|e| SiteError::Config(format!("ICON_ROLE: {e}")))?;
        }

        Ok(config)
    }

    /// The configured feature file, or the built-in Substrate list.
    pub fn feature_list(&self) -> Result<FeatureList, SiteError> {
        match &self.features_path {
            Some(path) => load_features(path),
            None => Ok(substrate_features()),
        }
    }
}

/// Reads a JSON array of features. File order is display order.
pub fn load_features(path: &Path) -> Result<FeatureList, SiteError> {
    let raw = fs::read_to_string(path).map_err(|source| SiteError::FeatureFile {
        path: path.to_path_buf(),
        source,
    })?;

    let features: FeatureList = serde_json::from_str(&raw)?;
    log::info!("Loaded {} features from {}", features.len(), path.display());

    Ok(features)
}
