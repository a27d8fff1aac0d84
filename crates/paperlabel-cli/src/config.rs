//! Configuration loading from TOML files

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Zero-shot endpoint used when none is configured
const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-mnli";

fn default_categories() -> Vec<String> {
    [
        "Graph-Based Learning",
        "Optimization Algorithms",
        "Machine Learning Theory",
        "Reinforcement Learning & Bandits",
        "Applied AI in Healthcare & Web Systems",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Global configuration for paperlabel
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub categories: CategoriesConfig,
    pub api: ApiConfig,
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub folder: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report file name, written inside the input folder
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: "out.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CategoriesConfig {
    /// Fixed ordered candidate label set
    pub labels: Vec<String>,
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            labels: default_categories(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub url: String,
    #[serde(deserialize_with = "deserialize_env_var")]
    pub api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            api_key: std::env::var("HF_API_KEY").ok(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Directory holding model.onnx and tokenizer.json
    pub dir: Option<PathBuf>,
    pub intra_threads: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            dir: None,
            intra_threads: 2,
        }
    }
}

/// Deserialize a string that may contain an environment variable reference like ${VAR}
fn deserialize_env_var<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| expand_env_var(&s)))
}

/// Expand ${VAR} to the environment variable's value
fn expand_env_var(s: &str) -> Option<String> {
    if let Some(var_name) = s.strip_prefix("${").and_then(|s| s.strip_suffix('}')) {
        std::env::var(var_name).ok()
    } else {
        Some(s.to_string())
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./paperlabel.toml (current directory)
    /// 2. ~/.config/paperlabel/config.toml
    ///
    /// If no config file is found, returns the default config.
    pub fn load() -> Result<Self> {
        let local_config = PathBuf::from("paperlabel.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = directories::ProjectDirs::from("", "", "paperlabel") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
