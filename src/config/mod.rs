#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::loader::DEFAULT_SOURCE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_OUTPUT_PATH: &str = "./build";
pub const DEFAULT_OUTPUT_FILENAME: &str = "labor_stats.json";

/// Effective settings after merging the configuration layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub source_url: String,
    pub output_path: String,
    pub output_filename: String,
    pub pretty: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            pretty: true,
        }
    }
}

impl LoaderConfig {
    pub fn from_toml(file: &TomlConfig) -> Self {
        let mut config = Self::default();
        config.merge_toml(file);
        config
    }

    pub fn merge_toml(&mut self, file: &TomlConfig) {
        if let Some(url) = &file.source.url {
            self.source_url = url.clone();
        }
        if let Some(path) = &file.output.path {
            self.output_path = path.clone();
        }
        if let Some(filename) = &file.output.filename {
            self.output_filename = filename.clone();
        }
        if let Some(pretty) = file.output.pretty {
            self.pretty = pretty;
        }
    }

    /// Command line flags take precedence over the file.
    #[cfg(feature = "cli")]
    pub fn merge_cli(&mut self, args: &cli::CliArgs) {
        if let Some(url) = &args.source_url {
            self.source_url = url.clone();
        }
        if let Some(path) = &args.output_path {
            self.output_path = path.clone();
        }
        if let Some(filename) = &args.output_file {
            self.output_filename = filename.clone();
        }
        if args.compact {
            self.pretty = false;
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(args: &cli::CliArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                Self::from_toml(&TomlConfig::from_file(path)?)
            }
            None => Self::default(),
        };
        // 應用命令列覆蓋設定
        config.merge_cli(args);
        Ok(config)
    }
}

impl Validate for LoaderConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.url", &self.source_url)?;
        validation::validate_path("output.path", &self.output_path)?;
        validation::validate_file_name("output.filename", &self.output_filename)?;
        Ok(())
    }
}

impl ConfigProvider for LoaderConfig {
    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_filename(&self) -> &str {
        &self.output_filename
    }

    fn pretty(&self) -> bool {
        self.pretty
    }
}
