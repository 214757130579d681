pub mod toml_config;

use crate::domain::model::InputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
use crate::utils::validation::validate_format;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::ReportConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "product-report")]
#[command(about = "Reports the most expensive and the highest rated product in a CSV or JSON file")]
pub struct CliConfig {
    /// Product file (.csv or .json)
    #[arg(env = "file_path")]
    pub file_path: Option<PathBuf>,

    /// Decode as this format instead of using the file extension
    #[arg(long)]
    pub format: Option<String>,

    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the optional config file under the command line values.
    pub fn into_settings(self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => {
                let config = ReportConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => ReportConfig::default(),
        };
        self.validate()?;

        let format = match self.format {
            Some(format) => Some(format.parse::<InputFormat>()?),
            None => file_config.input_format()?,
        };

        Ok(Settings {
            input_path: self
                .file_path
                .or(file_config.input.path)
                .unwrap_or_default(),
            format,
            verbose: self.verbose || file_config.logging.verbose,
        })
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.file_path {
            validate_path("file_path", path)?;
        }
        if let Some(format) = &self.format {
            validate_format("format", format, &InputFormat::SUPPORTED)?;
        }
        Ok(())
    }
}

/// Effective run configuration after all sources are merged.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub input_path: PathBuf,
    pub format: Option<InputFormat>,
    pub verbose: bool,
}

impl Settings {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            ..Self::default()
        }
    }
}

impl ConfigProvider for Settings {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn format_override(&self) -> Option<InputFormat> {
        self.format
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)
    }
}
