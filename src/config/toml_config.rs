use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{validate_format, validate_path, Validate};
use crate::domain::model::InputFormat;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<PathBuf>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
}

impl ReportConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ReportError::Config {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        toml::from_str(&processed_content).map_err(|e| ReportError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReportError::Config {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn input_format(&self) -> Result<Option<InputFormat>> {
        self.input.format.as_deref().map(str::parse::<InputFormat>).transpose()
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.input.path {
            validate_path("input.path", path)?;
        }
        if let Some(format) = &self.input.format {
            validate_format("input.format", format, &InputFormat::SUPPORTED)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let config = ReportConfig::parse(
            r#"
[input]
path = "data/products.csv"
format = "csv"

[logging]
verbose = true
"#,
        )
        .unwrap();

        assert_eq!(config.input.path, Some(PathBuf::from("data/products.csv")));
        assert_eq!(config.input_format().unwrap(), Some(InputFormat::Csv));
        assert!(config.logging.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sections_are_optional() {
        let config = ReportConfig::parse("").unwrap();
        assert!(config.input.path.is_none());
        assert_eq!(config.input_format().unwrap(), None);
        assert!(!config.logging.verbose);
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("PRODUCT_REPORT_TEST_DIR", "/srv/data");
        let config = ReportConfig::parse(
            r#"
[input]
path = "${PRODUCT_REPORT_TEST_DIR}/products.json"
"#,
        )
        .unwrap();
        assert_eq!(
            config.input.path,
            Some(PathBuf::from("/srv/data/products.json"))
        );

        let config = ReportConfig::parse(
            r#"
[input]
path = "${PRODUCT_REPORT_UNSET_VAR}/p.csv"
"#,
        )
        .unwrap();
        assert_eq!(
            config.input.path,
            Some(PathBuf::from("${PRODUCT_REPORT_UNSET_VAR}/p.csv"))
        );
    }

    #[test]
    fn test_invalid_format_rejected() {
        let config = ReportConfig::parse("[input]\nformat = \"xml\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ReportError::InvalidConfigValue { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[input]\npath = \"db.csv\"").unwrap();

        let config = ReportConfig::from_file(file.path()).unwrap();
        assert_eq!(config.input.path, Some(PathBuf::from("db.csv")));

        assert!(matches!(
            ReportConfig::from_file("/nonexistent/report.toml"),
            Err(ReportError::Config { .. })
        ));
        assert!(matches!(
            ReportConfig::parse("[input\n"),
            Err(ReportError::Config { .. })
        ));
    }
}
