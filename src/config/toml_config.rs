use crate::utils::error::{LoaderError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub filename: Option<String>,
    pub pretty: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| LoaderError::ConfigError {
                message: format!("cannot read {}: {}", path.as_ref().display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${LABOR_DATA_URL})。未設定的變數視為設定錯誤。
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LoaderError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let mut missing = Vec::new();
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                missing.push(var_name.to_string());
                String::new()
            })
        });

        if !missing.is_empty() {
            return Err(LoaderError::ConfigError {
                message: format!("environment variable(s) not set: {}", missing.join(", ")),
            });
        }

        Ok(result.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[source]
url = "https://example.com/labor.json"

[output]
path = "./site/data"
filename = "labor.json"
pretty = false
"#,
        )
        .unwrap();

        assert_eq!(config.source.url.as_deref(), Some("https://example.com/labor.json"));
        assert_eq!(config.output.path.as_deref(), Some("./site/data"));
        assert_eq!(config.output.filename.as_deref(), Some("labor.json"));
        assert_eq!(config.output.pretty, Some(false));
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.source.url.is_none());
        assert!(config.output.path.is_none());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("LABOR_STATS_TEST_HOST", "data.example.org");
        let config = TomlConfig::from_toml_str(
            r#"
[source]
url = "https://${LABOR_STATS_TEST_HOST}/labor.json"
"#,
        )
        .unwrap();

        assert_eq!(
            config.source.url.as_deref(),
            Some("https://data.example.org/labor.json")
        );
    }

    #[test]
    fn test_unset_variable_is_a_config_error() {
        let result = TomlConfig::from_toml_str(
            r#"
[output]
path = "${LABOR_STATS_SURELY_UNSET_VAR}"
"#,
        );

        match result {
            Err(LoaderError::ConfigError { message }) => {
                assert!(message.contains("LABOR_STATS_SURELY_UNSET_VAR"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let result = TomlConfig::from_toml_str("[source\nurl = 1");
        assert!(matches!(result, Err(LoaderError::TomlError(_))));
    }
}
