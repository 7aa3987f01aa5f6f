use crate::utils::error::{GrocerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrocerConfig {
    pub files: Option<FilesConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilesConfig {
    pub input: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub marker: Option<String>,
    pub min_width: Option<usize>,
}

impl GrocerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| GrocerError::ConfigError {
            message: format!("cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GrocerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GROCER_DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GrocerError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn input_path(&self) -> Option<&str> {
        self.files.as_ref()?.input.as_deref()
    }

    pub fn output_path(&self) -> Option<&str> {
        self.files.as_ref()?.output.as_deref()
    }

    pub fn marker(&self) -> Option<&str> {
        self.display.as_ref()?.marker.as_deref()
    }

    pub fn min_width(&self) -> Option<usize> {
        self.display.as_ref()?.min_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r##"
[files]
input = "data/today.txt"
output = "data/frequency.dat"

[display]
marker = "#"
min_width = 20
"##;

        let config = GrocerConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input_path(), Some("data/today.txt"));
        assert_eq!(config.output_path(), Some("data/frequency.dat"));
        assert_eq!(config.marker(), Some("#"));
        assert_eq!(config.min_width(), Some(20));
    }

    #[test]
    fn test_sections_are_optional() {
        let config = GrocerConfig::from_toml_str("").unwrap();
        assert_eq!(config.input_path(), None);
        assert_eq!(config.min_width(), None);

        let config = GrocerConfig::from_toml_str("[display]\nmarker = \"+\"\n").unwrap();
        assert_eq!(config.marker(), Some("+"));
        assert_eq!(config.output_path(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GROCER_TEST_INPUT_DIR", "/srv/grocer");

        let toml_content = r#"
[files]
input = "${GROCER_TEST_INPUT_DIR}/input.txt"
output = "${GROCER_TEST_UNSET_VAR}/frequency.dat"
"#;

        let config = GrocerConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input_path(), Some("/srv/grocer/input.txt"));
        assert_eq!(
            config.output_path(),
            Some("${GROCER_TEST_UNSET_VAR}/frequency.dat")
        );

        std::env::remove_var("GROCER_TEST_INPUT_DIR");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = GrocerConfig::from_toml_str("[files\ninput = ").unwrap_err();
        assert!(matches!(err, GrocerError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[files]\ninput = \"groceries.txt\"\n")
            .unwrap();

        let config = GrocerConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input_path(), Some("groceries.txt"));
    }
}
