use crate::config::OutputFormat;
use crate::utils::error::{AddTimeError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A batch of `addtime` calls described in TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub evaluations: Vec<Evaluation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// EnvFilter directive, e.g. "addtime=debug"
    pub level: Option<String>,
    pub json: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub name: String,
    pub args: Vec<serde_json::Value>,
}

impl TomlConfig {
    pub const COMMAND_LINE: &'static str = "command-line";

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AddTimeError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${START_TIME})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// Appends the call given on the command line as one more evaluation.
    pub fn push_command_line(&mut self, args: Vec<serde_json::Value>) {
        self.evaluations.push(Evaluation {
            name: Self::COMMAND_LINE.to_string(),
            args,
        });
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if self.evaluations.is_empty() {
            return Err(AddTimeError::Config {
                message: "at least one [[evaluations]] entry is required".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for evaluation in &self.evaluations {
            validate_non_empty_string("evaluations.name", &evaluation.name)?;
            if !seen.insert(evaluation.name.as_str()) {
                return Err(AddTimeError::Config {
                    message: format!("duplicate evaluation name '{}'", evaluation.name),
                });
            }
        }

        if let Some(level) = self.log_level() {
            validate_non_empty_string("logging.level", level)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[output]
format = "json"

[logging]
level = "addtime=debug"

[[evaluations]]
name = "midnight"
args = ["23:59:59", "PT1S"]

[[evaluations]]
name = "wakeup"
args = ["00:00", "PT6H", true]

[[evaluations]]
name = "numeric"
args = [7, "PT30M"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert_eq!(config.log_level(), Some("addtime=debug"));
        assert!(!config.json_logs());
        assert_eq!(config.evaluations.len(), 3);
        assert_eq!(config.evaluations[1].args, vec![json!("00:00"), json!("PT6H"), json!(true)]);
        assert_eq!(config.evaluations[2].args[0], json!(7));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ADDTIME_TEST_START", "11:03:17");

        let toml_content = r#"
[[evaluations]]
name = "noon"
args = ["${ADDTIME_TEST_START}", "PT56M43S"]

[[evaluations]]
name = "unset"
args = ["${ADDTIME_TEST_UNSET_VAR}", "PT1H"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.evaluations[0].args[0], json!("11:03:17"));
        assert_eq!(config.evaluations[1].args[0], json!("${ADDTIME_TEST_UNSET_VAR}"));

        std::env::remove_var("ADDTIME_TEST_START");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[output]\nformat = \"text\"\n").unwrap();
        assert!(matches!(config.validate(), Err(AddTimeError::Config { .. })));

        let duplicated = r#"
[[evaluations]]
name = "a"
args = ["1", "PT1H"]

[[evaluations]]
name = "a"
args = ["2", "PT1H"]
"#;
        let config = TomlConfig::from_toml_str(duplicated).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_command_line_entry_is_validated() {
        let mut config = TomlConfig::from_toml_str(
            "[[evaluations]]\nname = \"noon\"\nargs = [\"11\", \"PT1H\"]\n",
        )
        .unwrap();
        config.push_command_line(vec![json!("0"), json!("PT1M")]);
        assert!(config.validate().is_ok());
        assert_eq!(config.evaluations[1].name, "command-line");

        let mut clashing = TomlConfig::from_toml_str(
            "[[evaluations]]\nname = \"command-line\"\nargs = [\"11\", \"PT1H\"]\n",
        )
        .unwrap();
        clashing.push_command_line(vec![json!("0"), json!("PT1M")]);
        assert!(matches!(clashing.validate(), Err(AddTimeError::Config { .. })));
    }

    #[test]
    fn test_unknown_output_format_rejected() {
        let result = TomlConfig::from_toml_str("[output]\nformat = \"yaml\"\n");
        assert!(matches!(result, Err(AddTimeError::Config { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[[evaluations]]\nname = \"file-test\"\nargs = [\"0\", \"PT1M\"]\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.evaluations[0].name, "file-test");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TomlConfig::from_file("/nonexistent/addtime.toml");
        assert!(matches!(result, Err(AddTimeError::Io(_))));
    }
}
