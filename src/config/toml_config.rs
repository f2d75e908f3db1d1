use crate::utils::error::{CoffeeError, Result};
use crate::utils::validation::{validate_machine_name, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MACHINE_NAME: &str = "Coffee Machine";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub machine: MachineSection,
    pub notifications: Option<NotificationConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineSection {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub ready_message: Option<bool>,
    pub log_events: Option<bool>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            machine: MachineSection {
                name: DEFAULT_MACHINE_NAME.to_string(),
            },
            notifications: None,
        }
    }
}

impl MachineConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CoffeeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CoffeeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MACHINE_NAME})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CoffeeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_machine_name("machine.name", &self.machine.name)
    }

    pub fn ready_message_enabled(&self) -> bool {
        self.notifications
            .as_ref()
            .and_then(|n| n.ready_message)
            .unwrap_or(true)
    }

    pub fn log_events_enabled(&self) -> bool {
        self.notifications
            .as_ref()
            .and_then(|n| n.log_events)
            .unwrap_or(true)
    }
}

impl Validate for MachineConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[machine]
name = "Lobby Barista"

[notifications]
ready_message = true
log_events = false
"#;

        let config = MachineConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.machine.name, "Lobby Barista");
        assert!(config.ready_message_enabled());
        assert!(!config.log_events_enabled());
    }

    #[test]
    fn test_notifications_default_to_enabled() {
        let config = MachineConfig::from_toml_str("[machine]\nname = \"Kitchen\"\n").unwrap();
        assert!(config.ready_message_enabled());
        assert!(config.log_events_enabled());

        let defaults = MachineConfig::default();
        assert_eq!(defaults.machine.name, DEFAULT_MACHINE_NAME);
        assert!(defaults.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("COFFEE_TEST_MACHINE_NAME", "Night Shift");

        let toml_content = r#"
[machine]
name = "${COFFEE_TEST_MACHINE_NAME}"
"#;

        let config = MachineConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.machine.name, "Night Shift");

        std::env::remove_var("COFFEE_TEST_MACHINE_NAME");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[machine]
name = "${COFFEE_TEST_UNSET_VARIABLE}"
"#;

        let config = MachineConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.machine.name, "${COFFEE_TEST_UNSET_VARIABLE}");
    }

    #[test]
    fn test_config_validation() {
        let config = MachineConfig::from_toml_str("[machine]\nname = \"  \"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(CoffeeError::InvalidConfigValueError { ref field, .. }) if field == "machine.name"
        ));
    }

    #[test]
    fn test_missing_machine_section_fails() {
        let err = MachineConfig::from_toml_str("[notifications]\nready_message = false\n")
            .unwrap_err();
        assert!(matches!(err, CoffeeError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[machine]\nname = \"file-test\"\n")
            .unwrap();

        let config = MachineConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.machine.name, "file-test");
    }
}
