use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoffeeError {
    #[error("Invalid bean type: {0}")]
    UnknownBeanType(String),

    #[error("Invalid {stage} choice: {choice}")]
    InvalidChoice { stage: &'static str, choice: i64 },

    #[error("Expected a number but got '{input}': {source}")]
    InvalidInput {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Input closed before a choice was made")]
    InputClosed,

    #[error("Selection already finished in state {state}")]
    SelectionOutOfOrder { state: String },

    #[error("Notifier '{name}' failed: {message}")]
    Notifier { name: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CoffeeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoffeeError::InvalidChoice { .. } | CoffeeError::Notifier { .. } => ErrorSeverity::Low,
            CoffeeError::InvalidInput { .. } | CoffeeError::InputClosed => ErrorSeverity::Medium,
            CoffeeError::UnknownBeanType(_)
            | CoffeeError::SelectionOutOfOrder { .. }
            | CoffeeError::ConfigError { .. }
            | CoffeeError::ConfigValidationError { .. }
            | CoffeeError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            CoffeeError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CoffeeError::UnknownBeanType(bean) => {
                format!("The machine does not know how to brew '{}'", bean)
            }
            CoffeeError::InvalidChoice { stage, choice } => {
                format!("{} is not a valid {} option", choice, stage)
            }
            CoffeeError::InvalidInput { input, .. } => {
                format!("'{}' is not a number", input.trim())
            }
            CoffeeError::InputClosed => "No choice was entered".to_string(),
            CoffeeError::IoError(e) => format!("Console or file access failed: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CoffeeError::UnknownBeanType(_) => "Use one of the supported bean types: espresso, americano",
            CoffeeError::InvalidChoice { .. } => "Pick one of the numbers shown in the menu",
            CoffeeError::InvalidInput { .. } => "Enter the number of a menu option, for example 1",
            CoffeeError::InputClosed => "Run the machine again and answer both prompts",
            CoffeeError::SelectionOutOfOrder { .. } => "Start a new selection for each brew",
            CoffeeError::Notifier { .. } => "Check the notification settings in the config file",
            CoffeeError::IoError(_) => "Check that the terminal and config file are accessible",
            CoffeeError::ConfigError { .. }
            | CoffeeError::ConfigValidationError { .. }
            | CoffeeError::InvalidConfigValueError { .. } => {
                "Fix the config file or command line arguments and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CoffeeError>;
