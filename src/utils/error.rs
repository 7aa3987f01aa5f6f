use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrocerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unable to open input file '{path}': {source}")]
    InputUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid menu choice: '{input}'")]
    InvalidChoice { input: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
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

impl GrocerError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GrocerError::InvalidChoice { .. } => ErrorSeverity::Low,
            GrocerError::InputUnavailable { .. } => ErrorSeverity::Medium,
            GrocerError::ConfigError { .. } | GrocerError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            GrocerError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度決定退出碼，可恢復的錯誤不改變正常結束的 0
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// 可恢復的錯誤不會中斷互動流程
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GrocerError::InputUnavailable { .. } | GrocerError::InvalidChoice { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GrocerError::IoError(e) => format!("File operation failed: {}", e),
            GrocerError::InputUnavailable { path, .. } => {
                format!("Error: Unable to open input file '{}'.", path)
            }
            GrocerError::InvalidChoice { .. } => {
                "Invalid option. Please enter a number between 1 and 4".to_string()
            }
            GrocerError::ConfigError { message } => format!("Configuration problem: {}", message),
            GrocerError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Setting '{}' has an invalid value '{}': {}", field, value, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GrocerError::IoError(_) => "Check that the working directory is writable",
            GrocerError::InputUnavailable { .. } => {
                "Place the daily input file next to the program or pass --input <path>"
            }
            GrocerError::InvalidChoice { .. } => "Enter 1, 2, 3 or 4",
            GrocerError::ConfigError { .. } => "Make sure the config file exists and is valid TOML",
            GrocerError::InvalidConfigValueError { .. } => {
                "Fix the value in the config file or on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GrocerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        let missing = GrocerError::InputUnavailable {
            path: "missing.txt".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(missing.is_recoverable());
        assert_eq!(missing.severity(), ErrorSeverity::Medium);
        assert!(missing.user_friendly_message().contains("missing.txt"));

        let choice = GrocerError::InvalidChoice {
            input: "abc".to_string(),
        };
        assert!(choice.is_recoverable());

        let config = GrocerError::ConfigError {
            message: "bad".to_string(),
        };
        assert!(!config.is_recoverable());
        assert_eq!(config.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        let choice = GrocerError::InvalidChoice {
            input: "5".to_string(),
        };
        assert_eq!(choice.exit_code(), 0);

        let invalid = GrocerError::InvalidConfigValueError {
            field: "output".to_string(),
            value: "./list.txt".to_string(),
            reason: "same file".to_string(),
        };
        assert_eq!(invalid.exit_code(), 1);

        let io = GrocerError::IoError(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.exit_code(), 3);
    }
}
