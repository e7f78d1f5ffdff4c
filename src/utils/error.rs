use thiserror::Error;

#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("Failed to start `{command}`: {source}")]
    SpawnError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Process,
    Terminal,
}

impl LauncherError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LauncherError::SpawnError { .. } => ErrorCategory::Process,
            LauncherError::IoError(_) => ErrorCategory::Terminal,
            LauncherError::ConfigError { .. }
            | LauncherError::ConfigValidationError { .. }
            | LauncherError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            LauncherError::SpawnError { command, .. } => {
                format!("Could not start `{}`", command)
            }
            LauncherError::IoError(e) => format!("Terminal I/O failed: {}", e),
            LauncherError::ConfigError { message } => format!("Invalid configuration: {}", message),
            LauncherError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            LauncherError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration value for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Process => {
                "Check that the Python interpreter is installed, or pass --python <PROGRAM>"
            }
            ErrorCategory::Terminal => "Run molecule-x from an interactive terminal",
            ErrorCategory::Configuration => {
                "Fix molecule-x.toml or the command-line overrides and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LauncherError>;
