use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Input stream closed before an answer was given")]
    InputClosed,

    #[error("Prompt session is already closed")]
    SessionClosed,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DemoError {
    /// Short hint printed next to configuration failures.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::Http(_) | DemoError::Decode(_) => {
                "Check network connectivity and that the endpoint returns JSON"
            }
            DemoError::TomlParse(_) | DemoError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML"
            }
            DemoError::InvalidConfigValueError { .. } => {
                "Fix the reported value or drop it to use the default"
            }
            DemoError::InputClosed | DemoError::SessionClosed => {
                "Run the program from an interactive terminal"
            }
            DemoError::Io(_) => "Retry the run",
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
