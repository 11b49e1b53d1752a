use crate::domain::model::{
    DEFAULT_JOKE_ENDPOINT, DEFAULT_QUESTION, DEFAULT_TIMER_DELAY, DEFAULT_WILL_PAY_BACK,
};
use crate::domain::ports::DemoSettings;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// File-based settings. Every section and key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub fetch: Option<FetchConfig>,
    pub timer: Option<TimerConfig>,
    pub settlement: Option<SettlementConfig>,
    pub prompt: Option<PromptConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementConfig {
    pub will_pay_back: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    pub question: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DemoError::ConfigError {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }

    fn delay_ms(&self) -> u64 {
        self.timer
            .as_ref()
            .and_then(|t| t.delay_ms)
            .unwrap_or(DEFAULT_TIMER_DELAY.as_millis() as u64)
    }
}

impl DemoSettings for TomlConfig {
    fn joke_endpoint(&self) -> &str {
        self.fetch
            .as_ref()
            .and_then(|f| f.endpoint.as_deref())
            .unwrap_or(DEFAULT_JOKE_ENDPOINT)
    }

    fn timer_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms())
    }

    fn will_pay_back(&self) -> bool {
        self.settlement
            .as_ref()
            .and_then(|s| s.will_pay_back)
            .unwrap_or(DEFAULT_WILL_PAY_BACK)
    }

    fn question(&self) -> &str {
        self.prompt
            .as_ref()
            .and_then(|p| p.question.as_deref())
            .unwrap_or(DEFAULT_QUESTION)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("fetch.endpoint", self.joke_endpoint())?;
        validate_positive_number("timer.delay_ms", self.delay_ms(), 1)?;
        validate_non_empty_string("prompt.question", self.question())?;
        Ok(())
    }
}
