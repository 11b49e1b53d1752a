pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::domain::model::{DEFAULT_JOKE_ENDPOINT, DEFAULT_QUESTION};
    use crate::domain::ports::DemoSettings;
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_non_empty_string, validate_positive_number, validate_url, Validate,
    };
    use clap::Parser;
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "async-primer")]
    #[command(about = "Walks through synchronous and asynchronous execution patterns")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_JOKE_ENDPOINT)]
        pub joke_endpoint: String,

        #[arg(long, default_value = "3000", help = "Delay before the deferred counter resumes")]
        pub timer_delay_ms: u64,

        #[arg(long, help = "Settle the repayment demonstration successfully")]
        pub will_pay_back: bool,

        #[arg(long, default_value = DEFAULT_QUESTION)]
        pub question: String,

        #[arg(short, long, help = "Read settings from a TOML file instead")]
        pub config: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl DemoSettings for CliConfig {
        fn joke_endpoint(&self) -> &str {
            &self.joke_endpoint
        }

        fn timer_delay(&self) -> Duration {
            Duration::from_millis(self.timer_delay_ms)
        }

        fn will_pay_back(&self) -> bool {
            self.will_pay_back
        }

        fn question(&self) -> &str {
            &self.question
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_url("joke_endpoint", &self.joke_endpoint)?;
            validate_positive_number("timer_delay_ms", self.timer_delay_ms, 1)?;
            validate_non_empty_string("question", &self.question)?;
            Ok(())
        }
    }

}
