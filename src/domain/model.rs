use std::time::Duration;

pub const DEFAULT_JOKE_ENDPOINT: &str = "https://official-joke-api.appspot.com/random_joke";
pub const DEFAULT_TIMER_DELAY: Duration = Duration::from_millis(3000);
pub const DEFAULT_QUESTION: &str = "What time is it? ";
pub const DEFAULT_WILL_PAY_BACK: bool = false;

/// Decoded body of the joke API. The schema belongs to the remote service.
pub type JokePayload = serde_json::Value;

/// Settled value of the repayment demonstration.
pub type Repayment = std::result::Result<u32, String>;
