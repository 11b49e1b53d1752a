pub mod counter;
pub mod demo;
pub mod fetch;
pub mod prompt;
pub mod settlement;

pub use crate::domain::model::{JokePayload, Repayment};
pub use crate::domain::ports::{Console, DemoSettings, Scheduler, Task};
pub use crate::utils::error::Result;
