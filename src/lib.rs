pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{ManualScheduler, MemoryConsole, StdoutConsole, TokioScheduler};
pub use crate::core::{demo::DemoRunner, prompt::PromptSession};
pub use domain::ports::{Console, DemoSettings, Scheduler};
pub use utils::error::{DemoError, Result};
