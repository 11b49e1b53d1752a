// Adapters layer: concrete implementations of the domain ports.

pub mod console;
pub mod scheduler;

pub use console::{MemoryConsole, StdoutConsole};
pub use scheduler::{ManualScheduler, TokioScheduler};
