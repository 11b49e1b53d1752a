use crate::domain::ports::Console;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn log(&self, line: &str) {
        println!("{}", line);
    }
}

/// Records every line in memory. Used to assert on transcripts.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<String>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn transcript(&self) -> String {
        self.lines().join("\n")
    }
}

impl Console for MemoryConsole {
    fn log(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_console_keeps_order() {
        let console = MemoryConsole::new();
        console.log("first");
        console.log("second");

        assert_eq!(console.lines(), vec!["first", "second"]);
        assert_eq!(console.transcript(), "first\nsecond");
    }
}
