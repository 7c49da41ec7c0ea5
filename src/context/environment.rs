//! Environment struct (stdin/stdout/etc.)

use std::io::{self, Read, Stdin};

/// Execution environment
pub struct Environment {
    pub stdin: Stdin,
    pub stdin_isatty: bool,
    pub program_name: String,
}

impl Environment {
    pub fn init() -> Self {
        Self::default()
    }

    /// Read a command piped on stdin. Returns `None` when stdin is a terminal.
    pub fn read_piped_stdin(&self) -> io::Result<Option<String>> {
        if self.stdin_isatty {
            return Ok(None);
        }
        let mut content = String::new();
        self.stdin.lock().read_to_string(&mut content)?;
        Ok(Some(content))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            stdin: io::stdin(),
            stdin_isatty: atty::is(atty::Stream::Stdin),
            program_name: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}
