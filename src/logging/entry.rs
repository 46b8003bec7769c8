//! One formatted console line.

use std::fmt;

use tracing::Level;

/// A log event ready to be written to the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    /// Structured fields in the order they were recorded
    pub fields: Vec<(String, String)>,
}

impl ConsoleEntry {
    pub fn new(level: Level, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            target: target.into(),
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// `[target] message key=value key=value`
    pub fn to_line(&self) -> String {
        let mut line = format!("[{}] {}", self.target, self.message);
        for (name, value) in &self.fields {
            line.push(' ');
            line.push_str(name);
            line.push('=');
            if value.is_empty() || value.contains(char::is_whitespace) {
                line.push_str(&format!("{:?}", value));
            } else {
                line.push_str(value);
            }
        }
        line
    }
}

impl fmt::Display for ConsoleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}
