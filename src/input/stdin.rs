use std::io::{self, Write};

use colored::Colorize;

use crate::errors::ResumeError;
use crate::input::{FieldCollector, FieldKind};

/// Blocking terminal prompts, one read per field.
#[derive(Debug, Default)]
pub struct StdinCollector;

impl StdinCollector {
    pub fn new() -> Self {
        Self
    }

    fn hint(kind: FieldKind) -> &'static str {
        match kind {
            FieldKind::Email => " (e.g. jane@example.com)",
            FieldKind::Phone => " (digits, optional leading +)",
            FieldKind::Year => " (e.g. 2021)",
            FieldKind::Date => " (YYYY-MM or 'Present')",
            FieldKind::List => " (delimiter-separated)",
            FieldKind::Text => "",
        }
    }
}

impl FieldCollector for StdinCollector {
    fn section(&mut self, title: &str) {
        println!("\n{}", format!("=== {} ===", title).cyan().bold());
    }

    fn request(&mut self, field_name: &str, kind: FieldKind) -> Result<String, ResumeError> {
        print!("{}", format!("Enter {}{}: ", field_name, Self::hint(kind)).cyan());
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes = io::stdin().read_line(&mut input)?;
        if bytes == 0 {
            // ctrl-D / closed stdin mid-session
            return Err(ResumeError::Input(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            )));
        }

        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }

    fn reject(&mut self, field_name: &str, reason: &str) {
        println!(
            "{}",
            format!("Invalid {}: {}. Please try again.", field_name, reason).red()
        );
    }
}
