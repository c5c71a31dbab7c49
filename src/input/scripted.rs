use std::collections::VecDeque;
use std::io;

use crate::errors::ResumeError;
use crate::input::{FieldCollector, FieldKind};

/// Replays a fixed input sequence so builder tests run without a terminal.
/// Running out of script is the non-interactive analogue of a user who never
/// supplies a valid value.
pub struct ScriptedCollector {
    inputs: VecDeque<String>,
    pub sections: Vec<String>,
    pub rejections: Vec<(String, String)>,
}

impl ScriptedCollector {
    pub fn new<'a, I: IntoIterator<Item = &'a str>>(inputs: I) -> Self {
        Self {
            inputs: inputs.into_iter().map(String::from).collect(),
            sections: Vec::new(),
            rejections: Vec::new(),
        }
    }
}

impl FieldCollector for ScriptedCollector {
    fn section(&mut self, title: &str) {
        self.sections.push(title.to_string());
    }

    fn request(&mut self, _field_name: &str, _kind: FieldKind) -> Result<String, ResumeError> {
        self.inputs.pop_front().ok_or_else(|| {
            ResumeError::Input(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "script exhausted",
            ))
        })
    }

    fn reject(&mut self, field_name: &str, reason: &str) {
        self.rejections
            .push((field_name.to_string(), reason.to_string()));
    }
}
