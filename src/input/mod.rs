pub mod stdin;

#[cfg(test)]
pub mod scripted;

use crate::errors::ResumeError;

/// Hint for the surface on how to present a prompt. The builder owns all
/// validation; the kind only shapes the prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Year,
    Date,
    /// A delimiter-separated list entered as one value.
    List,
}

/// Capability interface between the builder and whatever collects values from
/// a human. Interactive sessions block per field; scripted sessions replay a
/// fixed sequence. Exhausted input surfaces as [`ResumeError::Input`].
pub trait FieldCollector {
    /// Announces the start of a collection section.
    fn section(&mut self, title: &str);

    /// Requests one raw value for the named field.
    fn request(&mut self, field_name: &str, kind: FieldKind) -> Result<String, ResumeError>;

    /// Reports a rejected value back through the same surface.
    fn reject(&mut self, field_name: &str, reason: &str);
}
