use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while collecting a profile or handing it off
/// to the renderer.
#[derive(Debug, Error)]
pub enum ResumeError {
    /// A required or formatted field never passed its rule. Interactive
    /// sessions recover by re-prompting; this only propagates when the
    /// collection surface runs out of input.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// Profile photo could not be opened, resized, or saved. The run
    /// continues without a photo; the condition is reported, not swallowed.
    #[error("failed to process photo {path}: {source}")]
    Resource {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The external renderer rejected the assembled document.
    #[error("renderer failed: {0}")]
    Render(String),

    /// The collection surface itself failed (closed stdin, I/O error).
    #[error("input unavailable: {0}")]
    Input(#[from] std::io::Error),
}
