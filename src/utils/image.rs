use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use log::{debug, info};

use crate::errors::ResumeError;

pub const THUMBNAIL_SIZE: u32 = 150;

/// Resizes the supplied photo to an exact 150x150 thumbnail and writes it
/// next to the other outputs. Lanczos3 keeps the result deterministic across
/// runs. Failures come back as [`ResumeError::Resource`]; the caller decides
/// whether the run continues.
pub fn make_thumbnail(source: &Path, dest_dir: &Path) -> Result<PathBuf, ResumeError> {
    debug!("opening profile photo: {}", source.display());
    let img = image::open(source).map_err(|e| ResumeError::Resource {
        path: source.to_path_buf(),
        source: e,
    })?;

    let thumb = img.resize_exact(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);

    let dest = dest_dir.join("profile_photo_150x150.png");
    thumb.save(&dest).map_err(|e| ResumeError::Resource {
        path: dest.clone(),
        source: e,
    })?;

    info!("profile photo thumbnail written to {}", dest.display());
    Ok(dest)
}
