use std::path::Path;

use anyhow::{Context, Result};
use quickstart_core::coords::Vec2;

/// Reads the texture header and returns its size in pixels.
///
/// Pixel data is not decoded; the renderer owns the actual upload.
pub fn probe_texture(path: impl AsRef<Path>) -> Result<Vec2> {
    let path = path.as_ref();
    let (w, h) = image::image_dimensions(path).with_context(|| {
        let cwd = std::env::current_dir().unwrap_or_default();
        format!(
            "could not load texture '{}' (working directory: {})",
            path.display(),
            cwd.display()
        )
    })?;

    log::debug!("texture {}: {w}x{h}", path.display());
    Ok(Vec2::new(w as f32, h as f32))
}

/// `true` when the music stream exists as a regular file.
pub fn music_available(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}
