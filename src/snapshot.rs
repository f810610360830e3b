//! Raster snapshots of the drawing surface.
//!
//! The demo binary has no interactive canvas, so it renders the scene onto a
//! Cairo image surface and writes the result as a PNG. Only the pixels leave
//! the process; the scene itself is never persisted.

use crate::draw::{Color, Scene, Shape, render};
use cairo::{Context, Format, ImageSurface};
use chrono::Local;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while producing a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to prepare image surface: {0}")]
    Surface(#[from] cairo::Error),

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Renders the scene (plus an optional preview) onto a fresh image surface.
///
/// # Arguments
/// * `scene` - Committed shapes to paint
/// * `preview` - Transient shape painted on top, if any
/// * `width`, `height` - Surface dimensions in pixels
/// * `background` - Opaque fill behind the shapes, or `None` for transparency
pub fn render_to_surface(
    scene: &Scene,
    preview: Option<&Shape>,
    width: u32,
    height: u32,
    background: Option<Color>,
) -> Result<ImageSurface, SnapshotError> {
    let surface = ImageSurface::create(Format::ARgb32, width as i32, height as i32)?;
    let ctx = Context::new(&surface)?;

    render::render_scene(&ctx, scene, preview, background);
    drop(ctx);

    Ok(surface)
}

/// Writes a surface to disk as a PNG.
pub fn write_png(surface: &ImageSurface, path: &Path) -> Result<(), SnapshotError> {
    let mut file = File::create(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    surface.write_to_png(&mut file)?;

    log::info!("Snapshot saved to {}", path.display());
    Ok(())
}

/// Default snapshot path: a timestamped PNG in the working directory.
pub fn default_output_path() -> PathBuf {
    let stamp = Local::now().format("%Y-%m-%d_%H%M%S");
    PathBuf::from(format!("vectorpad_{stamp}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_a_timestamped_png() {
        let path = default_output_path();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("vectorpad_"));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn renders_an_empty_scene_to_a_surface() {
        let scene = Scene::new();
        let surface = render_to_surface(&scene, None, 32, 32, None).unwrap();
        assert_eq!(surface.width(), 32);
        assert_eq!(surface.height(), 32);
    }
}
