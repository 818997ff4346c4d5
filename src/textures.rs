//! Texture resource provider
//!
//! Resolves a logical texture name to a file, decodes it, and hands back an
//! image handle. Both "not found" and "won't decode" come back as `None`:
//! the caller degrades to flat-colored rendering either way.

use std::path::{Path, PathBuf};

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

/// Subdirectory searched when the direct path misses.
pub const TEXTURE_DIR: &str = "textures";

/// Resolve a texture name to an existing file.
///
/// Tries the name as a path first, then under the textures subdirectory.
/// Returns `None` if neither exists.
pub fn resolve_texture_path(name: &str) -> Option<PathBuf> {
    let direct = Path::new(name);
    if direct.exists() {
        return Some(direct.to_path_buf());
    }
    let nested = Path::new(TEXTURE_DIR).join(name);
    if nested.exists() {
        return Some(nested);
    }
    None
}

fn decode_texture(path: &Path) -> Result<Image, anyhow::Error> {
    let decoded = image::open(path)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        rgba.into_raw(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    ))
}

/// Load a texture by logical name into the image assets.
///
/// Returns `None` on a missing file or a decode failure; both are logged and
/// non-fatal.
pub fn load_texture(name: &str, images: &mut Assets<Image>) -> Option<Handle<Image>> {
    let Some(path) = resolve_texture_path(name) else {
        warn!("texture {name} not found");
        return None;
    };
    match decode_texture(&path) {
        Ok(texture) => {
            info!("loaded texture {}", path.display());
            Some(images.add(texture))
        }
        Err(err) => {
            warn!("failed to decode texture {}: {err}", path.display());
            None
        }
    }
}
