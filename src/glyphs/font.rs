//! Embedded bitmap font and one-shot glyph rasterization
//!
//! Covers exactly the characters the ring text uses. Each glyph is an 8x8
//! bitmask, upscaled into a white alpha-masked texture once at startup;
//! unknown characters render as a solid block so a bad string is visible
//! instead of invisible.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

/// Side length of a glyph cell in font rows/columns.
const CELL: u32 = 8;
/// Upscale factor from font cell to texture pixels.
const SCALE: u32 = 8;
/// Side length of the resulting square texture.
pub const GLYPH_TEXTURE_SIZE: u32 = CELL * SCALE;

const FALLBACK_BLOCK: [u8; 8] = [
    0b00000000, 0b01111110, 0b01111110, 0b01111110, 0b01111110, 0b01111110, 0b01111110, 0b00000000,
];

/// Row bitmasks for one character; bit 7 is the leftmost column.
fn glyph_rows(ch: char) -> [u8; 8] {
    match ch.to_ascii_uppercase() {
        ' ' => [0; 8],
        'A' => [
            0b00111000, 0b01101100, 0b11000110, 0b11000110, 0b11111110, 0b11000110, 0b11000110,
            0b00000000,
        ],
        'E' => [
            0b11111110, 0b11000000, 0b11000000, 0b11111100, 0b11000000, 0b11000000, 0b11111110,
            0b00000000,
        ],
        'L' => [
            0b11000000, 0b11000000, 0b11000000, 0b11000000, 0b11000000, 0b11000000, 0b11111110,
            0b00000000,
        ],
        'M' => [
            0b11000110, 0b11101110, 0b11111110, 0b11010110, 0b11000110, 0b11000110, 0b11000110,
            0b00000000,
        ],
        'O' => [
            0b01111100, 0b11000110, 0b11000110, 0b11000110, 0b11000110, 0b11000110, 0b01111100,
            0b00000000,
        ],
        'R' => [
            0b11111100, 0b11000110, 0b11000110, 0b11111100, 0b11011000, 0b11001100, 0b11000110,
            0b00000000,
        ],
        'S' => [
            0b01111110, 0b11000000, 0b11000000, 0b01111100, 0b00000110, 0b00000110, 0b11111100,
            0b00000000,
        ],
        'T' => [
            0b11111110, 0b00111000, 0b00111000, 0b00111000, 0b00111000, 0b00111000, 0b00111000,
            0b00000000,
        ],
        'Y' => [
            0b11000110, 0b11000110, 0b01101100, 0b00111000, 0b00111000, 0b00111000, 0b00111000,
            0b00000000,
        ],
        _ => FALLBACK_BLOCK,
    }
}

/// Rasterize one character into a white, alpha-masked texture.
pub fn rasterize_glyph(ch: char) -> Image {
    let rows = glyph_rows(ch);
    let size = GLYPH_TEXTURE_SIZE;
    let mut data = vec![0u8; (size * size * 4) as usize];
    for py in 0..size {
        let row = rows[(py / SCALE) as usize];
        for px in 0..size {
            if row & (0x80 >> (px / SCALE)) != 0 {
                let i = ((py * size + px) * 4) as usize;
                data[i..i + 4].copy_from_slice(&[0xFF; 4]);
            }
        }
    }
    Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}
