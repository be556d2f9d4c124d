//! Bitmap font text
//!
//! The font texture is a 16x16 grid of glyphs indexed by byte value.
//! Each character becomes two triangles, laid out left to right.

use super::vertex::Vertex;
use crate::consts::FONTBANK_SIZE;

/// HUD label for the fuel gauge (whole units, truncated)
pub fn fuel_label(fuel: f32) -> String {
    format!("Fuel: {}", fuel as i32)
}

/// Glyph quads for `text`, origin at the center of the first glyph
pub fn layout_text(text: &str, font_size: f32, spacing: f32) -> Vec<Vertex> {
    let cell = 1.0 / FONTBANK_SIZE as f32;
    let half = 0.5 * font_size;

    let mut vertices = Vec::with_capacity(text.len() * 6);
    for (i, byte) in text.bytes().enumerate() {
        let glyph = byte as u32;
        let offset = (font_size + spacing) * i as f32;

        let u = (glyph % FONTBANK_SIZE) as f32 * cell;
        let v = (glyph / FONTBANK_SIZE) as f32 * cell;

        let (left, right) = (offset - half, offset + half);
        vertices.extend_from_slice(&[
            Vertex::new(left, half, u, v),
            Vertex::new(left, -half, u, v + cell),
            Vertex::new(right, half, u + cell, v),
            Vertex::new(right, -half, u + cell, v + cell),
            Vertex::new(right, half, u + cell, v),
            Vertex::new(left, -half, u, v + cell),
        ]);
    }
    vertices
}
