//! Ring rotation and glyph color math

use bevy::prelude::*;
use std::f32::consts::TAU;

use crate::scene::{GLYPH_PHASE_OFFSET, RING_STEP};

/// Angular span of the glyph arc: 120 degrees, centered on the ring's
/// forward direction.
pub const ARC_SPAN: f32 = TAU / 3.0;

/// Shared rotation of the ring.
///
/// Unlike the orbital angles, this one is explicitly wrapped into
/// [0, 2*pi): it doubles as a human-visible color phase, and unbounded
/// growth would slowly lose float precision over long runs.
#[derive(Resource, Default)]
pub struct GlyphRing {
    rotation: f32,
}

impl GlyphRing {
    pub fn advance(&mut self) {
        self.rotation = (self.rotation + RING_STEP).rem_euclid(TAU);
    }

    /// Color phase for the glyph at `index`.
    pub fn color_phase(&self, index: usize) -> f32 {
        self.rotation + GLYPH_PHASE_OFFSET * index as f32
    }
}

/// Fixed placement angles for `count` glyphs along the arc.
///
/// A single glyph sits centered; the formula divides by `count - 1`.
pub fn arc_angles(count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..count)
            .map(|i| i as f32 * ARC_SPAN / (count - 1) as f32 - ARC_SPAN / 2.0)
            .collect(),
    }
}

/// Rainbow color from three sine waves 120 degrees apart, each mapped from
/// [-1, 1] to [0, 1].
pub fn rainbow(phase: f32) -> [f32; 3] {
    let third = TAU / 3.0;
    [
        (phase.sin() + 1.0) * 0.5,
        ((phase + third).sin() + 1.0) * 0.5,
        ((phase + 2.0 * third).sin() + 1.0) * 0.5,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_stays_wrapped() {
        let mut ring = GlyphRing::default();
        for _ in 0..100_000 {
            ring.advance();
            assert!(ring.rotation >= 0.0);
            assert!(ring.rotation < TAU);
        }
    }

    #[test]
    fn test_color_phase_offsets_by_index() {
        let mut ring = GlyphRing::default();
        ring.advance();
        let base = ring.color_phase(0);
        for i in 1..12 {
            let expected = base + GLYPH_PHASE_OFFSET * i as f32;
            assert!((ring.color_phase(i) - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_arc_spans_120_degrees() {
        let angles = arc_angles(12);
        assert_eq!(angles.len(), 12);
        assert!((angles[0] + ARC_SPAN / 2.0).abs() < 1e-6);
        assert!((angles[11] - ARC_SPAN / 2.0).abs() < 1e-6);
        for pair in angles.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_single_glyph_is_centered() {
        assert_eq!(arc_angles(1), vec![0.0]);
        assert!(arc_angles(0).is_empty());
    }

    #[test]
    fn test_rainbow_channels_in_bounds() {
        for step in 0..640 {
            let phase = step as f32 * 0.01;
            for channel in rainbow(phase) {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn test_rainbow_channels_are_phase_shifted() {
        let third = TAU / 3.0;
        let [r, _, _] = rainbow(0.7);
        let [_, g, _] = rainbow(0.7 - third);
        let [_, _, b] = rainbow(0.7 - 2.0 * third);
        assert!((r - g).abs() < 1e-6);
        assert!((r - b).abs() < 1e-6);
    }
}
