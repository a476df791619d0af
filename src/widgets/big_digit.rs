//! Seven-segment big-digit glyph widget.
//!
//! The simulator's implementation of [`GlyphSlot`]: each digit 0..=9 is a
//! const bitmask over the classic seven segments, rendered as filled
//! rectangles inside the glyph's bounding box. The reference face drew its
//! digits from bitmap images; how a digit gets onto the screen is the
//! widget's private concern, and segments need no image resources at all
//! (so the platform's shared-image teardown has nothing to release here).
//!
//! # Segment Layout
//!
//! ```text
//!  ┌─ A ─┐
//!  F     B
//!  ├─ G ─┤
//!  E     C
//!  └─ D ─┘
//! ```
//!
//! Bit order in [`SEGMENTS`]: bit 0 = A through bit 6 = G.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::colors::{BLACK, WHITE};
use crate::config::{GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::platform::GlyphSlot;

/// Number of segments in one glyph.
const SEGMENT_COUNT: usize = 7;

/// Stroke thickness of one segment in pixels.
const SEGMENT_THICKNESS: i32 = 12;

/// Lit-segment bitmask per digit, bit 0 = A .. bit 6 = G.
const SEGMENTS: [u8; 10] = [
    0b011_1111, // 0: ABCDEF
    0b000_0110, // 1: BC
    0b101_1011, // 2: ABDEG
    0b100_1111, // 3: ABCDG
    0b110_0110, // 4: BCFG
    0b110_1101, // 5: ACDFG
    0b111_1101, // 6: ACDEFG
    0b000_0111, // 7: ABC
    0b111_1111, // 8: ABCDEFG
    0b110_1111, // 9: ABCDFG
];

/// Rectangle of segment `index` (0 = A .. 6 = G) relative to `origin`.
const fn segment_rect(index: usize, origin: Point) -> Rectangle {
    let w = GLYPH_WIDTH;
    let h = GLYPH_HEIGHT;
    let t = SEGMENT_THICKNESS;
    let half = h / 2;

    let (x, y, width, height) = match index {
        0 => (0, 0, w, t),                 // A: top bar
        1 => (w - t, 0, t, half),          // B: top right
        2 => (w - t, half, t, h - half),   // C: bottom right
        3 => (0, h - t, w, t),             // D: bottom bar
        4 => (0, half, t, h - half),       // E: bottom left
        5 => (0, 0, t, half),              // F: top left
        _ => (0, half - t / 2, w, t),      // G: middle bar
    };

    Rectangle::new(
        Point::new(origin.x + x, origin.y + y),
        Size::new(width as u32, height as u32),
    )
}

/// One on-screen big digit.
///
/// Created once at window load, anchored at a layout-derived origin, and
/// destroyed at unload. Holds only its anchor and current value; drawing is
/// stateless over those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentGlyph {
    origin: Point,
    digit: u8,
}

impl SegmentGlyph {
    pub fn new(origin: Point, initial_digit: u8) -> Self {
        Self {
            origin,
            digit: initial_digit.min(9),
        }
    }

    /// Currently displayed digit.
    pub const fn digit(&self) -> u8 {
        self.digit
    }
}

impl GlyphSlot for SegmentGlyph {
    fn set_digit(&mut self, digit: u8) {
        self.digit = digit.min(9);
    }

    fn region(&self) -> Rectangle {
        Rectangle::new(self.origin, Size::new(GLYPH_WIDTH as u32, GLYPH_HEIGHT as u32))
    }

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        // Clear the whole glyph box, then light the digit's segments
        self.region()
            .into_styled(PrimitiveStyle::with_fill(BLACK))
            .draw(target)?;

        let mask = SEGMENTS[self.digit as usize];
        for segment in 0..SEGMENT_COUNT {
            if mask & (1 << segment) != 0 {
                segment_rect(segment, self.origin)
                    .into_styled(PrimitiveStyle::with_fill(WHITE))
                    .draw(target)?;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
