//! Layout engine: derives every region of the face from screen geometry.
//!
//! `compute_layout` is a pure function of the screen size and glyph size. It
//! runs exactly once per window lifetime (at load); nothing here is
//! recomputed per tick.
//!
//! # Geometry
//!
//! ```text
//! ┌─────────────────────────┐
//! │   ┌──────┐   ┌──────┐   │
//! │   │ H-10 │   │ H-1  │   │   top digit row
//! │   └──────┘   └──────┘   │
//! │ ━━━━━━━━━━━━━━━━━━━━━━━ │ ← battery bar (fill = charge %)
//! │       Sat 21 Jun        │   date band
//! │ ━━━━━━━━━━━━━━━━━━━━━━━ │ ← underline (static)
//! │   ┌──────┐   ┌──────┐   │
//! │   │ M-10 │   │ M-1  │   │   bottom digit row
//! │   └──────┘   └──────┘   │
//! └─────────────────────────┘
//! ```
//!
//! The four digits form a 2x2 grid centered on the screen, with the date
//! band inserted between the rows. The battery bar and underline span the
//! full width, inset by [`BAR_INSET`] px from the band edges; the text
//! strip between them is the only part of the band that date repaints may
//! touch, so the bars survive every band repaint. Integer math
//! mirrors the reference face: the top row y may be negative when the grid
//! is taller than the screen, which simply crops the top pixel rows.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{BAR_INSET, BAR_THICKNESS, DATE_BAND_HEIGHT, DIGIT_SPACING};

/// Physical screen size in pixels. Immutable per session; the source of all
/// derived layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenGeometry {
    pub width: i32,
    pub height: i32,
}

impl ScreenGeometry {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Derived region layout, read-only once computed.
///
/// Digit anchor order matches the slot order everywhere else in the crate:
/// hour-tens, hour-units, minute-tens, minute-units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRects {
    /// Battery bar: full width, [`BAR_THICKNESS`] tall, above the date band.
    pub battery_bar: Rectangle,
    /// Static underline: full width, below the date band. Painted once.
    pub underline: Rectangle,
    /// Date text band: full width, [`DATE_BAND_HEIGHT`] tall, centered.
    /// Contains the battery bar and the underline, so a date repaint must
    /// never clear this whole rect.
    pub date_band: Rectangle,
    /// Text strip inside the date band, between the two bars. The only part
    /// of the band a date repaint may clear or draw into.
    pub date_text_clear: Rectangle,
    /// Top-left anchor of each digit glyph.
    pub digit_origins: [Point; 4],
}

/// Compute the full region layout for a screen and glyph size.
///
/// Pure and deterministic: same inputs always produce identical rectangles.
/// Must be re-run if and only if the screen geometry changes, which in
/// practice means once per window lifetime.
pub fn compute_layout(screen: ScreenGeometry, glyph_width: i32, glyph_height: i32) -> LayoutRects {
    // Digit grid: two columns / two rows centered around the date band
    let left_x = (screen.width - 2 * glyph_width - DIGIT_SPACING) / 2;
    let right_x = left_x + glyph_width + DIGIT_SPACING;
    let top_y = (screen.height - 2 * glyph_height - DATE_BAND_HEIGHT) / 2;
    let bottom_y = top_y + glyph_height + DATE_BAND_HEIGHT;

    let band_top = (screen.height - DATE_BAND_HEIGHT) / 2;
    let band_bottom = (screen.height + DATE_BAND_HEIGHT) / 2;

    LayoutRects {
        battery_bar: Rectangle::new(
            Point::new(0, band_top + BAR_INSET),
            Size::new(screen.width as u32, BAR_THICKNESS as u32),
        ),
        underline: Rectangle::new(
            Point::new(0, band_bottom - BAR_THICKNESS - BAR_INSET),
            Size::new(screen.width as u32, BAR_THICKNESS as u32),
        ),
        date_band: Rectangle::new(
            Point::new(0, band_top),
            Size::new(screen.width as u32, DATE_BAND_HEIGHT as u32),
        ),
        date_text_clear: Rectangle::new(
            Point::new(0, band_top + BAR_INSET + BAR_THICKNESS),
            Size::new(
                screen.width as u32,
                (DATE_BAND_HEIGHT - 2 * (BAR_INSET + BAR_THICKNESS)) as u32,
            ),
        ),
        digit_origins: [
            Point::new(left_x, top_y),
            Point::new(right_x, top_y),
            Point::new(left_x, bottom_y),
            Point::new(right_x, bottom_y),
        ],
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GLYPH_HEIGHT, GLYPH_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};

    fn reference_layout() -> LayoutRects {
        // The reference face: 200x228 screen, 80x100 glyphs
        compute_layout(ScreenGeometry::new(SCREEN_WIDTH, SCREEN_HEIGHT), GLYPH_WIDTH, GLYPH_HEIGHT)
    }

    // -------------------------------------------------------------------------
    // Determinism
    // -------------------------------------------------------------------------

    #[test]
    fn test_layout_is_deterministic() {
        let a = reference_layout();
        let b = reference_layout();
        assert_eq!(a, b, "same geometry inputs must produce identical layouts");
    }

    // -------------------------------------------------------------------------
    // Digit Grid
    // -------------------------------------------------------------------------

    #[test]
    fn test_digit_columns() {
        let layout = reference_layout();

        // left = (200 - 2*80 - 2) / 2 = 19; right = 19 + 80 + 2 = 101
        assert_eq!(layout.digit_origins[0].x, 19, "left column x should be 19");
        assert_eq!(layout.digit_origins[1].x, 101, "right column x should be 101");
        assert_eq!(
            layout.digit_origins[2].x, layout.digit_origins[0].x,
            "minute-tens shares the left column"
        );
        assert_eq!(
            layout.digit_origins[3].x, layout.digit_origins[1].x,
            "minute-units shares the right column"
        );
    }

    #[test]
    fn test_digit_rows() {
        let layout = reference_layout();

        // top = (228 - 2*100 - 30) / 2 = -1: the grid is 2px taller than the
        // screen, so the top row starts one pixel above the visible area
        assert_eq!(layout.digit_origins[0].y, -1, "top row y should be -1");
        assert_eq!(layout.digit_origins[1].y, -1, "both top anchors share a row");

        // bottom = -1 + 100 + 30 = 129
        assert_eq!(layout.digit_origins[2].y, 129, "bottom row y should be 129");
        assert_eq!(layout.digit_origins[3].y, 129, "both bottom anchors share a row");
    }

    // -------------------------------------------------------------------------
    // Bars and Date Band
    // -------------------------------------------------------------------------

    #[test]
    fn test_battery_bar_rect() {
        let layout = reference_layout();

        // y = (228 - 30)/2 + 2 = 101, full width, 2px thick
        assert_eq!(layout.battery_bar.top_left, Point::new(0, 101));
        assert_eq!(layout.battery_bar.size, Size::new(200, 2), "bar spans full width, 2px thick");
    }

    #[test]
    fn test_underline_rect() {
        let layout = reference_layout();

        // y = (228 + 30)/2 - 2 - 2 = 125, mirrored offset below the midline
        assert_eq!(layout.underline.top_left, Point::new(0, 125));
        assert_eq!(layout.underline.size, Size::new(200, 2), "underline spans full width, 2px thick");
    }

    #[test]
    fn test_bars_mirror_around_date_band() {
        let layout = reference_layout();

        let band_top = layout.date_band.top_left.y;
        let band_bottom = band_top + layout.date_band.size.height as i32;

        let bar_inset_from_top = layout.battery_bar.top_left.y - band_top;
        let underline_inset_from_bottom =
            band_bottom - (layout.underline.top_left.y + layout.underline.size.height as i32);
        assert_eq!(
            bar_inset_from_top, underline_inset_from_bottom,
            "battery bar and underline should be inset symmetrically"
        );
    }

    #[test]
    fn test_date_band_rect() {
        let layout = reference_layout();

        // y = (228 - 30)/2 = 99, full width, 30px tall
        assert_eq!(layout.date_band.top_left, Point::new(0, 99));
        assert_eq!(layout.date_band.size, Size::new(200, 30));
    }

    #[test]
    fn test_date_text_clear_rect() {
        let layout = reference_layout();

        // y = 99 + 2 + 2 = 103, height = 30 - 2*(2+2) = 22
        assert_eq!(layout.date_text_clear.top_left, Point::new(0, 103));
        assert_eq!(layout.date_text_clear.size, Size::new(200, 22));
    }

    #[test]
    fn test_text_strip_disjoint_from_bars() {
        let layout = reference_layout();

        // The band contains both bars; the strip must clear neither
        assert!(
            layout.date_text_clear.intersection(&layout.battery_bar).is_zero_sized(),
            "text strip must not overlap the battery bar"
        );
        assert!(
            layout.date_text_clear.intersection(&layout.underline).is_zero_sized(),
            "text strip must not overlap the underline"
        );
        assert_eq!(
            layout.date_band.intersection(&layout.date_text_clear),
            layout.date_text_clear,
            "text strip sits fully inside the date band"
        );
    }

    // -------------------------------------------------------------------------
    // Alternate Geometry
    // -------------------------------------------------------------------------

    #[test]
    fn test_layout_scales_with_geometry() {
        // A wider screen shifts the columns right but keeps the grid centered
        let layout = compute_layout(ScreenGeometry::new(300, 228), GLYPH_WIDTH, GLYPH_HEIGHT);

        assert_eq!(layout.digit_origins[0].x, 69, "left = (300 - 162) / 2");
        assert_eq!(layout.digit_origins[1].x, 151, "right = left + 80 + 2");
        assert_eq!(layout.battery_bar.size.width, 300, "bar tracks screen width");
    }
}
