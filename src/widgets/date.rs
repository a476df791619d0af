//! Date band painting.
//!
//! The band rectangle geometrically contains the battery bar and the
//! underline, so a date repaint must not clear the full band. Only the text
//! strip between the two bars is cleared, and the glyph draw is clipped to
//! the same strip; the bars survive every band repaint. When the date font
//! failed to load the strip stays blank: the text is skipped, not an error
//! (the face simply has no date until a font exists, which for a fixed
//! resource means never during this session).

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{BLACK, WHITE};
use crate::config::DATE_BASELINE_OFFSET;
use crate::styles::CENTERED;

/// Repaint the date text centered in `band`, clearing and drawing only
/// inside `text_strip`. Leaves the strip blank if the font is absent.
pub fn draw_date_band<D>(
    target: &mut D,
    band: Rectangle,
    text_strip: Rectangle,
    text: &str,
    font: Option<&'static MonoFont<'static>>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    text_strip.into_styled(PrimitiveStyle::with_fill(BLACK)).draw(target)?;

    let Some(font) = font else {
        return Ok(());
    };

    let anchor = Point::new(
        band.top_left.x + band.size.width as i32 / 2,
        band.top_left.y + DATE_BASELINE_OFFSET,
    );
    let mut strip = target.clipped(&text_strip);
    Text::with_text_style(text, anchor, MonoTextStyle::new(font, WHITE), CENTERED)
        .draw(&mut strip)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics_simulator::SimulatorDisplay;
    use profont::PROFONT_24_POINT;

    // Reference geometry: band y=99..129, strip y=103..125
    fn band() -> Rectangle {
        Rectangle::new(Point::new(0, 99), Size::new(200, 30))
    }

    fn strip() -> Rectangle {
        Rectangle::new(Point::new(0, 103), Size::new(200, 22))
    }

    fn white_display() -> SimulatorDisplay<Rgb565> {
        let mut display = SimulatorDisplay::new(Size::new(200, 228));
        display.clear(WHITE).unwrap();
        display
    }

    #[test]
    fn test_repaint_stays_inside_text_strip() {
        let mut display = white_display();

        draw_date_band(&mut display, band(), strip(), "Sat 21 Jun", Some(&PROFONT_24_POINT))
            .unwrap();

        // The band rows above and below the strip belong to the bars
        assert_eq!(display.get_pixel(Point::new(10, 101)), WHITE, "battery bar row untouched");
        assert_eq!(display.get_pixel(Point::new(10, 125)), WHITE, "underline row untouched");
        // Inside the strip, away from the glyphs, the clear shows through
        assert_eq!(display.get_pixel(Point::new(10, 110)), BLACK, "strip cleared behind the text");
    }

    #[test]
    fn test_missing_font_clears_strip_only() {
        let mut display = white_display();

        draw_date_band(&mut display, band(), strip(), "Sat 21 Jun", None).unwrap();

        assert_eq!(display.get_pixel(Point::new(10, 110)), BLACK, "strip cleared even without a font");
        assert_eq!(display.get_pixel(Point::new(10, 101)), WHITE, "battery bar row untouched");
        assert_eq!(display.get_pixel(Point::new(10, 125)), WHITE, "underline row untouched");
    }
}
