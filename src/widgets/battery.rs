//! Battery bar and underline painting.
//!
//! The bar is a full-width, 2px strip whose white fill grows from the left
//! edge proportionally to the charge percent. Repainting clears the whole
//! bar region first so a shrinking fill leaves no stale pixels. The
//! underline is the bar's static twin below the date band: always fully
//! filled, painted once at load, never change-detected.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::colors::{BLACK, WHITE};

/// White fill style shared by the bar and the underline.
const FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

/// Fill width in pixels for a charge percent, floor semantics.
///
/// percent 0 -> 0, percent 100 -> `bar_width`, percent 50 -> half rounded
/// down. Callers guarantee percent <= 100 (clamped at the cache boundary).
pub const fn battery_fill_width(percent: u32, bar_width: u32) -> u32 {
    percent * bar_width / 100
}

/// Repaint the battery bar region with the fill for `percent`.
pub fn draw_battery_bar<D>(target: &mut D, bar: Rectangle, percent: u8) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    // Clear the whole strip first; the fill may have shrunk
    bar.into_styled(PrimitiveStyle::with_fill(BLACK)).draw(target)?;

    let fill = battery_fill_width(u32::from(percent), bar.size.width);
    if fill > 0 {
        Rectangle::new(bar.top_left, Size::new(fill, bar.size.height))
            .into_styled(FILL_STYLE)
            .draw(target)?;
    }
    Ok(())
}

/// Paint the static underline: the region, fully filled.
pub fn draw_underline<D>(target: &mut D, underline: Rectangle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    underline.into_styled(FILL_STYLE).draw(target)
}

// =============================================================================
// Unit Tests
// =============================================================================
