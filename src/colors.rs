//! Fixed dark palette for the watchface.
//!
//! The face is intentionally two-tone: white shapes and text on a black
//! background. Using the `RgbColor` trait constants guarantees the optimal
//! Rgb565 values without hand-written channel math.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Window background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Digits, date text, battery bar, underline.
pub const WHITE: Rgb565 = Rgb565::WHITE;
