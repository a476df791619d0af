//! Visual components of the watchface.
//!
//! - [`big_digit`]: seven-segment glyph widget (the simulator's
//!   [`GlyphSlot`](crate::platform::GlyphSlot) implementation)
//! - [`battery`]: battery bar fill and the static underline
//! - [`date`]: date text band
//!
//! Every paint function takes a generic `DrawTarget<Color = Rgb565>` and
//! repaints only its own region; region selection is the dispatcher's job,
//! not the widgets'.

pub mod battery;
pub mod big_digit;
pub mod date;
