//! Pre-computed static text styles.
//!
//! The date text style cannot be fully `const` because the font is a
//! runtime-loaded resource that may be absent (see
//! [`Platform::load_date_font`](crate::platform::Platform::load_date_font)).
//! The alignment style and the default font reference are compile-time
//! constants; callers build `MonoTextStyle::new(font, WHITE)` at the use
//! site with whichever font handle the platform returned.

use embedded_graphics::{
    mono_font::MonoFont,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

/// Centered text alignment. Used for the date text inside the date band.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Default date font (`ProFont` 24pt) handed out by the simulator platform.
pub const DATE_FONT: &MonoFont = &PROFONT_24_POINT;
