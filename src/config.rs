//! Watchface configuration constants.
//!
//! Screen and glyph dimensions feed the layout engine once at window load;
//! everything below them is a fixed design constant of the face. Dimensions
//! are `i32` because layout math can legitimately go negative (a 2x100 px
//! glyph grid plus the date band is taller than the 228 px screen, so the
//! top digit row starts one pixel above the visible area).

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: i32 = 200;

/// Display height in pixels.
pub const SCREEN_HEIGHT: i32 = 228;

// =============================================================================
// Glyph Configuration
// =============================================================================

/// Width of one big-digit glyph in pixels.
pub const GLYPH_WIDTH: i32 = 80;

/// Height of one big-digit glyph in pixels.
pub const GLYPH_HEIGHT: i32 = 100;

/// Horizontal gap between the two digit columns.
pub const DIGIT_SPACING: i32 = 2;

// =============================================================================
// Date Band and Bar Configuration
// =============================================================================

/// Height of the horizontal date band between the two digit rows.
pub const DATE_BAND_HEIGHT: i32 = 30;

/// Thickness of the battery bar and the underline.
pub const BAR_THICKNESS: i32 = 2;

/// Vertical inset of the battery bar / underline from the date band edges.
pub const BAR_INSET: i32 = 2;

/// Maximum length of the formatted date text (`%a %d %b` needs 10).
pub const DATE_TEXT_MAX: usize = 15;

/// Baseline offset of the date text inside the date band.
pub const DATE_BASELINE_OFFSET: i32 = 22;

// =============================================================================
// Behavior Configuration
// =============================================================================

/// Whether the top-of-hour double-pulse chime is enabled.
pub const HOURLY_CHIME: bool = true;

/// Quiet hours start (inclusive, 24h clock). Chime is suppressed from here.
pub const QUIET_START_HOUR: u32 = 22;

/// Quiet hours end (exclusive, 24h clock).
pub const QUIET_END_HOUR: u32 = 7;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Host poll interval. The face is event-driven (one tick per minute), so the
/// host loop only needs to be responsive to window events, not fast.
pub const FRAME_TIME: Duration = Duration::from_millis(50);
