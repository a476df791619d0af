//! External collaborator seams.
//!
//! The engine consumes its surroundings through two narrow traits instead of
//! calling host APIs directly:
//!
//! - [`GlyphSlot`]: one big-digit widget instance. The engine pushes digit
//!   values into it and asks for its drawable region; how the digit is
//!   actually rasterized is the widget's private concern.
//! - [`Platform`]: the remaining host services — glyph creation and shared
//!   image teardown, date font loading, quiet-hours policy, and the
//!   vibration alert. All of them are infallible from the engine's point of
//!   view except font loading, which reports absence via `Option` and
//!   degrades to a face without date text.
//!
//! The simulator binary provides the real implementations; tests use the
//! recording [`mock`] implementations.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// One big-digit glyph widget instance.
pub trait GlyphSlot {
    /// Push a new digit value (0..=9) into the widget. Does not draw.
    fn set_digit(&mut self, digit: u8);

    /// The widget's drawable region on screen.
    fn region(&self) -> Rectangle;

    /// Repaint the widget into its region. Called by the host for slots the
    /// dispatcher marked dirty.
    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>;
}

/// Host services consumed by the watchface.
pub trait Platform {
    type Slot: GlyphSlot;

    /// Create a glyph widget anchored at `origin`, showing `initial_digit`.
    fn create_glyph(&mut self, origin: Point, initial_digit: u8) -> Self::Slot;

    /// Release image resources shared by all glyph widgets. Called exactly
    /// once during teardown, after every slot has been destroyed.
    fn unload_glyph_images(&mut self);

    /// Load the date font. `None` means the resource is unavailable; the
    /// face then skips date text instead of failing.
    fn load_date_font(&mut self) -> Option<&'static MonoFont<'static>>;

    /// Whether the user's quiet-hours policy is currently active. Consulted
    /// only for the top-of-hour chime decision.
    fn is_quiet_time_active(&self) -> bool;

    /// Fire the double vibration pulse. Fire-and-forget: no retry, no
    /// acknowledgement.
    fn trigger_double_pulse(&mut self);
}

// =============================================================================
// Recording Mock (test builds only)
// =============================================================================

#[cfg(test)]
pub mod mock {
    //! Recording platform for unit tests: counts every service call and lets
    //! tests script quiet hours and font availability.

    use super::*;
    use profont::PROFONT_24_POINT;

    /// Glyph widget that records `set_digit` calls instead of drawing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MockSlot {
        pub origin: Point,
        pub digit: u8,
        pub set_calls: usize,
    }

    impl GlyphSlot for MockSlot {
        fn set_digit(&mut self, digit: u8) {
            self.digit = digit;
            self.set_calls += 1;
        }

        fn region(&self) -> Rectangle {
            Rectangle::new(self.origin, Size::new(80, 100))
        }

        fn draw<D>(&self, _target: &mut D) -> Result<(), D::Error>
        where
            D: DrawTarget<Color = Rgb565>,
        {
            Ok(())
        }
    }

    /// Scriptable host services with call counters.
    pub struct MockPlatform {
        /// When false, `load_date_font` simulates a resource failure.
        pub font_available: bool,
        /// Scripted quiet-hours answer.
        pub quiet: bool,
        pub glyphs_created: usize,
        pub images_unloaded: usize,
        pub pulses: usize,
    }

    impl MockPlatform {
        pub fn new() -> Self {
            Self {
                font_available: true,
                quiet: false,
                glyphs_created: 0,
                images_unloaded: 0,
                pulses: 0,
            }
        }
    }

    impl Platform for MockPlatform {
        type Slot = MockSlot;

        fn create_glyph(&mut self, origin: Point, initial_digit: u8) -> MockSlot {
            self.glyphs_created += 1;
            MockSlot {
                origin,
                digit: initial_digit,
                set_calls: 0,
            }
        }

        fn unload_glyph_images(&mut self) {
            self.images_unloaded += 1;
        }

        fn load_date_font(&mut self) -> Option<&'static MonoFont<'static>> {
            self.font_available.then_some(&PROFONT_24_POINT)
        }

        fn is_quiet_time_active(&self) -> bool {
            self.quiet
        }

        fn trigger_double_pulse(&mut self) {
            self.pulses += 1;
        }
    }
}
