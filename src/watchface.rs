//! Tick orchestrator: the watchface lifecycle state machine.
//!
//! Owns every piece of face state — the derived layout, the change-detection
//! cache, the four glyph slots, and the date font handle — as one explicit
//! context struct passed nothing through globals. The host drives it with
//! two calls:
//!
//! - [`Watchface::load`]: `Uninitialized -> Active`. Computes the layout,
//!   creates the glyph widgets, loads the date font, and forces one full
//!   initial paint through the unset caches.
//! - [`Watchface::handle_event`]: processes one [`Event`] to completion and
//!   returns the regions the host must repaint. The two event kinds
//!   interleave in arrival order on one logical thread; handlers never
//!   re-enter, so no locking exists anywhere in the engine.
//!
//! [`Watchface::unload`] releases everything exactly once, in a fixed order,
//! with a presence check around each release so teardown of a partially
//! constructed face (e.g. the font never loaded) is safe. `Destroyed` is
//! terminal; events outside `Active` are logged and dropped.
//!
//! # Chime
//!
//! A minute tick whose minute-of-hour is 0 fires the double vibration pulse
//! when the hourly chime is enabled and the platform's quiet-hours policy is
//! inactive. The pulse is fire-and-forget and independent of whether any
//! region changed.

use chrono::{NaiveDateTime, Timelike};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::BLACK;
use crate::config::{GLYPH_HEIGHT, GLYPH_WIDTH, HOURLY_CHIME};
use crate::layout::{LayoutRects, ScreenGeometry, compute_layout};
use crate::platform::{GlyphSlot, Platform};
use crate::render::{RedrawReport, Region, dispatch};
use crate::state::{ChangeSet, DIGIT_SLOT_COUNT, DisplayCache};
use crate::widgets::{battery, date};

/// Lifecycle phase of the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, no resources acquired yet.
    Uninitialized,
    /// Window loaded; events are processed.
    Active,
    /// Teardown in progress.
    Unloading,
    /// Terminal: all resources released.
    Destroyed,
}

/// One host-delivered event. Both kinds arrive serially on one handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Periodic minute tick carrying the current wall-clock time.
    MinuteTick(NaiveDateTime),
    /// Asynchronous battery-level notification (percent, 0..=100).
    Battery(u8),
}

/// The watchface context: all mutable face state in one place.
pub struct Watchface<P: Platform> {
    platform: P,
    phase: Phase,
    geometry: ScreenGeometry,
    layout: Option<LayoutRects>,
    cache: DisplayCache,
    slots: [Option<P::Slot>; DIGIT_SLOT_COUNT],
    date_font: Option<&'static MonoFont<'static>>,
}

impl<P: Platform> Watchface<P> {
    /// Create an uninitialized face. Acquires no resources until `load`.
    pub fn new(platform: P, geometry: ScreenGeometry) -> Self {
        Self {
            platform,
            phase: Phase::Uninitialized,
            geometry,
            layout: None,
            cache: DisplayCache::new(),
            slots: [None, None, None, None],
            date_font: None,
        }
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Window load: compute layout, create widgets, load the font, and force
    /// the full initial paint.
    ///
    /// Returns every region the host must paint: background and underline
    /// (static, painted exactly once here) plus all change-detected regions,
    /// which the unset caches guarantee are dirty.
    pub fn load(&mut self, now: NaiveDateTime, battery_percent: u8) -> RedrawReport {
        if self.phase != Phase::Uninitialized {
            log::warn!("load ignored in phase {:?}", self.phase);
            return RedrawReport::new();
        }

        let layout = compute_layout(self.geometry, GLYPH_WIDTH, GLYPH_HEIGHT);
        for (slot, &origin) in layout.digit_origins.iter().enumerate() {
            self.slots[slot] = Some(self.platform.create_glyph(origin, 0));
        }
        self.layout = Some(layout);

        self.date_font = self.platform.load_date_font();
        if self.date_font.is_none() {
            log::warn!("date font unavailable, the date band will stay blank");
        }

        self.phase = Phase::Active;

        let mut report = RedrawReport::new();
        let _ = report.push(Region::Background);
        let _ = report.push(Region::Underline);

        let mut changes = self.cache.observe_time(now);
        changes.battery = self.cache.observe_battery(battery_percent);
        for region in dispatch(&changes, &self.cache, &mut self.slots) {
            let _ = report.push(region);
        }

        log::info!("watchface loaded, initial paint covers {} regions", report.len());
        report
    }

    /// Process one event to completion and return the dirty regions.
    pub fn handle_event(&mut self, event: Event) -> RedrawReport {
        if self.phase != Phase::Active {
            log::debug!("event {event:?} ignored in phase {:?}", self.phase);
            return RedrawReport::new();
        }

        match event {
            Event::MinuteTick(now) => {
                let changes = self.cache.observe_time(now);
                let report = dispatch(&changes, &self.cache, &mut self.slots);

                // Chime is gated on the clock and quiet hours, not on redraws
                if HOURLY_CHIME && now.minute() == 0 && !self.platform.is_quiet_time_active() {
                    log::info!("top of hour, firing double pulse");
                    self.platform.trigger_double_pulse();
                }

                report
            }
            Event::Battery(percent) => {
                let changes = ChangeSet {
                    battery: self.cache.observe_battery(percent),
                    ..ChangeSet::default()
                };
                dispatch(&changes, &self.cache, &mut self.slots)
            }
        }
    }

    /// Window unload: release everything exactly once.
    ///
    /// Order: cache layers and derived layout, then the four glyph widgets,
    /// then the shared glyph images, then the font last. Each release sits
    /// behind a presence check, so unloading a partially constructed face is
    /// safe and a second call is a no-op.
    pub fn unload(&mut self) {
        if self.phase == Phase::Destroyed {
            return;
        }
        self.phase = Phase::Unloading;

        self.cache = DisplayCache::new();
        self.layout = None;

        for slot in &mut self.slots {
            slot.take();
        }

        self.platform.unload_glyph_images();

        if self.date_font.take().is_some() {
            log::debug!("date font unloaded");
        }

        self.phase = Phase::Destroyed;
        log::info!("watchface unloaded");
    }

    /// Repaint the regions in `report`. Regions not listed are untouched.
    pub fn paint<D>(&self, target: &mut D, report: &RedrawReport) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(layout) = self.layout else {
            return Ok(());
        };

        for region in report {
            match *region {
                Region::Background => target.clear(BLACK)?,
                Region::Underline => battery::draw_underline(target, layout.underline)?,
                Region::BatteryBar => battery::draw_battery_bar(
                    target,
                    layout.battery_bar,
                    self.cache.battery_percent().unwrap_or(0),
                )?,
                Region::DateBand => date::draw_date_band(
                    target,
                    layout.date_band,
                    layout.date_text_clear,
                    self.cache.date_text(),
                    self.date_font,
                )?,
                Region::Digit(slot) => {
                    // Slot indices outside 0..=3 never come from dispatch,
                    // but a hand-built report must not panic
                    if let Some(widget) = self.slots.get(slot).and_then(Option::as_ref) {
                        widget.draw(target)?;
                    }
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
