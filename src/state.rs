//! Change-detection cache for the watchface regions.
//!
//! Holds the last-rendered value for each observable quantity: battery
//! percent, the four time digits, and the date instant. Each `observe_*`
//! call compares the new value against the cache, updates the cache on a
//! difference, and reports whether the region changed.
//!
//! # Invariant
//!
//! A region is reported changed if and only if its cached value differs from
//! the new observation, or the cell is still unset. Every cell starts unset
//! (`None`), which guarantees the very first observation after construction
//! reports changed and forces exactly one full initial paint.
//!
//! # Date Granularity
//!
//! The date cell compares the *whole* tick instant, not a day-truncated
//! value. With minute-granular ticks this reformats an identical string once
//! per minute, which is redundant but never wrong; it matches the reference
//! face's behavior and keeps midnight rollover free of truncation edge
//! cases.
//!
//! Single-threaded by design: the cache is mutated only from the
//! orchestrator's event-handler context, never concurrently.

use core::fmt::Write;

use chrono::{NaiveDateTime, Timelike};
use heapless::String;

use crate::config::DATE_TEXT_MAX;

/// Number of digit slots: hour-tens, hour-units, minute-tens, minute-units.
pub const DIGIT_SLOT_COUNT: usize = 4;

/// Strftime-style pattern for the date band, e.g. "Sat 21 Jun".
const DATE_FORMAT: &str = "%a %d %b";

/// Per-region changed flags produced by one observation.
///
/// Digit flags are independent: a tick that only advances the minute-units
/// digit sets exactly one of the four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChangeSet {
    pub battery: bool,
    pub digits: [bool; DIGIT_SLOT_COUNT],
    pub date: bool,
}

impl ChangeSet {
    /// Total number of raised flags.
    pub fn count(&self) -> usize {
        usize::from(self.battery)
            + self.digits.iter().filter(|&&d| d).count()
            + usize::from(self.date)
    }

    /// Whether any region changed.
    pub fn any(&self) -> bool {
        self.count() > 0
    }
}

/// Split a wall-clock time into the four displayed digits.
///
/// Slot order: hour-tens, hour-units, minute-tens, minute-units.
pub fn time_digits(now: NaiveDateTime) -> [u8; DIGIT_SLOT_COUNT] {
    let hour = now.hour() as u8;
    let minute = now.minute() as u8;
    [hour / 10, hour % 10, minute / 10, minute % 10]
}

/// Last-rendered values for every region of the face.
///
/// Owned by the watchface context struct; there is no module-level state.
pub struct DisplayCache {
    /// Last-rendered battery percent. `None` until the first observation.
    battery: Option<u8>,

    /// Last-rendered digit per slot. `None` until the first observation.
    digits: [Option<u8>; DIGIT_SLOT_COUNT],

    /// Last observed tick instant (whole-instant granularity).
    date: Option<NaiveDateTime>,

    /// Formatted date text, rewritten in place when the date cell changes.
    date_text: String<DATE_TEXT_MAX>,
}

impl DisplayCache {
    /// Create a cache with every cell unset, forcing a full initial paint.
    pub fn new() -> Self {
        Self {
            battery: None,
            digits: [None; DIGIT_SLOT_COUNT],
            date: None,
            date_text: String::new(),
        }
    }

    /// Observe a battery level. Returns whether the bar must be redrawn.
    ///
    /// Percent is clamped to 0..=100 at this boundary so the fill math never
    /// sees an out-of-range value.
    pub fn observe_battery(&mut self, percent: u8) -> bool {
        let percent = percent.min(100);
        if self.battery == Some(percent) {
            return false;
        }
        self.battery = Some(percent);
        true
    }

    /// Observe a wall-clock instant. Returns changed flags for the date band
    /// and each digit slot; the battery flag is never raised here.
    pub fn observe_time(&mut self, now: NaiveDateTime) -> ChangeSet {
        let mut changes = ChangeSet::default();

        if self.date != Some(now) {
            self.date = Some(now);
            self.date_text.clear();
            // "%a %d %b" is at most 10 chars, well inside the buffer
            let _ = write!(self.date_text, "{}", now.format(DATE_FORMAT));
            changes.date = true;
        }

        let digits = time_digits(now);
        for (slot, &digit) in digits.iter().enumerate() {
            if self.digits[slot] != Some(digit) {
                self.digits[slot] = Some(digit);
                changes.digits[slot] = true;
            }
        }

        changes
    }

    /// Formatted date text for the date band. Empty until the first tick.
    pub fn date_text(&self) -> &str {
        &self.date_text
    }

    /// Last-rendered battery percent, if any observation happened yet.
    pub const fn battery_percent(&self) -> Option<u8> {
        self.battery
    }

    /// Last-rendered digit for a slot, if any observation happened yet.
    pub fn digit(&self, slot: usize) -> Option<u8> {
        self.digits.get(slot).copied().flatten()
    }
}

impl Default for DisplayCache {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
