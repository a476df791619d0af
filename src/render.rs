//! Redraw dispatcher: turns changed flags into the minimal region set.
//!
//! Consumes a [`ChangeSet`] from the change-detection cache and performs
//! exactly one visual update per raised flag:
//!
//! | Flag | Update | Region marked dirty |
//! |------|--------|---------------------|
//! | `digits[i]` | `set_digit` on slot i | that slot's glyph only |
//! | `battery` | none (fill derives from the cache) | battery bar only |
//! | `date` | none (text already reformatted by the cache) | date band only |
//!
//! The report never contains more regions than there were raised flags, and
//! never skips a raised flag with a present slot. The underline is static
//! decoration: it appears only in the load-time report, never here. A digit
//! flag whose slot is absent (partial construction) is skipped silently —
//! the visual element is missing, not an error.

use heapless::Vec;

use crate::platform::GlyphSlot;
use crate::state::{ChangeSet, DIGIT_SLOT_COUNT, DisplayCache};

/// A screen region the host must repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Full-screen background clear. Load-time only.
    Background,
    /// Static decoration below the date band. Load-time only.
    Underline,
    /// Battery bar fill.
    BatteryBar,
    /// Date text band.
    DateBand,
    /// One digit glyph (slot 0..=3).
    Digit(usize),
}

/// Upper bound on regions in one report: background + underline + bar +
/// band + four digits.
pub const MAX_REGIONS: usize = 8;

/// Bounded list of dirty regions produced by one event.
pub type RedrawReport = Vec<Region, MAX_REGIONS>;

/// Apply a change set: push updated digits into their slots and collect the
/// dirty regions.
///
/// `cache` must already hold the new values (i.e. call this after the
/// `observe_*` that produced `changes`).
pub fn dispatch<S: GlyphSlot>(
    changes: &ChangeSet,
    cache: &DisplayCache,
    slots: &mut [Option<S>; DIGIT_SLOT_COUNT],
) -> RedrawReport {
    let mut report = RedrawReport::new();

    for slot in 0..DIGIT_SLOT_COUNT {
        if changes.digits[slot]
            && let (Some(widget), Some(digit)) = (slots[slot].as_mut(), cache.digit(slot))
        {
            widget.set_digit(digit);
            let _ = report.push(Region::Digit(slot));
        }
    }

    if changes.battery {
        let _ = report.push(Region::BatteryBar);
    }

    if changes.date {
        let _ = report.push(Region::DateBand);
    }

    report
}

// =============================================================================
// Unit Tests
// =============================================================================
