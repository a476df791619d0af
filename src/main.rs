// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional u32->i32 casts for pixel math
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Big-digit watchface simulator.
//!
//! A minimal state-driven refresh engine for a wristwatch face: four big
//! digits (HH:MM), a date band, and a battery bar, redrawn only when the
//! underlying value actually changed. The engine is split into small layers
//! that the simulator host merely wires together:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ main (simulator host)                                      │
//! │   SDL window, wall clock, key input -> Event stream        │
//! └───────────────┬────────────────────────────────────────────┘
//!                 │ Event::MinuteTick / Event::Battery
//! ┌───────────────▼────────────────────────────────────────────┐
//! │ watchface (tick orchestrator)                              │
//! │   lifecycle phases, chime gating, owns all face state      │
//! ├───────────────┬───────────────────┬────────────────────────┤
//! │ state         │ layout            │ render                 │
//! │ change cache  │ rect computation  │ dirty-region dispatch  │
//! ├───────────────┴───────────────────┴────────────────────────┤
//! │ widgets: big_digit / battery / date   (Rgb565 DrawTarget)  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Screen Layout
//!
//! ```text
//! ┌──────────────────────┐
//! │   ┌────┐  ┌────┐     │
//! │   │ H  │  │ H  │     │  top digit row (hours)
//! │   └────┘  └────┘     │
//! │   ▔▔▔▔▔▔▔▔▔▔▔▔▔▔     │  battery bar (fill = charge %)
//! │      Sat 21 Jun      │  date band
//! │   ▁▁▁▁▁▁▁▁▁▁▁▁▁▁     │  underline (static)
//! │   ┌────┐  ┌────┐     │
//! │   │ M  │  │ M  │     │  bottom digit row (minutes)
//! │   └────┘  └────┘     │
//! └──────────────────────┘
//! ```
//!
//! # Controls (Simulator Mode)
//!
//! | Key | Action |
//! |-----|--------|
//! | `Up` | Raise simulated battery by 5% |
//! | `Down` | Lower simulated battery by 5% |
//! | `T` | Force a minute tick with the current wall clock |
//!
//! Key repeat is ignored to prevent spamming events when holding keys. Real
//! minute ticks fire automatically when the wall clock crosses a minute
//! boundary.

mod colors;
mod config;
mod layout;
mod platform;
mod render;
mod state;
mod styles;
mod watchface;
mod widgets;

use std::thread;

use chrono::{Local, Timelike};
use config::{FRAME_TIME, QUIET_END_HOUR, QUIET_START_HOUR, SCREEN_HEIGHT, SCREEN_WIDTH};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use layout::ScreenGeometry;
use platform::Platform;
use watchface::{Event, Watchface};
use widgets::big_digit::SegmentGlyph;

/// Battery step per Up/Down key press, percent.
const BATTERY_STEP: u8 = 5;

/// Simulated starting charge.
const INITIAL_BATTERY: u8 = 80;

/// Host services backed by the simulator and the local wall clock.
struct SimPlatform;

impl Platform for SimPlatform {
    type Slot = SegmentGlyph;

    fn create_glyph(&mut self, origin: Point, initial_digit: u8) -> SegmentGlyph {
        log::debug!("glyph widget created at ({}, {})", origin.x, origin.y);
        SegmentGlyph::new(origin, initial_digit)
    }

    fn unload_glyph_images(&mut self) {
        // Segment glyphs hold no shared image resources
        log::debug!("glyph images unloaded");
    }

    fn load_date_font(&mut self) -> Option<&'static MonoFont<'static>> {
        Some(styles::DATE_FONT)
    }

    fn is_quiet_time_active(&self) -> bool {
        let hour = Local::now().hour();
        hour >= QUIET_START_HOUR || hour < QUIET_END_HOUR
    }

    fn trigger_double_pulse(&mut self) {
        // No vibration motor on a desktop; the log line stands in for it
        log::info!("bzzt bzzt (double pulse)");
    }
}

fn main() {
    env_logger::init();

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Big Digit Watchface", &output_settings);

    let mut watchface = Watchface::new(
        SimPlatform,
        ScreenGeometry::new(SCREEN_WIDTH, SCREEN_HEIGHT),
    );

    // Window load: full initial paint through the unset caches
    let now = Local::now().naive_local();
    let mut battery = INITIAL_BATTERY;
    let report = watchface.load(now, battery);
    watchface.paint(&mut display, &report).ok();
    window.update(&display);

    let mut last_minute = now.minute();

    'running: loop {
        // Handle window events (close, key presses)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent event spam when holding keys
                    if repeat {
                        continue;
                    }
                    let event = match keycode {
                        Keycode::Up => {
                            battery = battery.saturating_add(BATTERY_STEP).min(100);
                            Some(Event::Battery(battery))
                        }
                        Keycode::Down => {
                            battery = battery.saturating_sub(BATTERY_STEP);
                            Some(Event::Battery(battery))
                        }
                        // Force a tick without waiting for the minute boundary
                        Keycode::T => Some(Event::MinuteTick(Local::now().naive_local())),
                        _ => None,
                    };
                    if let Some(event) = event {
                        let report = watchface.handle_event(event);
                        if !report.is_empty() {
                            log::debug!("{event:?} -> {} region(s)", report.len());
                            watchface.paint(&mut display, &report).ok();
                        }
                    }
                }
                _ => {}
            }
        }

        // Deliver a minute tick when the wall clock crosses a minute boundary
        let now = Local::now().naive_local();
        if now.minute() != last_minute {
            last_minute = now.minute();
            let report = watchface.handle_event(Event::MinuteTick(now));
            if !report.is_empty() {
                log::debug!("minute tick -> {} region(s)", report.len());
                watchface.paint(&mut display, &report).ok();
            }
        }

        window.update(&display);
        thread::sleep(FRAME_TIME);
    }

    // Window unload: release widgets, images, and the font exactly once
    watchface.unload();
}
