//! Render loop: reads the mode once per iteration and drives the LED bar.
//!
//! The scanning sweep is not interruptible. A mode change that lands during a
//! sweep is picked up at the start of the next iteration.

use crate::config::{LED_COUNT, SCAN_DWELL_MS};
use crate::drivers::level_sensor::quantize;
use crate::drivers::{LedDriver, LevelSensor, SerialConsole};
use crate::mode::{DisplayMode, ModeCell};
use embedded_hal::blocking::delay::DelayMs;
use ufmt::{uWrite, uwrite};

/// LED indices visited by one sweep: `0..=9` then `8..=1`
pub fn scan_sequence() -> impl Iterator<Item = u8> + Clone {
    (0..LED_COUNT).chain((1..LED_COUNT - 1).rev())
}

pub struct Application<L, S, D, W> {
    leds: L,
    sensor: S,
    delay: D,
    console: SerialConsole<W>,
    dwell_ms: u16,
    last_mode: Option<DisplayMode>,
    last_level: Option<u8>,
}

impl<L, S, D, W> Application<L, S, D, W>
where
    L: LedDriver,
    S: LevelSensor,
    D: DelayMs<u16>,
    W: uWrite,
{
    pub fn new(leds: L, sensor: S, delay: D, console: SerialConsole<W>) -> Self {
        Self {
            leds,
            sensor,
            delay,
            console,
            dwell_ms: SCAN_DWELL_MS,
            last_mode: None,
            last_level: None,
        }
    }

    pub fn with_dwell_ms(mut self, dwell_ms: u16) -> Self {
        self.dwell_ms = dwell_ms;
        self
    }

    pub fn run(&mut self, mode: &ModeCell) -> ! {
        loop {
            self.step(mode);
        }
    }

    /// One loop iteration. Returns the mode that was rendered.
    pub fn step(&mut self, mode: &ModeCell) -> DisplayMode {
        let current = mode.current();

        if self.last_mode != Some(current) {
            uwrite!(self.console.writer(), "[MODE] {}\r\n", current).ok();
            self.last_mode = Some(current);
            self.last_level = None;
        }

        match current {
            DisplayMode::Level => {
                self.render_level();
            }
            DisplayMode::Scanning => self.run_scan_sweep(),
        }

        current
    }

    /// Samples the sensor and shows it as a bar. Returns the quantized level.
    pub fn render_level(&mut self) -> u8 {
        let raw = self.sensor.read_level();
        let level = quantize(raw);

        self.leds.clear_all();
        for i in 0..level {
            self.leds.set_led(i, true);
        }

        if self.last_level != Some(level) {
            uwrite!(self.console.writer(), "[LVL] {} -> {}\r\n", raw, level).ok();
            self.last_level = Some(level);
        }

        level
    }

    /// One full back-and-forth sweep, blocking for every step's dwell.
    pub fn run_scan_sweep(&mut self) {
        // Drop whatever a previous bar left lit
        self.leds.clear_all();

        for i in scan_sequence() {
            self.leds.set_led(i, true);
            self.delay.delay_ms(self.dwell_ms);
            self.leds.set_led(i, false);
        }
    }

    pub fn leds(&self) -> &L {
        &self.leds
    }

    pub fn console(&mut self) -> &mut SerialConsole<W> {
        &mut self.console
    }

    pub fn release(self) -> (L, S, D, SerialConsole<W>) {
        (self.leds, self.sensor, self.delay, self.console)
    }
}
