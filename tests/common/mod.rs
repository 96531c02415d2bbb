#![allow(dead_code)]

use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayMs;
use ledbar_firmware::config::LED_COUNT;
use ledbar_firmware::drivers::{LedDriver, LevelSensor, SerialConsole};
use ledbar_firmware::events::InterruptFlag;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedOp {
    On(u8),
    Off(u8),
}

/// LED driver that keeps the physical state and every write
#[derive(Default)]
pub struct RecordingLeds {
    pub state: [bool; LED_COUNT as usize],
    pub ops: Vec<LedOp>,
}

impl RecordingLeds {
    pub fn lit(&self) -> Vec<u8> {
        (0..LED_COUNT).filter(|&i| self.state[i as usize]).collect()
    }

    /// Indices switched on, in order
    pub fn lit_sequence(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                LedOp::On(i) => Some(*i),
                LedOp::Off(_) => None,
            })
            .collect()
    }
}

impl LedDriver for RecordingLeds {
    fn set_led(&mut self, index: u8, on: bool) {
        if let Some(led) = self.state.get_mut(index as usize) {
            *led = on;
            self.ops.push(if on { LedOp::On(index) } else { LedOp::Off(index) });
        }
    }
}

/// Sensor returning queued samples, repeating the last one
pub struct FixedSensor {
    samples: Vec<u16>,
}

impl FixedSensor {
    pub fn new(samples: &[u16]) -> Self {
        let mut samples = samples.to_vec();
        samples.reverse();
        Self { samples }
    }
}

impl LevelSensor for FixedSensor {
    fn read_level(&mut self) -> u16 {
        if self.samples.len() > 1 {
            self.samples.pop().unwrap_or(0)
        } else {
            self.samples.last().copied().unwrap_or(0)
        }
    }
}

/// Delay that counts calls and runs a hook on each
pub struct HookDelay<F> {
    pub calls: Vec<u16>,
    hook: F,
}

impl<F: FnMut(usize)> HookDelay<F> {
    pub fn new(hook: F) -> Self {
        Self {
            calls: Vec::new(),
            hook,
        }
    }
}

impl<F: FnMut(usize)> DelayMs<u16> for HookDelay<F> {
    fn delay_ms(&mut self, ms: u16) {
        self.calls.push(ms);
        (self.hook)(self.calls.len());
    }
}

pub struct Sink(pub String);

impl ufmt::uWrite for Sink {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.0.push_str(s);
        Ok(())
    }
}

pub fn console() -> SerialConsole<Sink> {
    SerialConsole::new(Sink(String::new()))
}

/// Software stand-in for a hardware pending flag
#[derive(Default)]
pub struct FakeFlag {
    pub pending: bool,
    pub clears: u32,
}

impl FakeFlag {
    pub fn raised() -> Self {
        Self {
            pending: true,
            clears: 0,
        }
    }
}

impl InterruptFlag for FakeFlag {
    fn is_pending(&self) -> bool {
        self.pending
    }

    fn clear(&mut self) {
        self.pending = false;
        self.clears += 1;
    }
}

/// Recording driver that a test can inspect while the loop owns it
#[derive(Clone, Default)]
pub struct SharedLeds(pub std::rc::Rc<std::cell::RefCell<RecordingLeds>>);

impl LedDriver for SharedLeds {
    fn set_led(&mut self, index: u8, on: bool) {
        self.0.borrow_mut().set_led(index, on);
    }
}
