//! Display mode state machine shared between interrupt handlers and the
//! render loop.
//!
//! Writers are the timer and button handlers, which never nest on this MCU.
//! The render loop only reads. A single byte load/store is atomic on AVR, so
//! the cell is an `AtomicU8` restricted to `load`/`store`.

use core::sync::atomic::{AtomicU8, Ordering};

const SCANNING: u8 = 0;
const LEVEL: u8 = 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Back-and-forth single LED sweep
    #[default]
    Scanning,
    /// Bar graph proportional to the potentiometer
    Level,
}

impl DisplayMode {
    /// Timer tick transition
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            DisplayMode::Scanning => DisplayMode::Level,
            DisplayMode::Level => DisplayMode::Scanning,
        }
    }

    /// Button press transition
    #[inline]
    pub const fn forced_level(self) -> Self {
        DisplayMode::Level
    }

    pub const fn name(self) -> &'static str {
        match self {
            DisplayMode::Scanning => "Scanning",
            DisplayMode::Level => "Level",
        }
    }

    #[inline]
    const fn to_raw(self) -> u8 {
        match self {
            DisplayMode::Scanning => SCANNING,
            DisplayMode::Level => LEVEL,
        }
    }

    #[inline]
    const fn from_raw(raw: u8) -> Self {
        match raw {
            LEVEL => DisplayMode::Level,
            _ => DisplayMode::Scanning,
        }
    }
}

impl ufmt::uDisplay for DisplayMode {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        f.write_str(self.name())
    }
}

/// Process-wide mode cell
pub struct ModeCell {
    raw: AtomicU8,
}

impl ModeCell {
    /// Starts in `Scanning`
    pub const fn new() -> Self {
        Self {
            raw: AtomicU8::new(SCANNING),
        }
    }

    /// Latest committed mode
    #[inline]
    pub fn current(&self) -> DisplayMode {
        DisplayMode::from_raw(self.raw.load(Ordering::Acquire))
    }

    #[inline]
    pub fn set(&self, mode: DisplayMode) {
        self.raw.store(mode.to_raw(), Ordering::Release);
    }

    /// Must only be called from a context no other writer can preempt.
    #[inline]
    pub fn toggle(&self) {
        self.set(self.current().toggled());
    }

    #[inline]
    pub fn force_level(&self) {
        self.set(self.current().forced_level());
    }
}

impl Default for ModeCell {
    fn default() -> Self {
        Self::new()
    }
}
