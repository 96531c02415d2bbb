use crate::config::CPU_FREQ_HZ;
use crate::events::InterruptFlag;
use avr_device::atmega4809::{RTC, TCB0};
use embedded_hal::blocking::delay::DelayMs;

const RTC_CLKSEL_INT32K: u8 = 0x00;
const RTC_PITSTATUS_CTRLBUSY: u8 = 0x01;
const RTC_PITEN: u8 = 0x01;
const RTC_PI: u8 = 0x01;

#[derive(Clone, Copy)]
#[repr(u8)]
pub enum PitPeriod {
    Cyc4096 = 0x0B << 3,
    Cyc8192 = 0x0C << 3,
    Cyc16384 = 0x0D << 3,
    Cyc32768 = 0x0E << 3,
}

/// RTC periodic interrupt, the mode toggle source.
///
/// Runs from the internal 32.768kHz oscillator, so `Cyc32768` is one tick
/// per second.
pub struct PeriodicTick {
    rtc: RTC,
}

impl PeriodicTick {
    pub fn new(rtc: RTC, period: PitPeriod) -> Self {
        unsafe {
            rtc.clksel.write(|w| w.bits(RTC_CLKSEL_INT32K));
            while rtc.pitstatus.read().bits() & RTC_PITSTATUS_CTRLBUSY != 0 {}
            rtc.pitctrla.write(|w| w.bits(period as u8 | RTC_PITEN));
            rtc.pitintctrl.write(|w| w.bits(RTC_PI));
        }
        Self { rtc }
    }

    pub fn stop(&mut self) {
        unsafe {
            self.rtc.pitintctrl.write(|w| w.bits(0));
            while self.rtc.pitstatus.read().bits() & RTC_PITSTATUS_CTRLBUSY != 0 {}
            self.rtc.pitctrla.write(|w| w.bits(0));
        }
    }
}

/// RTC.PITINTFLAGS, acknowledged from the PIT handler
pub struct PitFlag {
    _private: (),
}

impl PitFlag {
    pub const fn new() -> Self {
        Self { _private: () }
    }

    #[inline]
    fn rtc() -> &'static avr_device::atmega4809::rtc::RegisterBlock {
        unsafe { &*RTC::ptr() }
    }
}

impl InterruptFlag for PitFlag {
    #[inline]
    fn is_pending(&self) -> bool {
        Self::rtc().pitintflags.read().bits() & RTC_PI != 0
    }

    #[inline]
    fn clear(&mut self) {
        unsafe {
            Self::rtc().pitintflags.write(|w| w.bits(RTC_PI));
        }
    }
}

const TCB_ENABLE: u8 = 0x01; // CLKSEL = CLK_PER
const TCB_CNTMODE_INT: u8 = 0x00;
const TCB_CAPT: u8 = 0x01;
const TICKS_PER_MS: u16 = (CPU_FREQ_HZ / 1000) as u16;

/// Busy-wait millisecond delay on TCB0 in periodic interrupt mode (polled)
pub struct Delay {
    tcb: TCB0,
}

impl Delay {
    pub fn new(tcb: TCB0) -> Self {
        unsafe {
            tcb.ctrlb.write(|w| w.bits(TCB_CNTMODE_INT));
            tcb.ccmp.write(|w| w.bits(TICKS_PER_MS - 1));
            tcb.ctrla.write(|w| w.bits(TCB_ENABLE));
        }
        Self { tcb }
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        unsafe {
            self.tcb.cnt.write(|w| w.bits(0));
            self.tcb.intflags.write(|w| w.bits(TCB_CAPT));
        }

        for _ in 0..ms {
            while self.tcb.intflags.read().bits() & TCB_CAPT == 0 {}
            unsafe {
                self.tcb.intflags.write(|w| w.bits(TCB_CAPT));
            }
        }
    }
}
