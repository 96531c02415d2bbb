use crate::board::{self, PinId, Port, LED_PINS};
use crate::config::LED_COUNT;
use crate::events::InterruptFlag;
use avr_device::atmega4809::{porta, PORTA, PORTB, PORTC, PORTD, PORTE, PORTF};
use core::convert::Infallible;
use embedded_hal::digital::v2::OutputPin;

const PINCTRL_PULLUPEN: u8 = 0x08;
const PINCTRL_ISC_FALLING: u8 = 0x03;

// All six ports share the PORTA register layout
#[inline]
pub(crate) fn port(port: Port) -> &'static porta::RegisterBlock {
    let ptr = match port {
        Port::A => PORTA::ptr() as *const porta::RegisterBlock,
        Port::B => PORTB::ptr() as *const porta::RegisterBlock,
        Port::C => PORTC::ptr() as *const porta::RegisterBlock,
        Port::D => PORTD::ptr() as *const porta::RegisterBlock,
        Port::E => PORTE::ptr() as *const porta::RegisterBlock,
        Port::F => PORTF::ptr() as *const porta::RegisterBlock,
    };
    unsafe { &*ptr }
}

/// Make a pin an output
pub(crate) fn set_output(pin: PinId) {
    unsafe {
        port(pin.port).dirset.write(|w| w.bits(pin.mask()));
    }
}

/// One LED output. OUTSET/OUTCLR touch only this bit, so pins sharing a
/// port never race each other.
#[derive(Clone, Copy, Debug)]
pub struct LedPin {
    id: PinId,
}

impl LedPin {
    pub fn id(&self) -> PinId {
        self.id
    }
}

impl OutputPin for LedPin {
    type Error = Infallible;

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        unsafe {
            port(self.id.port).outset.write(|w| w.bits(self.id.mask()));
        }
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        unsafe {
            port(self.id.port).outclr.write(|w| w.bits(self.id.mask()));
        }
        Ok(())
    }
}

/// Configure every LED pin as a low output, ordered by LED index
pub fn led_pins() -> [LedPin; LED_COUNT as usize] {
    for p in [Port::A, Port::B, Port::C, Port::F] {
        let mask = board::led_mask(p);
        unsafe {
            port(p).outclr.write(|w| w.bits(mask));
            port(p).dirset.write(|w| w.bits(mask));
        }
    }
    LED_PINS.map(|id| LedPin { id })
}

/// PE1 as input with pull-up, interrupt on falling edge.
///
/// Pull-up and sense are set in one write; setting them separately would
/// drop the pull-up.
pub fn configure_button() {
    let pe = port(board::BUTTON.port);
    unsafe {
        pe.dirclr.write(|w| w.bits(board::BUTTON.mask()));
        pe.pin1ctrl.write(|w| w.bits(PINCTRL_PULLUPEN | PINCTRL_ISC_FALLING));
        // Drop any edge latched during configuration
        pe.intflags.write(|w| w.bits(board::BUTTON.mask()));
    }
}

/// The button's bit in PORTE.INTFLAGS
pub struct ButtonFlag {
    _private: (),
}

impl ButtonFlag {
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl InterruptFlag for ButtonFlag {
    #[inline]
    fn is_pending(&self) -> bool {
        port(board::BUTTON.port).intflags.read().bits() & board::BUTTON.mask() != 0
    }

    #[inline]
    fn clear(&mut self) {
        // Write one to clear
        unsafe {
            port(board::BUTTON.port)
                .intflags
                .write(|w| w.bits(board::BUTTON.mask()));
        }
    }
}
