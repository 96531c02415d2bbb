use crate::board;
use crate::config::LEVEL_ADC_CHANNEL;
use crate::hal::gpio;
use avr_device::atmega4809::ADC0;
use core::convert::Infallible;
use embedded_hal::adc::{Channel, OneShot};

const CTRLA_ENABLE: u8 = 0x01; // RESSEL = 10 bit
const CTRLC_SAMPCAP: u8 = 0x40;
const CTRLC_REFSEL_VDD: u8 = 0x10;
const CTRLC_PRESC_DIV64: u8 = 0x05;
const COMMAND_STCONV: u8 = 0x01;
const INTFLAGS_RESRDY: u8 = 0x01;
const PINCTRL_INPUT_DISABLE: u8 = 0x04;

/// Potentiometer input, AIN3 on PD3
pub struct Ain3;

impl Channel<Adc0> for Ain3 {
    type ID = u8;

    fn channel() -> u8 {
        LEVEL_ADC_CHANNEL
    }
}

/// ADC0 in single conversion mode, 10 bit, VDD reference
pub struct Adc0 {
    adc: ADC0,
    converting: bool,
}

impl Adc0 {
    pub fn new(adc: ADC0) -> Self {
        unsafe {
            // Analog pin: digital input buffer off
            gpio::port(board::POTENTIOMETER.port)
                .pin3ctrl
                .write(|w| w.bits(PINCTRL_INPUT_DISABLE));

            adc.ctrlc
                .write(|w| w.bits(CTRLC_SAMPCAP | CTRLC_REFSEL_VDD | CTRLC_PRESC_DIV64));
            adc.ctrla.write(|w| w.bits(CTRLA_ENABLE));
        }
        Self {
            adc,
            converting: false,
        }
    }
}

impl<PIN> OneShot<Adc0, u16, PIN> for Adc0
where
    PIN: Channel<Adc0, ID = u8>,
{
    type Error = Infallible;

    fn read(&mut self, _pin: &mut PIN) -> nb::Result<u16, Infallible> {
        if !self.converting {
            unsafe {
                self.adc.muxpos.write(|w| w.bits(PIN::channel()));
                self.adc.command.write(|w| w.bits(COMMAND_STCONV));
            }
            self.converting = true;
            return Err(nb::Error::WouldBlock);
        }

        if self.adc.intflags.read().bits() & INTFLAGS_RESRDY == 0 {
            return Err(nb::Error::WouldBlock);
        }

        // Reading RES clears RESRDY
        self.converting = false;
        Ok(self.adc.res.read().bits())
    }
}
