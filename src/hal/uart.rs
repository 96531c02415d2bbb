use crate::board;
use crate::config::{CPU_FREQ_HZ, UART_BAUD};
use crate::hal::gpio;
use avr_device::atmega4809::USART3;
use core::convert::Infallible;

// Normal speed async mode: BAUD = 64 * f / (16 * baud)
const BAUD_REG: u16 = ((4 * CPU_FREQ_HZ + UART_BAUD / 2) / UART_BAUD) as u16;

const CTRLB_TXEN: u8 = 0x40;
const CTRLC_8N1: u8 = 0x03;
const STATUS_DREIF: u8 = 0x20;

/// Transmit-only console on USART3 (TX on PB0)
pub struct Usart3 {
    usart: USART3,
}

impl Usart3 {
    pub fn new(usart: USART3) -> Self {
        gpio::set_output(board::CONSOLE_TX);
        unsafe {
            usart.baud.write(|w| w.bits(BAUD_REG));
            usart.ctrlc.write(|w| w.bits(CTRLC_8N1));
            usart.ctrlb.write(|w| w.bits(CTRLB_TXEN));
        }
        Self { usart }
    }

    pub fn write_byte(&mut self, byte: u8) {
        while self.usart.status.read().bits() & STATUS_DREIF == 0 {}
        unsafe {
            self.usart.txdatal.write(|w| w.bits(byte));
        }
    }
}

impl ufmt::uWrite for Usart3 {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        Ok(())
    }
}
