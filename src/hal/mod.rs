//! Register-level peripherals for the ATmega4809

pub mod adc;
pub mod gpio;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use adc::{Adc0, Ain3};
pub use gpio::{configure_button, led_pins, ButtonFlag, LedPin};
pub use timer::{Delay, PeriodicTick, PitFlag};
pub use uart::Usart3;
