//! Configuration constants for the LED bar firmware

/// Number of LEDs on the bar
pub const LED_COUNT: u8 = 10;

/// Exclusive upper bound of a raw level sample (10-bit ADC)
pub const LEVEL_RANGE: u16 = 1024;

/// Dwell per scanning step in milliseconds.
///
/// Tunable: the sweep holds each LED this long, so one full sweep blocks the
/// render loop for `18 * SCAN_DWELL_MS`.
pub const SCAN_DWELL_MS: u16 = 1000;

/// CPU frequency in Hz (20MHz oscillator with the reset default /6 prescaler)
pub const CPU_FREQ_HZ: u32 = 3_333_333;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Analog input wired to the potentiometer (AIN3)
pub const LEVEL_ADC_CHANNEL: u8 = 3;

/// Button bit on PORTE (PE1), active low
pub const BUTTON_PIN: u8 = 1;

/// LED walk dwell during the power-on self-test
pub const SELF_TEST_STEP_MS: u16 = 100;
