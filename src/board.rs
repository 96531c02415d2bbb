//! Board wiring: the single LED index to pin table

use crate::config::LED_COUNT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
    F,
}

/// A physical output, one port bit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId {
    pub port: Port,
    pub bit: u8,
}

impl PinId {
    pub const fn new(port: Port, bit: u8) -> Self {
        Self { port, bit }
    }

    #[inline]
    pub const fn mask(&self) -> u8 {
        1 << self.bit
    }
}

/// LED index to pin. Both the single-LED and clear-all paths use this table.
pub const LED_PINS: [PinId; LED_COUNT as usize] = [
    PinId::new(Port::C, 5),
    PinId::new(Port::C, 4),
    PinId::new(Port::A, 0),
    PinId::new(Port::F, 5),
    PinId::new(Port::C, 6),
    PinId::new(Port::B, 2),
    PinId::new(Port::F, 4),
    PinId::new(Port::A, 1),
    PinId::new(Port::A, 2),
    PinId::new(Port::A, 3),
];

/// Direction mask for every port that carries an LED
pub const fn led_mask(port: Port) -> u8 {
    let mut mask = 0;
    let mut i = 0;
    while i < LED_PINS.len() {
        if LED_PINS[i].port as u8 == port as u8 {
            mask |= LED_PINS[i].mask();
        }
        i += 1;
    }
    mask
}

/// Potentiometer wiper, analog input AIN3 on PD3
pub const POTENTIOMETER: PinId = PinId::new(Port::D, 3);

/// Push button on PE1
pub const BUTTON: PinId = PinId::new(Port::E, crate::config::BUTTON_PIN);

/// USART3 transmit on PB0
pub const CONSOLE_TX: PinId = PinId::new(Port::B, 0);
