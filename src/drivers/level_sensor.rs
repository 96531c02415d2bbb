use crate::config::{LED_COUNT, LEVEL_RANGE};
use core::marker::PhantomData;
use embedded_hal::adc::{Channel, OneShot};

/// Source of raw level samples in `0..LEVEL_RANGE`
pub trait LevelSensor {
    /// Blocks until a sample is ready.
    fn read_level(&mut self) -> u16;
}

/// Number of LEDs to light for a raw sample, always below `LED_COUNT`.
pub fn quantize(level: u16) -> u8 {
    let scaled = u32::from(level) * u32::from(LED_COUNT) / u32::from(LEVEL_RANGE);
    scaled.min(u32::from(LED_COUNT - 1)) as u8
}

/// Potentiometer read through a one-shot ADC channel
pub struct AdcLevelSensor<A, ADC, PIN> {
    adc: A,
    pin: PIN,
    last: u16,
    _adc: PhantomData<ADC>,
}

impl<A, ADC, PIN> AdcLevelSensor<A, ADC, PIN>
where
    A: OneShot<ADC, u16, PIN>,
    PIN: Channel<ADC>,
{
    pub fn new(adc: A, pin: PIN) -> Self {
        Self {
            adc,
            pin,
            last: 0,
            _adc: PhantomData,
        }
    }

    pub fn release(self) -> (A, PIN) {
        (self.adc, self.pin)
    }
}

impl<A, ADC, PIN> LevelSensor for AdcLevelSensor<A, ADC, PIN>
where
    A: OneShot<ADC, u16, PIN>,
    PIN: Channel<ADC>,
{
    fn read_level(&mut self) -> u16 {
        // A failed conversion keeps the previous sample on the bar
        if let Ok(raw) = nb::block!(self.adc.read(&mut self.pin)) {
            self.last = raw.min(LEVEL_RANGE - 1);
        }
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_endpoints() {
        assert_eq!(quantize(0), 0);
        assert_eq!(quantize(300), 2);
        assert_eq!(quantize(512), 5);
        assert_eq!(quantize(1023), 9);
    }

    #[test]
    fn quantize_never_reaches_led_count() {
        for level in 0..LEVEL_RANGE {
            let q = quantize(level);
            assert!(q < LED_COUNT);
            assert_eq!(u32::from(q), u32::from(level) * 10 / 1024);
        }
        assert_eq!(quantize(u16::MAX), LED_COUNT - 1);
    }
}
