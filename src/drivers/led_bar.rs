use crate::config::LED_COUNT;
use embedded_hal::digital::v2::OutputPin;

/// Logical LED bar, addressed by index `0..LED_COUNT`
pub trait LedDriver {
    /// Out-of-range indices are ignored.
    fn set_led(&mut self, index: u8, on: bool);

    fn clear_all(&mut self) {
        for i in 0..LED_COUNT {
            self.set_led(i, false);
        }
    }
}

/// Ten output pins, ordered by LED index
pub struct LedBar<P> {
    leds: [P; LED_COUNT as usize],
}

impl<P: OutputPin> LedBar<P> {
    pub fn new(leds: [P; LED_COUNT as usize]) -> Self {
        Self { leds }
    }

    pub fn release(self) -> [P; LED_COUNT as usize] {
        self.leds
    }
}

impl<P: OutputPin> LedDriver for LedBar<P> {
    fn set_led(&mut self, index: u8, on: bool) {
        let Some(led) = self.leds.get_mut(index as usize) else {
            return;
        };

        // GPIO writes do not fail on this board
        if on {
            led.set_high().ok();
        } else {
            led.set_low().ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::pin::{Mock, State, Transaction};

    fn bar(expectations: &[&[Transaction]]) -> (LedBar<Mock>, [Mock; 10]) {
        let pins: [Mock; 10] = core::array::from_fn(|i| Mock::new(expectations[i]));
        let handles = pins.clone();
        (LedBar::new(pins), handles)
    }

    #[test]
    fn set_led_drives_only_that_pin() {
        let on = [Transaction::set(State::High)];
        let mut expectations: [&[Transaction]; 10] = [&[]; 10];
        expectations[7] = &on[..];

        let (mut leds, mut handles) = bar(&expectations);
        leds.set_led(7, true);

        for pin in handles.iter_mut() {
            pin.done();
        }
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let expectations: [&[Transaction]; 10] = [&[]; 10];
        let (mut leds, mut handles) = bar(&expectations);

        leds.set_led(LED_COUNT, true);
        leds.set_led(u8::MAX, false);

        for pin in handles.iter_mut() {
            pin.done();
        }
    }

    #[test]
    fn clear_all_drives_every_pin_low() {
        let off = [Transaction::set(State::Low)];
        let expectations: [&[Transaction]; 10] = [&off[..]; 10];

        let (mut leds, mut handles) = bar(&expectations);
        leds.clear_all();

        for pin in handles.iter_mut() {
            pin.done();
        }
    }
}
