mod common;

use common::console;
use embedded_hal::adc::{Channel, OneShot};
use embedded_hal_mock::delay::MockNoop;
use embedded_hal_mock::pin::{Mock, State, Transaction};
use ledbar_firmware::drivers::{AdcLevelSensor, LedBar, LevelSensor};
use ledbar_firmware::{Application, DisplayMode, ModeCell};

struct FakeAdc {
    samples: Vec<nb::Result<u16, ()>>,
    channels: Vec<u8>,
}

struct Pot;

impl Channel<FakeAdc> for Pot {
    type ID = u8;

    fn channel() -> u8 {
        3
    }
}

impl OneShot<FakeAdc, u16, Pot> for FakeAdc {
    type Error = ();

    fn read(&mut self, _pin: &mut Pot) -> nb::Result<u16, ()> {
        self.channels.push(Pot::channel());
        if self.samples.is_empty() {
            return Err(nb::Error::Other(()));
        }
        self.samples.remove(0)
    }
}

fn sensor(samples: Vec<nb::Result<u16, ()>>) -> AdcLevelSensor<FakeAdc, FakeAdc, Pot> {
    AdcLevelSensor::new(
        FakeAdc {
            samples,
            channels: Vec::new(),
        },
        Pot,
    )
}

#[test]
fn sensor_blocks_until_conversion_ready() {
    let mut sensor = sensor(vec![
        Err(nb::Error::WouldBlock),
        Err(nb::Error::WouldBlock),
        Ok(300),
    ]);

    assert_eq!(sensor.read_level(), 300);

    let (adc, _) = sensor.release();
    assert_eq!(adc.channels, [3, 3, 3]);
}

#[test]
fn sensor_clamps_out_of_range_samples() {
    let mut sensor = sensor(vec![Ok(4095)]);
    assert_eq!(sensor.read_level(), 1023);
}

#[test]
fn sensor_holds_last_sample_on_error() {
    let mut sensor = sensor(vec![Ok(640), Err(nb::Error::Other(()))]);
    assert_eq!(sensor.read_level(), 640);
    assert_eq!(sensor.read_level(), 640);
    // Nothing queued: the converter keeps failing
    assert_eq!(sensor.read_level(), 640);
}

#[test]
fn sensor_starts_at_zero_when_first_read_fails() {
    let mut sensor = sensor(vec![Err(nb::Error::Other(()))]);
    assert_eq!(sensor.read_level(), 0);
}

#[test]
fn level_mode_pin_transactions() {
    // Clear everything, then light LEDs 0 and 1
    let low = [Transaction::set(State::Low)];
    let low_high = [Transaction::set(State::Low), Transaction::set(State::High)];

    let pins: [Mock; 10] = core::array::from_fn(|i| {
        if i < 2 {
            Mock::new(&low_high)
        } else {
            Mock::new(&low)
        }
    });
    let mut handles = pins.clone();

    let mode = ModeCell::new();
    mode.force_level();

    let mut app = Application::new(
        LedBar::new(pins),
        sensor(vec![Ok(300)]),
        MockNoop::new(),
        console(),
    );
    assert_eq!(app.step(&mode), DisplayMode::Level);

    for pin in handles.iter_mut() {
        pin.done();
    }
}
