#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

use panic_halt as _;
use avr_device::atmega4809::Peripherals;

use ledbar_firmware::drivers::{AdcLevelSensor, LedBar, SerialConsole};
use ledbar_firmware::events;
use ledbar_firmware::hal::{self, timer::PitPeriod};
use ledbar_firmware::{Application, ModeCell};

// Written by the RTC and PORTE handlers, read by the render loop
static MODE: ModeCell = ModeCell::new();

#[avr_device::entry]
fn main() -> ! {
    let dp = Peripherals::take().unwrap();

    // Initialize peripherals
    let mut console = SerialConsole::new(hal::Usart3::new(dp.USART3));
    let leds = LedBar::new(hal::led_pins());
    let sensor = AdcLevelSensor::new(hal::Adc0::new(dp.ADC0), hal::Ain3);
    let delay = hal::Delay::new(dp.TCB0);

    console.write_line(concat!("LED bar firmware v", env!("CARGO_PKG_VERSION")));

    #[cfg(feature = "self-test")]
    let (mut console, leds, delay) = power_on_self_test(console, leds, delay);

    hal::configure_button();
    let _tick = hal::PeriodicTick::new(dp.RTC, PitPeriod::Cyc32768);

    console.write_line("Ready...");

    // Enable interrupts globally
    unsafe { avr_device::interrupt::enable() };

    let mut app = Application::new(leds, sensor, delay, console);
    app.run(&MODE)
}

#[cfg(feature = "self-test")]
fn power_on_self_test(
    console: SerialConsole<hal::Usart3>,
    mut leds: LedBar<hal::LedPin>,
    mut delay: hal::Delay,
) -> (SerialConsole<hal::Usart3>, LedBar<hal::LedPin>, hal::Delay) {
    use embedded_hal::blocking::delay::DelayMs;
    use ledbar_firmware::config::{LED_COUNT, SELF_TEST_STEP_MS};
    use ledbar_firmware::drivers::LedDriver;
    use ledbar_firmware::testing::{TestRunner, POWER_ON_TESTS};

    let mut runner = TestRunner::new(console);
    let failed = runner.run_suite("POST", &POWER_ON_TESTS);
    let mut console = runner.release();

    // Walk every LED once so a dead one is visible
    for i in 0..LED_COUNT {
        leds.set_led(i, true);
        delay.delay_ms(SELF_TEST_STEP_MS);
        leds.set_led(i, false);
    }

    if failed != 0 {
        console.debug("POST failures", failed);
    }

    (console, leds, delay)
}

#[avr_device::interrupt(atmega4809)]
fn RTC_PIT() {
    events::on_timer_tick(&mut hal::PitFlag::new(), &MODE);
}

#[avr_device::interrupt(atmega4809)]
fn PORTE_PORT() {
    events::on_button_edge(&mut hal::ButtonFlag::new(), &MODE);
}
