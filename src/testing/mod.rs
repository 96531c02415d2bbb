//! Power-on self-test runner.
//!
//! Runs logic checks on the target and reports over the console. Enabled at
//! boot by the `self-test` feature.

use crate::application::scan_sequence;
use crate::board::LED_PINS;
use crate::config::{LED_COUNT, LEVEL_RANGE};
use crate::drivers::level_sensor::quantize;
use crate::drivers::SerialConsole;
use crate::mode::{DisplayMode, ModeCell};
use ufmt::{uWrite, uwrite};

pub trait TestCase {
    fn run(&self) -> TestResult;
    fn name(&self) -> &'static str;
}

#[derive(Debug, PartialEq)]
pub enum TestResult {
    Pass,
    Fail(TestError),
}

#[derive(Debug, PartialEq)]
pub enum TestError {
    AssertionFailed(&'static str),
}

impl TestError {
    fn message(&self) -> &'static str {
        match self {
            TestError::AssertionFailed(msg) => *msg,
        }
    }
}

pub struct TestRunner<W> {
    console: SerialConsole<W>,
    total_tests: u16,
    passed_tests: u16,
}

impl<W: uWrite> TestRunner<W> {
    pub fn new(console: SerialConsole<W>) -> Self {
        Self {
            console,
            total_tests: 0,
            passed_tests: 0,
        }
    }

    /// Runs every case and returns the number of failures in this suite.
    pub fn run_suite(&mut self, name: &'static str, tests: &[&dyn TestCase]) -> u16 {
        let mut failed = 0;
        uwrite!(self.console.writer(), "\r\n=== Test Suite: {} ===\r\n", name).ok();

        for test in tests {
            self.total_tests += 1;
            uwrite!(self.console.writer(), "Running {}: ", test.name()).ok();

            match test.run() {
                TestResult::Pass => {
                    self.passed_tests += 1;
                    self.console.write_line("PASS");
                }
                TestResult::Fail(err) => {
                    failed += 1;
                    uwrite!(self.console.writer(), "FAIL - {}\r\n", err.message()).ok();
                }
            }
        }

        self.print_summary(name);
        failed
    }

    fn print_summary(&mut self, name: &'static str) {
        uwrite!(
            self.console.writer(),
            "Test Summary for {}: {}/{} passed\r\n",
            name,
            self.passed_tests,
            self.total_tests
        )
        .ok();
    }

    pub fn release(self) -> SerialConsole<W> {
        self.console
    }
}

macro_rules! check {
    ($cond:expr) => {
        if !$cond {
            return TestResult::Fail(TestError::AssertionFailed(concat!(
                "check failed: `",
                stringify!($cond),
                "`"
            )));
        }
    };
}

pub struct TickParityTest;
impl TestCase for TickParityTest {
    fn name(&self) -> &'static str {
        "Tick parity"
    }

    fn run(&self) -> TestResult {
        let mode = ModeCell::new();
        for k in 1..=6u8 {
            mode.toggle();
            let expected = if k % 2 == 0 {
                DisplayMode::Scanning
            } else {
                DisplayMode::Level
            };
            check!(mode.current() == expected);
        }
        TestResult::Pass
    }
}

pub struct ButtonForcesLevelTest;
impl TestCase for ButtonForcesLevelTest {
    fn name(&self) -> &'static str {
        "Button forces Level"
    }

    fn run(&self) -> TestResult {
        let mode = ModeCell::new();
        mode.force_level();
        check!(mode.current() == DisplayMode::Level);
        mode.force_level();
        check!(mode.current() == DisplayMode::Level);
        TestResult::Pass
    }
}

pub struct QuantizeBoundsTest;
impl TestCase for QuantizeBoundsTest {
    fn name(&self) -> &'static str {
        "Quantize bounds"
    }

    fn run(&self) -> TestResult {
        check!(quantize(0) == 0);
        check!(quantize(512) == 5);
        check!(quantize(LEVEL_RANGE - 1) == LED_COUNT - 1);
        check!(quantize(u16::MAX) == LED_COUNT - 1);
        TestResult::Pass
    }
}

pub struct SweepOrderTest;
impl TestCase for SweepOrderTest {
    fn name(&self) -> &'static str {
        "Sweep order"
    }

    fn run(&self) -> TestResult {
        const EXPECTED: [u8; 18] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 8, 7, 6, 5, 4, 3, 2, 1];
        check!(scan_sequence().count() == EXPECTED.len());
        check!(scan_sequence().zip(EXPECTED).all(|(a, b)| a == b));
        TestResult::Pass
    }
}

pub struct LedTableTest;
impl TestCase for LedTableTest {
    fn name(&self) -> &'static str {
        "LED pin table"
    }

    fn run(&self) -> TestResult {
        check!(LED_PINS.len() == LED_COUNT as usize);
        for (i, a) in LED_PINS.iter().enumerate() {
            check!(a.bit < 8);
            check!(!LED_PINS[i + 1..].contains(a));
        }
        TestResult::Pass
    }
}

/// Every built-in case
pub const POWER_ON_TESTS: [&dyn TestCase; 5] = [
    &TickParityTest,
    &ButtonForcesLevelTest,
    &QuantizeBoundsTest,
    &SweepOrderTest,
    &LedTableTest,
];
