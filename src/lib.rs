//! LED bar firmware for the ATmega4809.
//!
//! Two display modes: a back-and-forth scanning sweep and a potentiometer
//! driven bar graph. A periodic RTC tick toggles the mode and a button press
//! forces the bar graph. Everything above the register layer builds on the
//! host and is tested there; `hal` and the binary need the `firmware`
//! feature.

#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod board;
pub mod config;
pub mod drivers;
pub mod events;
pub mod mode;
pub mod testing;

#[cfg(feature = "firmware")]
pub mod hal;

pub use application::Application;
pub use mode::{DisplayMode, ModeCell};
