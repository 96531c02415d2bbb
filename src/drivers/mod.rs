pub mod led_bar;
pub mod level_sensor;
pub mod serial_console;

pub use led_bar::{LedBar, LedDriver};
pub use level_sensor::{quantize, AdcLevelSensor, LevelSensor};
pub use serial_console::SerialConsole;
