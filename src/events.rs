//! Interrupt-side event producers.
//!
//! Each handler acknowledges its pending flag before returning and performs a
//! single mode transition. No LED or ADC access happens here.

use crate::mode::ModeCell;

/// A hardware interrupt pending flag
pub trait InterruptFlag {
    fn is_pending(&self) -> bool;
    fn clear(&mut self);
}

/// Periodic timer tick: acknowledge, then toggle the mode.
pub fn on_timer_tick<F: InterruptFlag>(flag: &mut F, mode: &ModeCell) {
    flag.clear();
    mode.toggle();
}

/// Button falling edge: force `Level`.
///
/// The port vector is shared by every pin on the port, so nothing happens
/// unless the button's own flag is set. Edges are not debounced; a bouncing
/// contact just forces `Level` more than once.
pub fn on_button_edge<F: InterruptFlag>(flag: &mut F, mode: &ModeCell) -> bool {
    if !flag.is_pending() {
        return false;
    }

    flag.clear();
    mode.force_level();
    true
}
