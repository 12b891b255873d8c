// GPIO Ausgangsleitung für die Status-LED
//
// Verbindet esp-hal's GPIO Output mit dem OutputLine-Trait aus blink-core.

use blink_core::OutputLine;
use esp_hal::gpio::{Level, Output};

/// Real Hardware Output Line
///
/// Dünner Wrapper um `esp_hal::gpio::Output`. Die Pin-Konfiguration
/// passiert beim Erstellen des `Output` und schlägt nicht fehl.
pub struct GpioLine<'d> {
    output: Output<'d>,
}

impl<'d> GpioLine<'d> {
    /// Erstellt eine GpioLine aus einem konfigurierten Output
    ///
    /// # Parameter
    /// - `output`: GPIO Output (z.B. GPIO8, initial Low)
    pub fn new(output: Output<'d>) -> Self {
        Self { output }
    }
}

impl OutputLine for GpioLine<'_> {
    fn set_level(&mut self, high: bool) {
        self.output.set_level(Level::from(high));
    }

    fn is_set_high(&self) -> bool {
        self.output.is_set_high()
    }
}
