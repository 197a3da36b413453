// Konsole über esp-println (USB-Serial-JTAG)

use esp_core::{Console, Report};

/// Schreibt jede Meldung als eigene Textzeile
///
/// Läuft neben dem defmt-Log über dieselbe Schnittstelle.
pub struct SerialConsole;

impl Console for SerialConsole {
    fn emit(&mut self, report: &Report) {
        esp_println::println!("{}", report);
    }
}
