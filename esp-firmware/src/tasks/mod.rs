// Task-Modul: Enthält die Hauptschleife
//
// Es gibt genau einen Ausführungskontext ohne Executor.
// Alle Wartezeiten blockieren (esp_hal::delay::Delay).

pub mod light_reader;

// Re-export für einfachen Import
pub use light_reader::{light_reader_logic, light_reader_task};
