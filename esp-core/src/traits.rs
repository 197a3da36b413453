//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::Report;

/// Fehler-Typ für Bus-Operationen
///
/// Spiegelt `embedded_hal::i2c::ErrorKind` ohne dessen `non_exhaustive`-Varianten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// Adresse oder Daten wurden nicht bestätigt (NACK)
    NoAcknowledge,
    /// Arbitrierung an einen anderen Master verloren
    ArbitrationLoss,
    /// Fehler auf dem Bus (START/STOP an falscher Stelle)
    Bus,
    /// Empfangspuffer übergelaufen
    Overrun,
    Other,
}

/// Trait für den Zwei-Draht-Bus (I²C) zum Sensor
///
/// Blockierendes Schreiben/Lesen roher Bytes an eine feste Adresse.
/// Beide Operationen liefern die Anzahl tatsächlich übertragener Bytes.
///
/// # Implementierungen
/// - **Production:** [`HalBus`](crate::HalBus) über jedem `embedded_hal::i2c::I2c`
/// - **Testing:** MockBus (in-memory Mock)
pub trait BusTransport {
    /// Schreibt `bytes` an `address`, gibt die Anzahl geschriebener Bytes zurück
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<usize, BusError>;

    /// Liest bis zu `buffer.len()` Bytes von `address`, gibt die Anzahl gelesener Bytes zurück
    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<usize, BusError>;
}

/// Trait für den Taster
///
/// Die Implementierung übernimmt die Invertierung bei Pull-Up-Beschaltung:
/// `true` heißt gedrückt, unabhängig vom elektrischen Pegel.
pub trait ButtonInput {
    fn is_pressed(&mut self) -> bool;
}

/// Trait für die Busy-LED
pub trait Indicator {
    /// Schaltet die Anzeige ein (`true`) oder aus (`false`)
    fn set_active(&mut self, active: bool);
}

/// Trait für die zeilenorientierte Text-Ausgabe
///
/// Eine Zeile pro Aufruf, der Zeilenumbruch ist Sache der Implementierung.
pub trait Console {
    fn emit(&mut self, report: &Report);
}
