//! Core Types für den Lichtsensor
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;

use crate::traits::BusError;

/// Helligkeit in Lux
///
/// Echte Messwerte sind immer >= 0. Fehler laufen über [`SensorError`],
/// nie über einen negativen Wert.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lux(pub f32);

impl Lux {
    pub fn value(self) -> f32 {
        self.0
    }
}

impl fmt::Display for Lux {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Fehler-Typ für Sensor-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Weniger Bytes gelesen als angefordert
    ShortRead { received: usize },
    /// Kommando nicht vollständig geschrieben (nur bei der Initialisierung)
    ShortWrite { written: usize },
    /// Bus meldete einen Fehler statt einer Byte-Anzahl
    Bus(BusError),
}

impl From<BusError> for SensorError {
    fn from(err: BusError) -> Self {
        SensorError::Bus(err)
    }
}

/// Konfiguration des BH1750-Treibers
///
/// Adresse, Kommando-Bytes und Wartezeiten laut Datenblatt.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorConfig {
    /// I²C-Adresse (0x23 bei ADDR auf GND)
    pub address: u8,
    pub power_on_command: u8,
    /// Löscht das Datenregister
    pub reset_command: u8,
    /// Messmodus: kontinuierlich, hohe Auflösung (1 lx)
    pub mode_command: u8,
    /// Pause nach Power-On
    pub settle_ms: u32,
    /// Dauer der ersten Wandlung nach dem Moduswechsel
    pub warmup_ms: u32,
    /// Umrechnung Rohwert → Lux
    pub lux_divisor: f32,
}

impl SensorConfig {
    pub const DEFAULT: Self = Self {
        address: 0x23,
        power_on_command: 0x01,
        reset_command: 0x07,
        mode_command: 0x10,
        settle_ms: 10,
        warmup_ms: 120,
        lux_divisor: 1.2,
    };
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Zeitverhalten der Taster-Schleife
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleConfig {
    /// Wartezeit nach dem Boot, damit sich der serielle Monitor verbinden kann
    pub startup_delay_ms: u32,
    /// Poll-Intervall im Ruhezustand
    pub idle_poll_ms: u32,
    /// Poll-Intervall während auf das Loslassen gewartet wird
    pub release_poll_ms: u32,
}

impl CycleConfig {
    pub const DEFAULT: Self = Self {
        startup_delay_ms: 2000,
        idle_poll_ms: 20,
        release_poll_ms: 10,
    };
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Zeilen für die Konsole
///
/// `Display` liefert den exakten Text ohne Zeilenumbruch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Report {
    Banner,
    Instructions,
    Reading(Lux),
    ReadFailed(SensorError),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Banner => f.write_str("--- Projeto Sensor de Luz BH1750 com Botao ---"),
            Report::Instructions => f.write_str("Pressione o Botao A para ler a luminosidade."),
            Report::Reading(lux) => write!(f, "Leitura do Sensor -> Nivel de Luz: {} Lux", lux),
            Report::ReadFailed(_) => f.write_str("Erro ao ler o sensor BH1750!"),
        }
    }
}

impl From<Result<Lux, SensorError>> for Report {
    fn from(result: Result<Lux, SensorError>) -> Self {
        match result {
            Ok(lux) => Report::Reading(lux),
            Err(e) => Report::ReadFailed(e),
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Lux {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=f32} lx", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BusError {
    fn format(&self, fmt: defmt::Formatter) {
        let name = match self {
            BusError::NoAcknowledge => "NoAcknowledge",
            BusError::ArbitrationLoss => "ArbitrationLoss",
            BusError::Bus => "Bus",
            BusError::Overrun => "Overrun",
            BusError::Other => "Other",
        };
        defmt::write!(fmt, "{=str}", name)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SensorError::ShortRead { received } => {
                defmt::write!(fmt, "ShortRead {{ received: {=usize} }}", received)
            }
            SensorError::ShortWrite { written } => {
                defmt::write!(fmt, "ShortWrite {{ written: {=usize} }}", written)
            }
            SensorError::Bus(kind) => defmt::write!(fmt, "Bus({})", kind),
        }
    }
}
