//! BH1750 Lichtsensor-Treiber
//!
//! Kennt das Kommando-Protokoll des Sensors und rechnet Rohwerte in Lux um.
//! Der Bus wird über [`BusTransport`] abstrahiert.

use embedded_hal::delay::DelayNs;

use crate::logic::{decode_raw, raw_to_lux};
use crate::traits::BusTransport;
use crate::types::{Lux, SensorConfig, SensorError};

/// Treiber für einen BH1750 an einem Bus
///
/// Der Treiber besitzt den Bus. Mit [`Bh1750::release`] bekommt man ihn zurück.
pub struct Bh1750<T> {
    bus: T,
    config: SensorConfig,
}

impl<T: BusTransport> Bh1750<T> {
    pub fn new(bus: T, config: SensorConfig) -> Self {
        Self { bus, config }
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Schaltet den Sensor ein und startet die kontinuierliche Messung
    ///
    /// Ablauf: Power-On, `settle_ms` warten, Modus-Kommando, `warmup_ms` warten.
    /// Danach liefert der Sensor gültige Werte. Jeder Aufruf sendet exakt
    /// dieselbe Sequenz, ein vorheriger Sensorzustand spielt keine Rolle.
    ///
    /// # Fehlerbehandlung
    /// Bricht beim ersten fehlgeschlagenen Kommando ab, ohne Wiederholung.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), SensorError> {
        self.send_command(self.config.power_on_command)?;
        delay.delay_ms(self.config.settle_ms);
        self.send_command(self.config.mode_command)?;
        delay.delay_ms(self.config.warmup_ms);
        Ok(())
    }

    /// Löscht das Datenregister des Sensors
    ///
    /// Nur im eingeschalteten Zustand wirksam.
    pub fn reset(&mut self) -> Result<(), SensorError> {
        self.send_command(self.config.reset_command)
    }

    /// Liest den aktuellen Messwert
    ///
    /// # Fehlerbehandlung
    /// - `SensorError::ShortRead` wenn weniger als 2 Bytes ankommen
    /// - `SensorError::Bus` wenn der Bus selbst einen Fehler meldet
    pub fn read_lux(&mut self) -> Result<Lux, SensorError> {
        let mut buffer = [0u8; 2];
        let received = self.bus.read(self.config.address, &mut buffer)?;
        if received < buffer.len() {
            return Err(SensorError::ShortRead { received });
        }

        let raw = decode_raw(buffer);
        Ok(Lux(raw_to_lux(raw, self.config.lux_divisor)))
    }

    /// Gibt den Bus zurück
    pub fn release(self) -> T {
        self.bus
    }

    fn send_command(&mut self, command: u8) -> Result<(), SensorError> {
        let written = self.bus.write(self.config.address, &[command])?;
        if written < 1 {
            return Err(SensorError::ShortWrite { written });
        }
        Ok(())
    }
}
