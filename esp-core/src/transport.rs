//! Adapter von `embedded_hal::i2c::I2c` auf [`BusTransport`]

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

use crate::traits::{BusError, BusTransport};

/// Bus über einen beliebigen embedded-hal I²C-Treiber
///
/// embedded-hal kennt keine Teil-Übertragungen: entweder wird der ganze
/// Puffer übertragen oder es kommt ein Fehler.
pub struct HalBus<I> {
    i2c: I,
}

impl<I: I2c> HalBus<I> {
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> BusTransport for HalBus<I> {
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<usize, BusError> {
        self.i2c
            .write(address, bytes)
            .map(|()| bytes.len())
            .map_err(|e| BusError::from(e.kind()))
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<usize, BusError> {
        self.i2c
            .read(address, buffer)
            .map(|()| buffer.len())
            .map_err(|e| BusError::from(e.kind()))
    }
}

impl From<ErrorKind> for BusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoAcknowledge(_) => BusError::NoAcknowledge,
            ErrorKind::ArbitrationLoss => BusError::ArbitrationLoss,
            ErrorKind::Bus => BusError::Bus,
            ErrorKind::Overrun => BusError::Overrun,
            _ => BusError::Other,
        }
    }
}
