//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

/// Setzt zwei Bytes vom Sensor zu einem 16-Bit-Rohwert zusammen (Big-Endian)
///
/// # Beispiele
///
/// ```
/// # use esp_core::decode_raw;
/// assert_eq!(decode_raw([0x02, 0x58]), 600);
/// ```
pub fn decode_raw(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}

/// Rechnet den Rohwert in Lux um
///
/// Im High-Resolution-Modus gilt laut Datenblatt `lux = raw / 1.2`.
/// Jeder Rohwert ergibt einen gültigen, nicht-negativen Wert.
///
/// # Beispiele
///
/// ```
/// # use esp_core::raw_to_lux;
/// let lux = raw_to_lux(600, 1.2);
/// assert!((lux - 500.0).abs() < 0.001);
/// ```
pub fn raw_to_lux(raw: u16, divisor: f32) -> f32 {
    f32::from(raw) / divisor
}
