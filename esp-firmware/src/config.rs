// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use esp_core::{CycleConfig, SensorConfig};

// ============================================================================
// GPIO Konfiguration
// ============================================================================
//
// esp-hal vergibt Pins als typisierte Peripherals (peripherals.GPIOx).
// Die Nummern hier dokumentieren die Verdrahtung und müssen zu main.rs passen
// (peripherals.GPIOx beim Aufruf von light_reader_task).

/// GPIO-Pin für die Busy-LED
pub const LED_GPIO_PIN: u8 = 11;

/// GPIO-Pin für den Taster (interner Pull-Up, gedrückt = LOW)
pub const BUTTON_GPIO_PIN: u8 = 5;

/// I²C Datenleitung
pub const I2C_SDA_GPIO_PIN: u8 = 0;

/// I²C Taktleitung
pub const I2C_SCL_GPIO_PIN: u8 = 1;

// ============================================================================
// I²C Konfiguration
// ============================================================================

/// I²C Bus-Frequenz in kHz (Standard-Mode)
pub const I2C_FREQUENCY_KHZ: u32 = 100;

// ============================================================================
// BH1750 Konfiguration
// ============================================================================

/// I²C-Adresse des BH1750 (ADDR-Pin auf GND)
pub const BH1750_ADDRESS: u8 = 0x23;

/// Kommando: Power On
pub const BH1750_CMD_POWER_ON: u8 = 0x01;

/// Kommando: Datenregister zurücksetzen
pub const BH1750_CMD_RESET: u8 = 0x07;

/// Kommando: kontinuierliche Messung, hohe Auflösung (1 lx)
pub const BH1750_CMD_CONT_HIGH_RES: u8 = 0x10;

/// Pause nach Power On in Millisekunden
pub const BH1750_SETTLE_MS: u32 = 10;

/// Dauer der ersten Wandlung in Millisekunden
pub const BH1750_WARMUP_MS: u32 = 120;

/// Umrechnungsfaktor Rohwert → Lux (Datenblatt)
pub const BH1750_LUX_DIVISOR: f32 = 1.2;

pub const SENSOR_CONFIG: SensorConfig = SensorConfig {
    address: BH1750_ADDRESS,
    power_on_command: BH1750_CMD_POWER_ON,
    reset_command: BH1750_CMD_RESET,
    mode_command: BH1750_CMD_CONT_HIGH_RES,
    settle_ms: BH1750_SETTLE_MS,
    warmup_ms: BH1750_WARMUP_MS,
    lux_divisor: BH1750_LUX_DIVISOR,
};

// ============================================================================
// Lese-Zyklus Konfiguration
// ============================================================================

/// Wartezeit nach dem Boot in Millisekunden
/// Gibt dem seriellen Monitor Zeit sich zu verbinden
pub const STARTUP_DELAY_MS: u32 = 2000;

/// Poll-Intervall im Ruhezustand in Millisekunden
pub const IDLE_POLL_MS: u32 = 20;

/// Poll-Intervall beim Warten auf das Loslassen in Millisekunden
pub const RELEASE_POLL_MS: u32 = 10;

pub const CYCLE_CONFIG: CycleConfig = CycleConfig {
    startup_delay_ms: STARTUP_DELAY_MS,
    idle_poll_ms: IDLE_POLL_MS,
    release_poll_ms: RELEASE_POLL_MS,
};
