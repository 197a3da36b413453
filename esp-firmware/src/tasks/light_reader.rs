// Lichtsensor Task - Taster-gesteuerte BH1750 Messung
use defmt::{debug, error, info, warn};
use embedded_hal::delay::DelayNs;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;

use crate::config::{CYCLE_CONFIG, I2C_FREQUENCY_KHZ, SENSOR_CONFIG};
use crate::hal::SerialConsole;
use crate::{
    ActiveHighIndicator, ActiveLowButton, Bh1750, BusTransport, ButtonInput, Console, HalBus,
    Indicator, ReadCycle, StepOutcome,
};

/// Lese-Zyklus Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Startet den Zyklus (Banner + Sensor-Init) und ruft dann endlos
/// `step()` auf. Jedes Ergebnis wird zusätzlich über defmt geloggt.
///
/// # Trait-basierte Abstraktion
/// Alle Typ-Parameter sind Traits aus esp-core, die Hardware steckt
/// komplett im übergebenen `ReadCycle`.
pub fn light_reader_logic<T, B, I, C, D>(mut cycle: ReadCycle<T, B, I, C, D>) -> !
where
    T: BusTransport,
    B: ButtonInput,
    I: Indicator,
    C: Console,
    D: DelayNs,
{
    match cycle.start() {
        Ok(()) => info!("BH1750 initialized"),
        // Weiterlaufen: jede Messung meldet dann einen Fehler auf der Konsole
        Err(e) => error!("BH1750 init failed: {}", e),
    }

    info!("Waiting for button presses");

    loop {
        match cycle.step() {
            StepOutcome::ReadCompleted(Ok(lux)) => info!("Reading: {}", lux),
            StepOutcome::ReadCompleted(Err(e)) => warn!("Reading failed: {}", e),
            StepOutcome::Released => debug!("Button released"),
            StepOutcome::Idle | StepOutcome::HeldDown => {}
        }
    }
}

/// Lichtsensor Task - Hardware-Initialisierung
///
/// Konfiguriert LED, Taster und I²C0 und übergibt alles an
/// `light_reader_logic()`. Kehrt nie zurück.
///
/// # Parameter
/// - `i2c0`: I2C0 Peripheral
/// - `sda`, `scl`: I²C Pins (GPIO0, GPIO1)
/// - `button`: Taster-Pin (GPIO5)
/// - `led`: LED-Pin (GPIO11)
pub fn light_reader_task(
    i2c0: esp_hal::peripherals::I2C0<'static>,
    sda: esp_hal::peripherals::GPIO0<'static>,
    scl: esp_hal::peripherals::GPIO1<'static>,
    button: esp_hal::peripherals::GPIO5<'static>,
    led: esp_hal::peripherals::GPIO11<'static>,
) -> ! {
    let led = Output::new(led, Level::Low, OutputConfig::default());
    let button = Input::new(button, InputConfig::default().with_pull(Pull::Up));

    // esp-hal konfiguriert SDA/SCL als Open-Drain mit internem Pull-Up
    let i2c_config = I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ));
    let i2c = I2c::new(i2c0, i2c_config)
        .expect("Invalid I2C0 configuration")
        .with_sda(sda)
        .with_scl(scl);
    info!("I2C0 ready at {} kHz", I2C_FREQUENCY_KHZ);

    let sensor = Bh1750::new(HalBus::new(i2c), SENSOR_CONFIG);
    let cycle = ReadCycle::new(
        sensor,
        ActiveLowButton::new(button),
        ActiveHighIndicator::new(led),
        SerialConsole,
        Delay::new(),
        CYCLE_CONFIG,
    );

    light_reader_logic(cycle)
}
