//! Taster-gesteuerter Lese-Zyklus
//!
//! Zwei Zustände:
//! - `Idle`: LED aus, wartet auf Tastendruck
//! - `Reading`: LED an, Messung ausgegeben, wartet auf Loslassen
//!
//! Die LED ist genau dann an, wenn der Zyklus in `Reading` ist.

use embedded_hal::delay::DelayNs;

use crate::sensor::Bh1750;
use crate::traits::{BusTransport, ButtonInput, Console, Indicator};
use crate::types::{CycleConfig, Lux, Report, SensorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    Idle,
    Reading,
}

/// Ergebnis eines einzelnen [`ReadCycle::step`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Taster nicht gedrückt, Ruhe-Intervall gewartet
    Idle,
    /// Tastendruck erkannt, Messung gelesen und ausgegeben
    ReadCompleted(Result<Lux, SensorError>),
    /// Taster noch gedrückt
    HeldDown,
    /// Taster losgelassen, LED aus
    Released,
}

/// Lese-Zyklus mit Entprellung
///
/// Besitzt Sensor, Taster, LED, Konsole und Delay. Es gibt genau einen
/// Ausführungskontext, daher höchstens eine Messung gleichzeitig.
///
/// # Trait-basierte Abstraktion
/// Alle Hardware läuft über Traits, in Tests über Mocks mit einem Delay,
/// das keine echte Zeit verbraucht.
pub struct ReadCycle<T, B, I, C, D> {
    sensor: Bh1750<T>,
    button: B,
    indicator: I,
    console: C,
    delay: D,
    config: CycleConfig,
    state: CycleState,
}

impl<T, B, I, C, D> ReadCycle<T, B, I, C, D>
where
    T: BusTransport,
    B: ButtonInput,
    I: Indicator,
    C: Console,
    D: DelayNs,
{
    pub fn new(
        sensor: Bh1750<T>,
        button: B,
        indicator: I,
        console: C,
        delay: D,
        config: CycleConfig,
    ) -> Self {
        Self {
            sensor,
            button,
            indicator,
            console,
            delay,
            config,
            state: CycleState::Idle,
        }
    }

    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Startsequenz: Wartezeit, Banner, Sensor-Initialisierung
    ///
    /// Die LED wird dabei ausgeschaltet. Schlägt die Initialisierung fehl,
    /// kann der Zyklus trotzdem laufen; jede Messung meldet dann einen Fehler.
    pub fn start(&mut self) -> Result<(), SensorError> {
        self.indicator.set_active(false);
        self.delay.delay_ms(self.config.startup_delay_ms);
        self.console.emit(&Report::Banner);
        self.console.emit(&Report::Instructions);
        self.sensor.initialize(&mut self.delay)
    }

    /// Ein Durchlauf: Taster abfragen und den passenden Übergang ausführen
    ///
    /// In `Reading` ist jeder Aufruf ein Poll der Entprell-Schleife:
    /// `release_poll_ms` warten solange gedrückt, sonst LED aus.
    pub fn step(&mut self) -> StepOutcome {
        let pressed = self.button.is_pressed();
        match (self.state, pressed) {
            (CycleState::Idle, true) => {
                self.indicator.set_active(true);
                self.state = CycleState::Reading;
                let result = self.sensor.read_lux();
                self.console.emit(&Report::from(result));
                StepOutcome::ReadCompleted(result)
            }
            (CycleState::Idle, false) => {
                self.delay.delay_ms(self.config.idle_poll_ms);
                StepOutcome::Idle
            }
            (CycleState::Reading, true) => {
                self.delay.delay_ms(self.config.release_poll_ms);
                StepOutcome::HeldDown
            }
            (CycleState::Reading, false) => {
                self.indicator.set_active(false);
                self.state = CycleState::Idle;
                self.delay.delay_ms(self.config.idle_poll_ms);
                StepOutcome::Released
            }
        }
    }
}
