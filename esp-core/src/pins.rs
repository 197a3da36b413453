//! Adapter von `embedded_hal::digital` auf [`ButtonInput`] und [`Indicator`]

use embedded_hal::digital::{InputPin, OutputPin, PinState};

use crate::traits::{ButtonInput, Indicator};

/// Taster gegen GND mit Pull-Up
///
/// Losgelassen liest der Pin HIGH, gedrückt LOW. `is_pressed()` invertiert.
/// Ein Lesefehler zählt als losgelassen.
pub struct ActiveLowButton<P> {
    pin: P,
}

impl<P: InputPin> ActiveLowButton<P> {
    /// Erwartet einen bereits mit Pull-Up konfigurierten Eingang
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ButtonInput for ActiveLowButton<P> {
    fn is_pressed(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}

/// LED an einem Push-Pull Ausgang, HIGH = an
pub struct ActiveHighIndicator<P> {
    pin: P,
}

impl<P: OutputPin> ActiveHighIndicator<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Indicator for ActiveHighIndicator<P> {
    fn set_active(&mut self, active: bool) {
        // GPIO-Ausgänge auf dem Target sind infallible
        let _ = self.pin.set_state(PinState::from(active));
    }
}
