//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, den BH1750-Treiber, den Lese-Zyklus und Pure Functions.

#![no_std]

pub mod cycle;
pub mod logic;
pub mod pins;
pub mod sensor;
pub mod traits;
pub mod transport;
pub mod types;

// Re-exports für einfachen Zugriff
pub use cycle::{CycleState, ReadCycle, StepOutcome};
pub use logic::{decode_raw, raw_to_lux};
pub use pins::{ActiveHighIndicator, ActiveLowButton};
pub use sensor::Bh1750;
pub use traits::{BusError, BusTransport, ButtonInput, Console, Indicator};
pub use transport::HalBus;
pub use types::{CycleConfig, Lux, Report, SensorConfig, SensorError};
