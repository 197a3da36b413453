// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul verbindet die Traits aus esp-core mit den
// ESP32-C6 Peripherals aus esp-hal. Taster, LED und I²C laufen über die
// embedded-hal Adapter aus esp-core (ActiveLowButton, ActiveHighIndicator, HalBus).

pub mod console;

pub use console::SerialConsole;
