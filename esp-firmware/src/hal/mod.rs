// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus esp-core,
// damit die Steuerungslogik auf dem Host testbar bleibt.

pub mod led_writer;
pub mod signal_reader;

pub use led_writer::RmtStripWriter;
pub use signal_reader::GpioSignalReader;
