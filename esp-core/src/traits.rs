//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::types::SignalTriple;

/// Fehler-Typ für Strip-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripError {
    InitFailed,
    WriteFailed,
}

/// Trait für den Zugriff auf den LED-Strip (WS2812/Neopixel)
///
/// # Implementierungen
/// - **Production:** RmtStripWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockStripWriter (in-memory Mock)
pub trait StripWriter: Send {
    /// Überträgt einen kompletten Frame auf den Strip
    ///
    /// # Fehlerbehandlung
    /// Gibt `StripError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write_frame(&mut self, frame: &[RGB8]) -> Result<(), StripError>;
}

/// Trait für die drei digitalen Eingänge vom RoboRio
///
/// Liest den rohen Pegel, ohne Entprellung oder Flankenerkennung.
pub trait SignalReader {
    fn read(&mut self) -> SignalTriple;
}
