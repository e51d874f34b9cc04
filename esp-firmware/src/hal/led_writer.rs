// Strip Writer - RMT Implementierung des StripWriter Traits
//
// Überträgt komplette Frames auf den WS2812 Strip.
// Gamma-Korrektur und globale Helligkeit werden hier angewendet,
// die Logik in esp-core arbeitet immer mit vollen Farbwerten.

use esp_core::{StripError, StripWriter};
use esp_hal::Blocking;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds::{brightness, gamma};
use smart_leds_trait::SmartLedsWrite;

use crate::config::{LED_BRIGHTNESS, LED_COUNT};

// Buffer-Größe für den Strip (3 Farben * 8 Bits pro LED + 1 Reset)
pub const LED_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

/// Real Hardware Strip Writer
///
/// Nutzt ESP32 RMT Peripheral um WS2812 LEDs anzusteuern.
///
/// Hinweis: Der Buffer wird im Task erstellt und als Parameter übergeben
/// statt im Constructor allokiert.
pub struct RmtStripWriter<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
}

impl<'a> RmtStripWriter<'a> {
    /// Erstellt einen neuen RmtStripWriter
    ///
    /// # Parameter
    /// - `led_pin`: GPIO für die Datenleitung des Strips
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer! Macro)
    pub fn new(
        led_pin: esp_hal::peripherals::GPIO7<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [PulseCode; LED_BUFFER_SIZE],
    ) -> Result<Self, StripError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| StripError::InitFailed)?;

        let led = SmartLedsAdapter::new(rmt.channel0, led_pin, buffer);

        Ok(Self { led })
    }
}

impl StripWriter for RmtStripWriter<'_> {
    fn write_frame(&mut self, frame: &[RGB8]) -> Result<(), StripError> {
        let pixels = brightness(gamma(frame.iter().copied()), LED_BRIGHTNESS);
        self.led.write(pixels).map_err(|_| StripError::WriteFailed)
    }
}
