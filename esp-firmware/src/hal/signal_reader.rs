// GPIO Signal Reader - liest die drei DIO-Leitungen vom RoboRio

use esp_core::{SignalReader, SignalTriple};
use esp_hal::gpio::{Input, InputConfig, InputPin, Pull};

/// Drei digitale Eingänge mit internem Pull-Down
///
/// Offene Leitungen lesen LOW. Keine Entprellung, roher Pegel.
pub struct GpioSignalReader<'a> {
    pin1: Input<'a>,
    pin2: Input<'a>,
    pin3: Input<'a>,
}

impl<'a> GpioSignalReader<'a> {
    pub fn new(
        pin1: impl InputPin + 'a,
        pin2: impl InputPin + 'a,
        pin3: impl InputPin + 'a,
    ) -> Self {
        Self {
            pin1: pull_down_input(pin1),
            pin2: pull_down_input(pin2),
            pin3: pull_down_input(pin3),
        }
    }
}

fn pull_down_input<'a>(pin: impl InputPin + 'a) -> Input<'a> {
    Input::new(pin, InputConfig::default().with_pull(Pull::Down))
}

impl SignalReader for GpioSignalReader<'_> {
    fn read(&mut self) -> SignalTriple {
        SignalTriple::new(self.pin1.is_high(), self.pin2.is_high(), self.pin3.is_high())
    }
}
