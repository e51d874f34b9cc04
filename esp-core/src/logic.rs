//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;
use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::types::{LightMode, SignalTriple};

/// Dekodiert die drei Signal-Leitungen in einen Licht-Modus
///
/// Die Abbildung ist total: jede der acht Kombinationen hat genau einen
/// Modus. `LightMode::Fault` wird hier nie geliefert.
///
/// # Beispiele
///
/// ```
/// # use esp_core::{decode_mode, LightMode, SignalTriple};
/// let signals = SignalTriple::new(false, false, true);
/// assert_eq!(decode_mode(signals), LightMode::RedTeleop);
/// ```
pub fn decode_mode(signals: SignalTriple) -> LightMode {
    match (signals.pin1, signals.pin2, signals.pin3) {
        (false, false, false) => LightMode::Idle,
        (false, false, true) => LightMode::RedTeleop,
        (false, true, false) => LightMode::BlueTeleop,
        (false, true, true) => LightMode::TargetLock,
        (true, false, false) => LightMode::Endgame,
        (true, false, true) => LightMode::Shooting,
        (true, true, false) => LightMode::RedAuto,
        (true, true, true) => LightMode::BlueAuto,
    }
}

/// Setzt alle Pixel auf eine Farbe
pub fn fill_solid(frame: &mut [RGB8], color: RGB8) {
    frame.fill(color);
}

/// Farbton (16-Bit Farbkreis) für Pixel `index` bei `len` Pixeln
///
/// Der Strip deckt genau einen Farbkreis ab, beginnend bei `first_pixel_hue`.
pub fn pixel_hue(first_pixel_hue: u16, index: usize, len: usize) -> u16 {
    if len == 0 {
        return first_pixel_hue;
    }
    let offset = (index as u64 * 65_536 / len as u64) as u16;
    first_pixel_hue.wrapping_add(offset)
}

/// Füllt den Frame mit einem Regenbogen, verschoben um `first_pixel_hue`
pub fn fill_rainbow(frame: &mut [RGB8], first_pixel_hue: u16) {
    let len = frame.len();
    for (index, pixel) in frame.iter_mut().enumerate() {
        *pixel = hue_to_rgb(pixel_hue(first_pixel_hue, index, len));
    }
}

/// Voll gesättigte Farbe für einen 16-Bit Farbton
///
/// `hsv2rgb` kennt nur 256 Stufen, das untere Byte interpoliert linear
/// zur nächsten Stufe.
pub fn hue_to_rgb(hue: u16) -> RGB8 {
    let coarse = (hue >> 8) as u8;
    let fraction = (hue & 0xff) as i32;
    let from = wheel(coarse);
    if fraction == 0 {
        return from;
    }
    let to = wheel(coarse.wrapping_add(1));
    let lerp = |a: u8, b: u8| (a as i32 + (b as i32 - a as i32) * fraction / 256) as u8;
    RGB8 {
        r: lerp(from.r, to.r),
        g: lerp(from.g, to.g),
        b: lerp(from.b, to.b),
    }
}

fn wheel(hue: u8) -> RGB8 {
    hsv2rgb(Hsv {
        hue,
        sat: 255,
        val: 255,
    })
}

/// Nächste Regenbogen-Phase
///
/// Würde die Addition den 16-Bit Bereich verlassen, wird vorher auf 0
/// zurückgesetzt.
pub fn advance_rainbow_phase(phase: u16, step: u16) -> u16 {
    let phase = if phase > u16::MAX - step { 0 } else { phase };
    phase + step
}
