//! Core Types für die Signal-Licht-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

// ============================================================================
// Farben
// ============================================================================

pub const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
pub const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
pub const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
pub const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };
/// Fehler-Indikator (unbekannter Zustand)
pub const WHITE: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 255,
};

// ============================================================================
// Eingangssignale
// ============================================================================

/// Die drei digitalen Leitungen vom RoboRio (A, B, C)
///
/// Wird in jeder Iteration frisch gelesen, keine Historie.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalTriple {
    pub pin1: bool,
    pub pin2: bool,
    pub pin3: bool,
}

impl SignalTriple {
    pub const fn new(pin1: bool, pin2: bool, pin3: bool) -> Self {
        Self { pin1, pin2, pin3 }
    }

    /// 3-Bit Code, pin1 ist das höchstwertige Bit
    pub const fn code(self) -> u8 {
        (self.pin1 as u8) << 2 | (self.pin2 as u8) << 1 | self.pin3 as u8
    }

    /// Erstellt ein Triple aus den unteren drei Bits von `code`
    pub const fn from_code(code: u8) -> Self {
        Self {
            pin1: code & 0b100 != 0,
            pin2: code & 0b010 != 0,
            pin3: code & 0b001 != 0,
        }
    }

    /// Diagnose-Zeile für die serielle Ausgabe, z.B. `b"101\n"`
    pub const fn diagnostic_line(self) -> [u8; 4] {
        [
            b'0' + self.pin1 as u8,
            b'0' + self.pin2 as u8,
            b'0' + self.pin3 as u8,
            b'\n',
        ]
    }
}

// ============================================================================
// Modi
// ============================================================================

/// Licht-Modus, dekodiert aus dem 3-Bit Signal-Code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LightMode {
    Idle,
    RedTeleop,
    BlueTeleop,
    TargetLock,
    Endgame,
    Shooting,
    RedAuto,
    BlueAuto,
    /// Unbekannter Zustand - wird weiß dargestellt
    Fault,
}

/// Art der Darstellung eines Modus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    /// Konstante Farbe, unabhängig vom vorherigen Zustand
    Static,
    /// Abwechselnd Farbe und Schwarz
    Flash,
    /// Regenbogen mit wanderndem Farbton
    Rainbow,
}

impl LightMode {
    pub const fn animation(self) -> Animation {
        match self {
            LightMode::Idle
            | LightMode::RedTeleop
            | LightMode::BlueTeleop
            | LightMode::TargetLock
            | LightMode::Fault => Animation::Static,
            LightMode::Shooting | LightMode::RedAuto | LightMode::BlueAuto => Animation::Flash,
            LightMode::Endgame => Animation::Rainbow,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            LightMode::Idle => "NO_LIGHTS",
            LightMode::RedTeleop => "RED_TELEOP",
            LightMode::BlueTeleop => "BLUE_TELEOP",
            LightMode::TargetLock => "TARGET_LOCK",
            LightMode::Endgame => "ENDGAME",
            LightMode::Shooting => "SHOOTING",
            LightMode::RedAuto => "RED_AUTO",
            LightMode::BlueAuto => "BLUE_AUTO",
            LightMode::Fault => "FAULT",
        }
    }
}

/// Allianz-Farbe des Roboters
///
/// Wird von der Steuerung nur geschrieben, nie gelesen. Externe
/// Komponenten lesen sie über `LightController::alliance()` bzw. den
/// Status-Channel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Alliance {
    Red,
    #[default]
    Blue,
}

// ============================================================================
// Konfiguration
// ============================================================================

/// Verhalten für den Code (1,1,0)
///
/// Die beiden bekannten Firmware-Stände widersprechen sich hier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RedAutoPolicy {
    /// Blinkt rot, Allianz = Rot
    FlashRed,
    /// Blinkt blau, Allianz = Blau (älterer Stand)
    FlashBlue,
}

/// Verhalten des Regenbogens beim Eintritt in den Endgame-Modus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RainbowStyle {
    /// Phase läuft über Modus-Wechsel hinweg weiter
    Continuous,
    /// Phase startet bei jedem Eintritt wieder bei 0
    RestartOnEntry,
}

/// Compile-Time Konfiguration des Controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerConfig {
    /// Dauer eines Blink-Frames in ms
    pub flash_interval_ms: u64,
    /// Abstand zwischen zwei Regenbogen-Frames in ms
    pub rainbow_interval_ms: u64,
    /// Farbton-Schritt pro Regenbogen-Frame (16-Bit Farbkreis)
    pub rainbow_step: u16,
    pub red_auto: RedAutoPolicy,
    pub rainbow_style: RainbowStyle,
}

impl ControllerConfig {
    pub const fn new() -> Self {
        Self {
            flash_interval_ms: 150,
            rainbow_interval_ms: 10,
            rainbow_step: 256,
            red_auto: RedAutoPolicy::FlashRed,
            rainbow_style: RainbowStyle::Continuous,
        }
    }

    pub const fn with_flash_interval_ms(mut self, ms: u64) -> Self {
        self.flash_interval_ms = ms;
        self
    }

    pub const fn with_rainbow_interval_ms(mut self, ms: u64) -> Self {
        self.rainbow_interval_ms = ms;
        self
    }

    pub const fn with_rainbow_step(mut self, step: u16) -> Self {
        self.rainbow_step = step;
        self
    }

    pub const fn with_red_auto(mut self, policy: RedAutoPolicy) -> Self {
        self.red_auto = policy;
        self
    }

    pub const fn with_rainbow_style(mut self, style: RainbowStyle) -> Self {
        self.rainbow_style = style;
        self
    }

    /// Frame-Intervall für animierte Modi, `None` für statische
    pub const fn interval_ms(&self, animation: Animation) -> Option<u64> {
        match animation {
            Animation::Static => None,
            Animation::Flash => Some(self.flash_interval_ms),
            Animation::Rainbow => Some(self.rainbow_interval_ms),
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Status-Nachricht
// ============================================================================

/// Status nach jedem gerenderten Frame
///
/// Wird vom Licht-Task an Diagnose und andere Beobachter verteilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightStatus {
    pub signals: SignalTriple,
    pub mode: LightMode,
    pub alliance: Alliance,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for SignalTriple {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{}{}{}",
            self.pin1 as u8,
            self.pin2 as u8,
            self.pin3 as u8
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LightMode {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Alliance {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Alliance::Red => defmt::write!(fmt, "Red"),
            Alliance::Blue => defmt::write!(fmt, "Blue"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LightStatus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "LightStatus {{ signals: {}, mode: {}, alliance: {} }}",
            self.signals,
            self.mode,
            self.alliance
        )
    }
}
