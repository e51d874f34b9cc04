//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie dekodiert die drei RoboRio-Signale in einen Licht-Modus und
//! berechnet daraus den Frame für den LED-Strip.

#![no_std]

pub mod controller;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use controller::{AnimationClock, ControllerState, LightController};
pub use logic::{
    advance_rainbow_phase, decode_mode, fill_rainbow, fill_solid, hue_to_rgb, pixel_hue,
};
pub use traits::{SignalReader, StripError, StripWriter};
pub use types::{
    Alliance, Animation, ControllerConfig, LightMode, LightStatus, RainbowStyle, RedAutoPolicy,
    SignalTriple,
};
