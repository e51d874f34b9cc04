//! Controller-Zustandsautomat
//!
//! Hält den persistenten Zustand (Allianz, Blink-Flag, Regenbogen-Phase)
//! und berechnet pro Iteration einen kompletten Frame.

use rgb::RGB8;

use crate::logic::{advance_rainbow_phase, decode_mode, fill_rainbow, fill_solid};
use crate::traits::{StripError, StripWriter};
use crate::types::{
    Alliance, BLUE, ControllerConfig, GREEN, LightMode, OFF, RED, RainbowStyle, RedAutoPolicy,
    SignalTriple, WHITE,
};

/// Zeitbasis für animierte Modi
///
/// Ersetzt blockierende Delays: ein Frame ist fällig, sobald das Intervall
/// seit dem letzten Frame abgelaufen ist.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnimationClock {
    last_frame_ms: Option<u64>,
}

impl AnimationClock {
    pub const fn new() -> Self {
        Self {
            last_frame_ms: None,
        }
    }

    pub fn is_due(&self, now_ms: u64, interval_ms: u64) -> bool {
        match self.last_frame_ms {
            Some(last) => now_ms.saturating_sub(last) >= interval_ms,
            None => true,
        }
    }

    pub fn mark(&mut self, now_ms: u64) {
        self.last_frame_ms = Some(now_ms);
    }
}

/// Persistenter Zustand zwischen den Iterationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerState {
    /// Wird nur geschrieben, für externe Leser
    pub alliance: Alliance,
    /// `true` = nächster Blink-Frame leuchtet
    pub flash_on: bool,
    pub rainbow_phase: u16,
}

impl ControllerState {
    pub const fn new() -> Self {
        Self {
            alliance: Alliance::Blue,
            flash_on: true,
            rainbow_phase: 0,
        }
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Signal-zu-Licht Controller für einen Strip mit `N` Pixeln
pub struct LightController<const N: usize> {
    config: ControllerConfig,
    state: ControllerState,
    frame: [RGB8; N],
    last_mode: Option<LightMode>,
    clock: AnimationClock,
}

impl<const N: usize> LightController<N> {
    pub const fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            state: ControllerState::new(),
            frame: [OFF; N],
            last_mode: None,
            clock: AnimationClock::new(),
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn alliance(&self) -> Alliance {
        self.state.alliance
    }

    pub fn frame(&self) -> &[RGB8; N] {
        &self.frame
    }

    /// Zuletzt gerenderter Modus, `None` vor dem ersten Frame
    pub fn last_mode(&self) -> Option<LightMode> {
        self.last_mode
    }

    /// Eine komplette Iteration: dekodieren, Seiteneffekte, Frame füllen
    pub fn step(&mut self, signals: SignalTriple) -> LightMode {
        let mode = decode_mode(signals);
        self.render_mode(mode);
        mode
    }

    /// Rendert `mode` in den Frame und wendet dessen Seiteneffekte an
    pub fn render_mode(&mut self, mode: LightMode) {
        match mode {
            LightMode::Idle => fill_solid(&mut self.frame, OFF),
            LightMode::RedTeleop => {
                fill_solid(&mut self.frame, RED);
                self.state.alliance = Alliance::Red;
            }
            LightMode::BlueTeleop => {
                fill_solid(&mut self.frame, BLUE);
                self.state.alliance = Alliance::Blue;
            }
            LightMode::TargetLock => fill_solid(&mut self.frame, GREEN),
            LightMode::Endgame => {
                // RestartOnEntry: erster Frame bei Farbton 0, danach weiterzählen
                let restart = self.config.rainbow_style == RainbowStyle::RestartOnEntry
                    && self.last_mode != Some(LightMode::Endgame);
                self.state.rainbow_phase = if restart {
                    0
                } else {
                    advance_rainbow_phase(self.state.rainbow_phase, self.config.rainbow_step)
                };
                fill_rainbow(&mut self.frame, self.state.rainbow_phase);
            }
            LightMode::Shooting => self.flash(GREEN),
            LightMode::RedAuto => match self.config.red_auto {
                RedAutoPolicy::FlashRed => {
                    self.flash(RED);
                    self.state.alliance = Alliance::Red;
                }
                RedAutoPolicy::FlashBlue => {
                    self.flash(BLUE);
                    self.state.alliance = Alliance::Blue;
                }
            },
            LightMode::BlueAuto => {
                self.flash(BLUE);
                self.state.alliance = Alliance::Blue;
            }
            LightMode::Fault => fill_solid(&mut self.frame, WHITE),
        }
        self.last_mode = Some(mode);
    }

    fn flash(&mut self, color: RGB8) {
        let color = if self.state.flash_on { color } else { OFF };
        fill_solid(&mut self.frame, color);
        self.state.flash_on = !self.state.flash_on;
    }

    /// Nicht-blockierender Scheduler
    ///
    /// Statische Modi rendern bei jedem Aufruf. Animierte Modi rendern bei
    /// einem Modus-Wechsel sofort, danach erst wenn ihr Intervall abgelaufen
    /// ist. Liefert `Some(mode)` wenn ein neuer Frame berechnet wurde.
    pub fn poll(&mut self, now_ms: u64, signals: SignalTriple) -> Option<LightMode> {
        let mode = decode_mode(signals);
        let changed = self.last_mode != Some(mode);

        let due = match self.config.interval_ms(mode.animation()) {
            None => true,
            Some(interval_ms) => changed || self.clock.is_due(now_ms, interval_ms),
        };
        if !due {
            return None;
        }

        self.render_mode(mode);
        self.clock.mark(now_ms);
        Some(mode)
    }

    /// `poll()` und bei neuem Frame direkt auf den Strip schreiben
    pub fn run_cycle<W: StripWriter>(
        &mut self,
        now_ms: u64,
        signals: SignalTriple,
        strip: &mut W,
    ) -> Result<Option<LightMode>, StripError> {
        let Some(mode) = self.poll(now_ms, signals) else {
            return Ok(None);
        };
        strip.write_frame(&self.frame)?;
        Ok(Some(mode))
    }
}

impl<const N: usize> Default for LightController<N> {
    fn default() -> Self {
        Self::new(ControllerConfig::new())
    }
}
