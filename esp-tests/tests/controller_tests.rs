//! Integration Tests für den LightController
//!
//! Scheduler, persistenter Zustand und Konfigurations-Varianten.
//! Laufen auf dem Host mit Mock-Hardware.

use esp_core::types::{BLUE, GREEN, OFF, RED};
use esp_core::{
    Alliance, ControllerConfig, LightController, LightMode, LightStatus, RainbowStyle,
    RedAutoPolicy, SignalReader, SignalTriple, StripError, StripWriter,
};
use rgb::RGB8;

const LED_COUNT: usize = 120;

// ============================================================================
// Mocks
// ============================================================================

#[derive(Default)]
struct MockStripWriter {
    frames: Vec<Vec<RGB8>>,
    fail_next_write: bool,
}

impl StripWriter for MockStripWriter {
    fn write_frame(&mut self, frame: &[RGB8]) -> Result<(), StripError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(StripError::WriteFailed);
        }
        self.frames.push(frame.to_vec());
        Ok(())
    }
}

/// Liefert eine feste Folge von Signal-Codes, danach den letzten
struct ScriptedSignals {
    codes: Vec<u8>,
    position: usize,
}

impl ScriptedSignals {
    fn new(codes: &[u8]) -> Self {
        Self {
            codes: codes.to_vec(),
            position: 0,
        }
    }
}

impl SignalReader for ScriptedSignals {
    fn read(&mut self) -> SignalTriple {
        let index = self.position.min(self.codes.len() - 1);
        self.position += 1;
        SignalTriple::from_code(self.codes[index])
    }
}

const IDLE: u8 = 0b000;
const RED_TELEOP: u8 = 0b001;
const BLUE_TELEOP: u8 = 0b010;
const TARGET_LOCK: u8 = 0b011;
const ENDGAME: u8 = 0b100;
const SHOOTING: u8 = 0b101;
const RED_AUTO: u8 = 0b110;
const BLUE_AUTO: u8 = 0b111;

fn first_pixel<const N: usize>(controller: &LightController<N>) -> RGB8 {
    controller.frame()[0]
}

// ============================================================================
// Tests: Blinken
// ============================================================================

#[test]
fn test_flash_modes_strictly_alternate() {
    for (code, lit) in [(SHOOTING, GREEN), (RED_AUTO, RED), (BLUE_AUTO, BLUE)] {
        let mut controller: LightController<LED_COUNT> = LightController::default();
        for iteration in 0..10 {
            let flag_before = controller.state().flash_on;
            controller.step(SignalTriple::from_code(code));

            let expected = if iteration % 2 == 0 { lit } else { OFF };
            assert!(controller.frame().iter().all(|p| *p == expected));
            assert_eq!(controller.state().flash_on, !flag_before);
        }
    }
}

#[test]
fn test_flash_flag_persists_across_modes() {
    let mut controller: LightController<LED_COUNT> = LightController::default();
    controller.step(SignalTriple::from_code(SHOOTING));
    controller.step(SignalTriple::from_code(IDLE));
    controller.step(SignalTriple::from_code(BLUE_AUTO));

    // Flag stand nach dem ersten Blink-Frame auf "aus"
    assert_eq!(first_pixel(&controller), OFF);
}

// ============================================================================
// Tests: Regenbogen
// ============================================================================

#[test]
fn test_rainbow_phase_never_overflows() {
    let mut controller: LightController<LED_COUNT> = LightController::default();
    let mut previous = controller.state().rainbow_phase;

    for _ in 0..1_000 {
        controller.step(SignalTriple::from_code(ENDGAME));
        let phase = controller.state().rainbow_phase;
        if phase < previous {
            assert_eq!(phase, 256, "phase must restart from zero");
        } else {
            assert_eq!(phase - previous, 256);
        }
        previous = phase;
    }
}

#[test]
fn test_rainbow_animates() {
    let mut controller: LightController<LED_COUNT> = LightController::default();
    controller.step(SignalTriple::from_code(ENDGAME));
    let first = *controller.frame();
    controller.step(SignalTriple::from_code(ENDGAME));

    assert_ne!(&first, controller.frame());
}

#[test]
fn test_rainbow_restart_style() {
    let config = ControllerConfig::new().with_rainbow_style(RainbowStyle::RestartOnEntry);
    let mut controller: LightController<LED_COUNT> = LightController::new(config);

    for _ in 0..5 {
        controller.step(SignalTriple::from_code(ENDGAME));
    }
    assert_eq!(controller.state().rainbow_phase, 1_024);
    controller.step(SignalTriple::from_code(TARGET_LOCK));
    controller.step(SignalTriple::from_code(ENDGAME));

    // Neuer Sweep beginnt bei Farbton 0: erstes Pixel rein rot
    assert_eq!(controller.state().rainbow_phase, 0);
    assert_eq!(first_pixel(&controller), RED);
}

#[test]
fn test_rainbow_small_step_changes_frame() {
    let config = ControllerConfig::new().with_rainbow_step(64);
    let mut controller: LightController<LED_COUNT> = LightController::new(config);

    controller.step(SignalTriple::from_code(ENDGAME));
    let first = *controller.frame();
    controller.step(SignalTriple::from_code(ENDGAME));

    assert_eq!(controller.state().rainbow_phase, 128);
    assert_ne!(&first, controller.frame());
}

// ============================================================================
// Tests: Allianz
// ============================================================================

#[test]
fn test_alliance_set_by_teleop_and_auto() {
    let mut controller: LightController<LED_COUNT> = LightController::default();
    assert_eq!(controller.alliance(), Alliance::Blue);

    controller.step(SignalTriple::from_code(RED_TELEOP));
    assert_eq!(controller.alliance(), Alliance::Red);

    controller.step(SignalTriple::from_code(BLUE_AUTO));
    assert_eq!(controller.alliance(), Alliance::Blue);

    controller.step(SignalTriple::from_code(RED_AUTO));
    assert_eq!(controller.alliance(), Alliance::Red);

    controller.step(SignalTriple::from_code(BLUE_TELEOP));
    assert_eq!(controller.alliance(), Alliance::Blue);
}

#[test]
fn test_alliance_untouched_by_neutral_modes() {
    for start in [RED_TELEOP, BLUE_TELEOP] {
        let mut controller: LightController<LED_COUNT> = LightController::default();
        controller.step(SignalTriple::from_code(start));
        let alliance = controller.alliance();

        for code in [IDLE, TARGET_LOCK, ENDGAME, SHOOTING] {
            controller.step(SignalTriple::from_code(code));
            assert_eq!(controller.alliance(), alliance);
        }
        controller.render_mode(LightMode::Fault);
        assert_eq!(controller.alliance(), alliance);
    }
}

#[test]
fn test_red_auto_flash_blue_policy() {
    let config = ControllerConfig::new().with_red_auto(RedAutoPolicy::FlashBlue);
    let mut controller: LightController<LED_COUNT> = LightController::new(config);

    controller.step(SignalTriple::from_code(RED_TELEOP));
    controller.step(SignalTriple::from_code(RED_AUTO));

    assert_eq!(first_pixel(&controller), BLUE);
    assert_eq!(controller.alliance(), Alliance::Blue);
}

// ============================================================================
// Tests: Scheduler + run_cycle()
// ============================================================================

#[test]
fn test_run_cycle_writes_full_frames() {
    let mut controller: LightController<LED_COUNT> = LightController::default();
    let mut strip = MockStripWriter::default();

    let mode = controller
        .run_cycle(0, SignalTriple::from_code(RED_TELEOP), &mut strip)
        .unwrap();

    assert_eq!(mode, Some(LightMode::RedTeleop));
    assert_eq!(strip.frames.len(), 1);
    assert_eq!(strip.frames[0].len(), LED_COUNT);
    assert!(strip.frames[0].iter().all(|p| *p == RED));
}

#[test]
fn test_run_cycle_skips_write_while_animation_waits() {
    let config = ControllerConfig::new().with_flash_interval_ms(50);
    let mut controller: LightController<LED_COUNT> = LightController::new(config);
    let mut strip = MockStripWriter::default();
    let mut reader = ScriptedSignals::new(&[SHOOTING]);

    // 5 ms Polling über 200 ms: Frames bei 0, 50, 100, 150, 200
    for now_ms in (0..=200).step_by(5) {
        controller.run_cycle(now_ms, reader.read(), &mut strip).unwrap();
    }

    assert_eq!(strip.frames.len(), 5);
    let colors: Vec<RGB8> = strip.frames.iter().map(|f| f[0]).collect();
    assert_eq!(colors, vec![GREEN, OFF, GREEN, OFF, GREEN]);
}

#[test]
fn test_input_change_seen_during_animation() {
    let mut controller: LightController<LED_COUNT> = LightController::default();
    let mut strip = MockStripWriter::default();
    let mut reader = ScriptedSignals::new(&[BLUE_AUTO, BLUE_AUTO, TARGET_LOCK]);

    let modes: Vec<Option<LightMode>> = (0..3)
        .map(|i| controller.run_cycle(i * 5, reader.read(), &mut strip).unwrap())
        .collect();

    assert_eq!(
        modes,
        vec![Some(LightMode::BlueAuto), None, Some(LightMode::TargetLock)]
    );
    assert_eq!(first_pixel(&controller), GREEN);
}

#[test]
fn test_run_cycle_propagates_write_error() {
    let mut controller: LightController<LED_COUNT> = LightController::default();
    let mut strip = MockStripWriter {
        fail_next_write: true,
        ..Default::default()
    };

    let result = controller.run_cycle(0, SignalTriple::from_code(IDLE), &mut strip);
    assert_eq!(result, Err(StripError::WriteFailed));

    // Nächster Zyklus läuft normal weiter
    let result = controller.run_cycle(5, SignalTriple::from_code(IDLE), &mut strip);
    assert_eq!(result, Ok(Some(LightMode::Idle)));
}

// ============================================================================
// Tests: serde (Status für externe Leser)
// ============================================================================

#[test]
fn test_status_serializes_snake_case() {
    let status = LightStatus {
        signals: SignalTriple::from_code(RED_TELEOP),
        mode: LightMode::RedTeleop,
        alliance: Alliance::Red,
    };
    let mut buf = [0u8; 128];
    let len = serde_json_core::to_slice(&status, &mut buf).unwrap();

    assert_eq!(
        core::str::from_utf8(&buf[..len]).unwrap(),
        r#"{"signals":{"pin1":false,"pin2":false,"pin3":true},"mode":"red_teleop","alliance":"red"}"#
    );
}

#[test]
fn test_alliance_deserializes() {
    let (alliance, _) = serde_json_core::from_str::<Alliance>(r#""blue""#).unwrap();
    assert_eq!(alliance, Alliance::Blue);
}
