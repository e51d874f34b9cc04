// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use esp_core::{ControllerConfig, RainbowStyle, RedAutoPolicy};

// ============================================================================
// RoboRio Eingänge
// ============================================================================

// Pin-Nummern spiegeln die Peripherals in main(), dort per const-assert geprüft.
// Eine Änderung hier erfordert auch eine Änderung in main.rs.

/// GPIO-Pins für die drei DIO-Leitungen vom RoboRio (A, B, C)
/// Interner Pull-Down: offene Leitung liest LOW
pub const SIGNAL_PIN_1: u8 = 3;
pub const SIGNAL_PIN_2: u8 = 4;
pub const SIGNAL_PIN_3: u8 = 5;

/// Abtast-Intervall der Eingänge in Millisekunden
/// Auch während Blinken/Regenbogen wird in diesem Takt gelesen
pub const POLL_INTERVAL_MS: u64 = 5;

// ============================================================================
// LED Strip Konfiguration
// ============================================================================

/// GPIO-Pin für die Datenleitung des Strips (WS2812/Neopixel)
pub const LED_GPIO_PIN: u8 = 7;

/// Anzahl der LEDs im Strip
pub const LED_COUNT: usize = 120;

/// Globale Helligkeit (0-255), ca. 78%
/// Zu hoch → Spannungseinbruch am Strip-Ende
pub const LED_BRIGHTNESS: u8 = 200;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Controller Konfiguration
// ============================================================================

/// Animations-Verhalten des Controllers
///
/// Zwei Firmware-Stände existieren: 150 ms / 50 ms Blink-Intervall,
/// rot oder blau blinkend für Code (1,1,0), fortlaufender oder bei jedem
/// Endgame neu startender Regenbogen. Auswahl hier.
pub const CONTROLLER_CONFIG: ControllerConfig = ControllerConfig::new()
    .with_flash_interval_ms(150)
    .with_rainbow_interval_ms(10)
    .with_rainbow_step(256)
    .with_red_auto(RedAutoPolicy::FlashRed)
    .with_rainbow_style(RainbowStyle::Continuous);

// ============================================================================
// Diagnose (serielle Ausgabe)
// ============================================================================

/// Rohe Pin-Werte pro Frame auf UART0 ausgeben
pub const SERIAL_DIAGNOSTICS: bool = true;

/// Baudrate der Diagnose-Schnittstelle
pub const DIAGNOSTICS_BAUD_RATE: u32 = 9600;

/// UART0 TX Pin (ESP32-C6 Default)
/// defmt-Logs laufen über USB-Serial-JTAG, UART0 bleibt frei
pub const DIAGNOSTICS_TX_PIN: u8 = 16;

// ============================================================================
// Status-Channel
// ============================================================================

/// Nachrichten-Kapazität des Status-Channels
pub const STATUS_CHANNEL_CAPACITY: usize = 4;

/// Maximale Anzahl Subscribers (Diagnose + ein externer Beobachter)
pub const STATUS_CHANNEL_SUBSCRIBERS: usize = 2;
