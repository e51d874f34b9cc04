// Light Control Task - liest die RoboRio-Signale und steuert den Strip
use defmt::{error, info};
use embassy_time::{Duration, Instant, Ticker};
use esp_hal_smartled::smart_led_buffer;

use crate::config::{CONTROLLER_CONFIG, LED_COUNT, POLL_INTERVAL_MS, RMT_CLOCK_MHZ};
use crate::hal::{GpioSignalReader, RmtStripWriter};
use crate::{LightController, LightStatus, LightStatusPublisher, SignalReader, StripWriter};

/// Light Control Logic - Testbare Steuerungs-Logik ohne Hardware-Abhängigkeit
///
/// Diese Funktion enthält die komplette Hauptschleife:
/// - Tastet die drei Eingänge alle `POLL_INTERVAL_MS` ab
/// - Lässt den Controller entscheiden, ob ein neuer Frame fällig ist
/// - Schreibt fällige Frames komplett auf den Strip
/// - Verteilt den Status (Signale, Modus, Allianz) an Beobachter
///
/// Blinken und Regenbogen blockieren nicht mehr: Eingangs-Wechsel
/// werden spätestens nach einem Poll-Intervall sichtbar.
///
/// # Trait-basierte Abstraktion
/// - `S: SignalReader` - GPIO-Eingänge oder Mock
/// - `W: StripWriter` - RMT Strip oder Mock
pub async fn light_control_logic<S: SignalReader, W: StripWriter>(
    mut signals: S,
    mut strip: W,
    status_publisher: LightStatusPublisher,
) -> ! {
    let mut controller: LightController<LED_COUNT> = LightController::new(CONTROLLER_CONFIG);
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        let sampled = signals.read();
        let previous_mode = controller.last_mode();
        let previous_alliance = controller.alliance();

        match controller.run_cycle(Instant::now().as_millis(), sampled, &mut strip) {
            Ok(Some(mode)) => {
                if previous_mode != Some(mode) {
                    info!("Mode: {} (signals {})", mode, sampled);
                }
                let alliance = controller.alliance();
                if alliance != previous_alliance {
                    info!("Alliance: {}", alliance);
                }

                // Lossy: langsame Subscriber verpassen Frames
                status_publisher.publish_immediate(LightStatus {
                    signals: sampled,
                    mode,
                    alliance,
                });
            }
            Ok(None) => {}
            Err(e) => error!("Failed to write to strip: {}", e),
        }

        ticker.next().await;
    }
}

/// Light Control Task - Embassy Task
///
/// Übernimmt die Hardware-Initialisierung und ruft dann
/// `light_control_logic()` auf.
///
/// # Parameter
/// - `pin1`..`pin3`: DIO-Leitungen vom RoboRio
/// - `led_pin`: Datenleitung des Strips
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `status_publisher`: PubSub Publisher für Status-Broadcasts
#[embassy_executor::task]
pub async fn light_control_task(
    pin1: esp_hal::peripherals::GPIO3<'static>,
    pin2: esp_hal::peripherals::GPIO4<'static>,
    pin3: esp_hal::peripherals::GPIO5<'static>,
    led_pin: esp_hal::peripherals::GPIO7<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    status_publisher: LightStatusPublisher,
) {
    let signals = GpioSignalReader::new(pin1, pin2, pin3);

    // Buffer für SmartLED Daten erstellen (LED_COUNT LEDs)
    let mut rmt_buffer = smart_led_buffer!(LED_COUNT);

    let mut strip = match RmtStripWriter::new(led_pin, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer)
    {
        Ok(strip) => strip,
        Err(e) => {
            error!("Strip: Initialization failed: {}", e);
            return;
        }
    };

    // Strip beim Start leeren
    if let Err(e) = strip.write_frame(&[rgb::RGB8::default(); LED_COUNT]) {
        error!("Strip: Initial clear failed: {}", e);
    }

    info!(
        "Light control started: {} LEDs, poll every {} ms",
        LED_COUNT, POLL_INTERVAL_MS
    );
    light_control_logic(signals, strip, status_publisher).await
}
