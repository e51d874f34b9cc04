// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_signallicht::LightStatusChannel;
use esp_signallicht::config::{
    DIAGNOSTICS_TX_PIN, LED_GPIO_PIN, SERIAL_DIAGNOSTICS, SIGNAL_PIN_1, SIGNAL_PIN_2,
    SIGNAL_PIN_3,
};
use esp_signallicht::tasks::{diagnostics_task, light_control_task};

// Pins aus config.rs müssen zu den Peripherals unten passen
const _: () = assert!(
    SIGNAL_PIN_1 == 3
        && SIGNAL_PIN_2 == 4
        && SIGNAL_PIN_3 == 5
        && LED_GPIO_PIN == 7
        && DIAGNOSTICS_TX_PIN == 16,
    "config.rs Pins passen nicht zu den GPIO-Peripherals in main()"
);

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Status-Channel erstellen (Light Control → Diagnose / Beobachter)
    // PubSubChannel für Broadcast: alle Subscribers bekommen jede Nachricht
    static STATUS_CHANNEL: static_cell::StaticCell<LightStatusChannel> =
        static_cell::StaticCell::new();
    let status_channel = &*STATUS_CHANNEL.init(LightStatusChannel::new());
    let status_publisher = status_channel.publisher().unwrap();

    // Spawn Light Control Task (Eingänge GPIO3/4/5, Strip an GPIO7)
    spawner
        .spawn(light_control_task(
            peripherals.GPIO3,
            peripherals.GPIO4,
            peripherals.GPIO5,
            peripherals.GPIO7,
            peripherals.RMT,
            status_publisher,
        ))
        .unwrap();

    // Spawn Diagnose Task (UART0 TX an GPIO16, 9600 Baud)
    if SERIAL_DIAGNOSTICS {
        let diagnostics_subscriber = status_channel.subscriber().unwrap();
        spawner
            .spawn(diagnostics_task(
                peripherals.UART0,
                peripherals.GPIO16,
                diagnostics_subscriber,
            ))
            .unwrap();
    }

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
