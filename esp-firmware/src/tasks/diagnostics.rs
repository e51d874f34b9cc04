// Diagnose Task - gibt die rohen Pin-Werte über UART0 aus
use defmt::{Debug2Format, error, info, warn};
use esp_hal::Async;
use esp_hal::uart::{Config as UartConfig, TxError, Uart};

use crate::LightStatusSubscriber;
use crate::config::DIAGNOSTICS_BAUD_RATE;

/// Diagnose Task - läuft parallel zum Light Control Task
///
/// Schreibt pro empfangenem Status eine Zeile mit den drei Pin-Werten,
/// z.B. `101`. Nur für externes Debugging, niemand liest die Ausgabe.
///
/// # Parameter
/// - `uart0`: UART0 Peripheral
/// - `tx_pin`: TX Pin (GPIO16)
/// - `status_subscriber`: PubSub Subscriber für Status-Broadcasts
#[embassy_executor::task]
pub async fn diagnostics_task(
    uart0: esp_hal::peripherals::UART0<'static>,
    tx_pin: esp_hal::peripherals::GPIO16<'static>,
    mut status_subscriber: LightStatusSubscriber,
) {
    let config = UartConfig::default().with_baudrate(DIAGNOSTICS_BAUD_RATE);
    let mut uart = match Uart::new(uart0, config) {
        Ok(uart) => uart.with_tx(tx_pin).into_async(),
        Err(e) => {
            error!("Diagnostics: UART init failed: {}", Debug2Format(&e));
            return;
        }
    };
    info!("Diagnostics: UART0 @ {} baud", DIAGNOSTICS_BAUD_RATE);

    loop {
        // Verpasste Nachrichten werden übersprungen
        let status = status_subscriber.next_message_pure().await;
        let line = status.signals.diagnostic_line();

        if let Err(e) = write_line(&mut uart, &line).await {
            warn!("Diagnostics: UART write failed: {}", Debug2Format(&e));
        }
    }
}

async fn write_line(uart: &mut Uart<'static, Async>, line: &[u8]) -> Result<(), TxError> {
    let mut rest = line;
    while !rest.is_empty() {
        let written = uart.write_async(rest).await?;
        rest = &rest[written..];
    }
    Ok(())
}
