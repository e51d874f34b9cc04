// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    Alliance, LightController, LightMode, LightStatus, SignalReader, SignalTriple, StripError,
    StripWriter,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::pubsub::{PubSubChannel, Publisher, Subscriber};

use crate::config::{STATUS_CHANNEL_CAPACITY, STATUS_CHANNEL_SUBSCRIBERS};

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Statt:  Publisher<'static, NoopRawMutex, LightStatus, 4, 2, 1>
// Nutze:  LightStatusPublisher

/// PubSubChannel für Status-Broadcasts (Signale, Modus, Allianz)
/// - STATUS_CHANNEL_CAPACITY: Nachrichten-Kapazität im Queue
/// - STATUS_CHANNEL_SUBSCRIBERS: Diagnose + ein externer Beobachter
/// - 1: Publisher (Light Control Task)
pub type LightStatusChannel = PubSubChannel<
    NoopRawMutex,
    LightStatus,
    STATUS_CHANNEL_CAPACITY,
    STATUS_CHANNEL_SUBSCRIBERS,
    1,
>;

/// Publisher für Status-Broadcasts
pub type LightStatusPublisher = Publisher<
    'static,
    NoopRawMutex,
    LightStatus,
    STATUS_CHANNEL_CAPACITY,
    STATUS_CHANNEL_SUBSCRIBERS,
    1,
>;

/// Subscriber für Status-Broadcasts
/// Hier liest ein externer Beobachter die Allianz mit
pub type LightStatusSubscriber = Subscriber<
    'static,
    NoopRawMutex,
    LightStatus,
    STATUS_CHANNEL_CAPACITY,
    STATUS_CHANNEL_SUBSCRIBERS,
    1,
>;
