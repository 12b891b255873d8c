// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von blink-core
pub use blink_core::{
    DigitalLine, Pattern, PatternBlinker, PatternScopeGuard, StatusEvent, StatusPatterns,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Receiver, Sender};

use crate::config::STATUS_CHANNEL_SIZE;
use crate::hal::{GpioLine, TimerScheduler};

// ============================================================================
// Type-Aliase für Hardware- und Channel-Typen
// ============================================================================
//
// Embassy Tasks dürfen nicht generisch sein, daher feste Typen.

/// Status-LED auf GPIO
pub type StatusLine = DigitalLine<GpioLine<'static>>;

/// Blinker auf der Status-LED
pub type StatusBlinker = PatternBlinker<'static, GpioLine<'static>>;

/// Scheduler für den Blinker
pub type StatusScheduler = TimerScheduler;

/// Channel für Status-Events (main → Status Task)
pub type StatusChannel =
    embassy_sync::channel::Channel<NoopRawMutex, StatusEvent, STATUS_CHANNEL_SIZE>;

/// Sender für Status-Events
pub type StatusSender = Sender<'static, NoopRawMutex, StatusEvent, STATUS_CHANNEL_SIZE>;

/// Receiver für Status-Events (Status Task empfängt)
pub type StatusReceiver = Receiver<'static, NoopRawMutex, StatusEvent, STATUS_CHANNEL_SIZE>;
