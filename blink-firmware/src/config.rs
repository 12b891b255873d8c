// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use blink_core::{Pattern, StatusPatterns};
use defmt::warn;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die Status-LED
///
/// Nur für das Log. Der Pin selbst ist `peripherals.GPIO8` in bin/main.rs,
/// beide müssen zusammen geändert werden (main.rs prüft das beim Kompilieren).
pub const LED_GPIO_PIN: u8 = 8;

/// LED gegen VCC geschaltet (an = Low)?
pub const LED_INVERTED: bool = false;

/// Blink-Intervall in Millisekunden (ein Bit pro Intervall)
/// Kann zur Build-Zeit über BLINK_INTERVAL_MS in .env überschrieben werden
pub const BLINK_INTERVAL_MS: u32 = match option_env!("BLINK_INTERVAL_MS") {
    Some(text) => match u32::from_str_radix(text, 10) {
        Ok(ms) if ms > 0 => ms,
        _ => panic!("BLINK_INTERVAL_MS muss eine positive Zahl sein"),
    },
    None => 500,
};

// ============================================================================
// Patterns (MSB zuerst, 1 = an)
// ============================================================================

/// Ruhezustand: kurz an, kurz aus
pub const PATTERN_IDLE: u32 = 0b10;

/// Arbeit läuft: schnelles Flackern
pub const PATTERN_BUSY: u32 = 0b1010;

/// Fehler: drei kurze Blitze, dann Pause (S im Morse-Code)
pub const PATTERN_ERROR: u32 = 0b1_0101_0000;

/// Herzschlag: zwei Blitze, lange Pause
pub const PATTERN_HEARTBEAT: u32 = 0b1010_0000_0000;

/// Patterns für den Status-Task
pub const STATUS_PATTERNS: StatusPatterns = StatusPatterns {
    idle: PATTERN_IDLE,
    busy: PATTERN_BUSY,
    error: PATTERN_ERROR,
    heartbeat: PATTERN_HEARTBEAT,
};

/// Pattern beim Start
///
/// Wird zur Build-Zeit aus der Environment Variable BLINK_PATTERN geladen
/// (Binär-String, z.B. "0b1100"). Ungültige Werte werden geloggt, dann
/// gilt PATTERN_IDLE.
pub fn startup_pattern() -> u32 {
    let Some(text) = option_env!("BLINK_PATTERN") else {
        return PATTERN_IDLE;
    };

    match Pattern::try_from(text) {
        Ok(pattern) => pattern.bits(),
        Err(e) => {
            warn!("BLINK_PATTERN \"{=str}\" ungültig: {}", text, e);
            PATTERN_IDLE
        }
    }
}

// ============================================================================
// Demo-Ablauf (main.rs)
// ============================================================================

/// Pause zwischen zwei Demo-Events in Millisekunden
pub const DEMO_STEP_MS: u64 = 8_000;

/// Dauer eines simulierten Jobs in Millisekunden
pub const DEMO_JOB_MS: u64 = 4_000;

/// Kapazität des Status-Channels
pub const STATUS_CHANNEL_SIZE: usize = 4;
