//! Status-Events - Zuordnung von Gerätezuständen zu Blink-Patterns
//!
//! Hardware-frei, damit die Übersetzung Event → Pattern und das
//! Pausieren/Fortsetzen auf dem Host getestet werden können. Der
//! Firmware-Task empfängt die Events und ruft nur diese Logik auf.

use crate::blinker::{BlinkerRun, PatternBlinker};
use crate::traits::{OutputLine, PeriodicScheduler};

/// Status-Event für die LED
///
/// Wird von main (oder anderen Tasks) an den Status-Task gesendet.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusEvent {
    /// Ruhezustand
    Idle,
    /// Fehlerzustand (blinkt bis zum nächsten Event)
    Error,
    /// Lebenszeichen
    Heartbeat,
    /// Arbeit für `duration_ms`, danach wieder das vorherige Pattern
    Job { duration_ms: u64 },
    /// Blinker stoppen (LED aus)
    Pause,
    /// Blinker wieder starten
    Resume,
}

/// Patterns je Zustand (MSB zuerst, 1 = an)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StatusPatterns {
    pub idle: u32,
    /// Während eines Jobs, über einen `PatternScopeGuard` gesetzt
    pub busy: u32,
    pub error: u32,
    pub heartbeat: u32,
}

impl StatusPatterns {
    /// Dauerhaftes Pattern für ein Event
    ///
    /// `None` für Events, die kein Dauer-Pattern setzen (Jobs, Pause, Resume).
    pub fn pattern_for(&self, event: StatusEvent) -> Option<u32> {
        match event {
            StatusEvent::Idle => Some(self.idle),
            StatusEvent::Error => Some(self.error),
            StatusEvent::Heartbeat => Some(self.heartbeat),
            StatusEvent::Job { .. } | StatusEvent::Pause | StatusEvent::Resume => None,
        }
    }
}

/// Laufzustand des Blinkers aus Sicht des Status-Tasks
///
/// Hält entweder den laufenden [`BlinkerRun`] oder den freigegebenen
/// Scheduler, damit ein späteres `resume` ihn wiederverwenden kann.
pub enum Blinking<'a, P: OutputLine, S: PeriodicScheduler<'a>> {
    Running(BlinkerRun<'a, P, S>),
    Stopped(S),
}

impl<'a, P: OutputLine + 'a, S: PeriodicScheduler<'a>> Blinking<'a, P, S> {
    pub fn is_running(&self) -> bool {
        matches!(self, Blinking::Running(_))
    }

    /// Stoppt den Blinker (LED aus). Bereits gestoppt: unverändert.
    pub fn pause(self) -> Self {
        match self {
            Blinking::Running(run) => Blinking::Stopped(run.stop()),
            stopped => stopped,
        }
    }

    /// Startet den Blinker mit dem aktuellen Pattern neu. Läuft er schon:
    /// unverändert.
    pub fn resume(self, blinker: &'a PatternBlinker<'a, P>, interval_ms: u32) -> Self {
        match self {
            Blinking::Stopped(scheduler) => {
                Blinking::Running(blinker.start(scheduler, interval_ms))
            }
            running => running,
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for StatusEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            StatusEvent::Idle => defmt::write!(fmt, "Idle"),
            StatusEvent::Error => defmt::write!(fmt, "Error"),
            StatusEvent::Heartbeat => defmt::write!(fmt, "Heartbeat"),
            StatusEvent::Job { duration_ms } => {
                defmt::write!(fmt, "Job {{ duration_ms: {=u64} }}", duration_ms)
            }
            StatusEvent::Pause => defmt::write!(fmt, "Pause"),
            StatusEvent::Resume => defmt::write!(fmt, "Resume"),
        }
    }
}
