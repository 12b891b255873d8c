//! Pattern Blinker - Zustandsmaschine
//!
//! Gibt bei jedem Scheduler-Tick ein Bit des Patterns auf eine
//! [`DigitalLine`] aus. Zustände:
//!
//! - **Stopped:** [`PatternBlinker`] ohne laufende Registrierung, Leitung aus
//! - **Running:** solange ein [`BlinkerRun`] existiert
//!
//! `set_pattern()` ist in beiden Zuständen erlaubt und wird beim nächsten
//! Tick sichtbar.

use core::cell::Cell;

use critical_section::Mutex;

use crate::guard::PatternScopeGuard;
use crate::line::DigitalLine;
use crate::logic::PatternCursor;
use crate::traits::{OutputLine, PeriodicScheduler, Tick};

/// Blinkt ein Bit-Pattern auf einer geteilten Ausgangsleitung
///
/// Pattern und Cursor liegen gemeinsam hinter einer Critical Section. Ein
/// Tick aus dem Timer-Interrupt sieht daher entweder das komplette alte
/// oder das komplette neue Paar, nie eine Mischung.
pub struct PatternBlinker<'a, P> {
    line: &'a DigitalLine<P>,
    cursor: Mutex<Cell<PatternCursor>>,
}

impl<'a, P: OutputLine> PatternBlinker<'a, P> {
    /// Kurz an, kurz aus
    pub const DEFAULT_PATTERN: u32 = 0b10;

    /// Schrittweite in Millisekunden
    pub const DEFAULT_INTERVAL_MS: u32 = 500;

    /// Erstellt einen gestoppten Blinker (noch keine Ausgabe)
    pub fn new(line: &'a DigitalLine<P>, pattern: u32) -> Self {
        Self {
            line,
            cursor: Mutex::new(Cell::new(PatternCursor::new(pattern))),
        }
    }

    /// Blinker mit [`Self::DEFAULT_PATTERN`]
    pub fn with_default_pattern(line: &'a DigitalLine<P>) -> Self {
        Self::new(line, Self::DEFAULT_PATTERN)
    }

    pub fn line(&self) -> &'a DigitalLine<P> {
        self.line
    }

    pub fn pattern(&self) -> u32 {
        self.cursor().pattern()
    }

    /// Index des nächsten auszugebenden Bits
    pub fn position(&self) -> u8 {
        self.cursor().position()
    }

    /// Konsistente Momentaufnahme von Pattern und Position
    pub fn cursor(&self) -> PatternCursor {
        critical_section::with(|cs| self.cursor.borrow(cs).get())
    }

    /// Setzt ein neues Pattern und startet es beim höchsten gesetzten Bit
    ///
    /// Ein erneutes Setzen des aktiven Patterns ist ein No-op: so kann der
    /// Aufrufer das Pattern aus einer Schleife heraus immer wieder setzen,
    /// ohne es mittendrin neu zu starten.
    pub fn set_pattern(&self, pattern: u32) {
        critical_section::with(|cs| {
            let cell = self.cursor.borrow(cs);
            let mut cursor = cell.get();
            if cursor.set_pattern(pattern) {
                cell.set(cursor);
            }
        });
    }

    /// Gibt ein Bit aus und rückt den Cursor weiter
    pub fn tick(&self) {
        critical_section::with(|cs| {
            let cell = self.cursor.borrow(cs);
            let mut cursor = cell.get();
            let bit = cursor.step();
            cell.set(cursor);
            self.line.set_in(cs, bit);
        });
    }

    /// Überschreibt das Pattern bis der Guard gedroppt wird
    pub fn scoped(&self, pattern: u32) -> PatternScopeGuard<'_, 'a, P> {
        PatternScopeGuard::new(self, pattern)
    }
}

impl<'a, P: OutputLine + 'a> PatternBlinker<'a, P> {
    /// Startet den Blinker (Stopped → Running)
    ///
    /// Gibt sofort das erste Bit aus, damit die Leitung nicht erst nach
    /// einem vollen Intervall das Pattern zeigt, und registriert dann den
    /// periodischen Tick beim Scheduler.
    pub fn start<S>(&'a self, mut scheduler: S, interval_ms: u32) -> BlinkerRun<'a, P, S>
    where
        S: PeriodicScheduler<'a>,
    {
        self.tick();
        scheduler.attach(interval_ms, self);
        BlinkerRun {
            blinker: self,
            scheduler: Some(scheduler),
            interval_ms,
        }
    }
}

impl<P: OutputLine> Tick for PatternBlinker<'_, P> {
    fn tick(&self) {
        PatternBlinker::tick(self);
    }
}

/// Laufender Blinker (Running-Zustand)
///
/// Besitzt den Scheduler für die Dauer der Registrierung. [`stop()`](Self::stop)
/// oder Drop meldet den Tick ab und schaltet die Leitung aus: gestoppt heißt
/// immer "aus", nie "eingefroren beim letzten Bit".
pub struct BlinkerRun<'a, P: OutputLine, S: PeriodicScheduler<'a>> {
    blinker: &'a PatternBlinker<'a, P>,
    scheduler: Option<S>,
    interval_ms: u32,
}

impl<'a, P: OutputLine, S: PeriodicScheduler<'a>> BlinkerRun<'a, P, S> {
    pub fn blinker(&self) -> &'a PatternBlinker<'a, P> {
        self.blinker
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn set_pattern(&self, pattern: u32) {
        self.blinker.set_pattern(pattern);
    }

    pub fn pattern(&self) -> u32 {
        self.blinker.pattern()
    }

    pub fn scheduler(&self) -> &S {
        match &self.scheduler {
            Some(scheduler) => scheduler,
            None => unreachable!("scheduler is only taken by stop"),
        }
    }

    /// Zugriff auf den Scheduler, z.B. um [`Periodic::poll()`](crate::Periodic::poll)
    /// aus der Hauptschleife aufzurufen
    pub fn scheduler_mut(&mut self) -> &mut S {
        match &mut self.scheduler {
            Some(scheduler) => scheduler,
            None => unreachable!("scheduler is only taken by stop"),
        }
    }

    /// Stoppt den Blinker (Running → Stopped) und gibt den Scheduler zurück
    ///
    /// Nach der Rückkehr kommt kein Tick mehr an.
    pub fn stop(mut self) -> S {
        let mut scheduler = match self.scheduler.take() {
            Some(scheduler) => scheduler,
            None => unreachable!("scheduler is only taken by stop"),
        };
        Self::halt(self.blinker, &mut scheduler);
        scheduler
    }

    fn halt(blinker: &PatternBlinker<'a, P>, scheduler: &mut S) {
        scheduler.detach();
        blinker.line.off();
    }
}

impl<'a, P: OutputLine, S: PeriodicScheduler<'a>> Drop for BlinkerRun<'a, P, S> {
    fn drop(&mut self) {
        if let Some(mut scheduler) = self.scheduler.take() {
            Self::halt(self.blinker, &mut scheduler);
        }
    }
}
