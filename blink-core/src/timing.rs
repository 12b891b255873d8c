//! Software-Timer: Stoppuhr und gepollter periodischer Scheduler
//!
//! Für Targets ohne freien Hardware-Timer. [`Periodic::poll()`] wird aus
//! der Hauptschleife aufgerufen und tickt das registrierte Ziel, sobald das
//! Intervall abgelaufen ist.

use crate::traits::{Clock, PeriodicScheduler, Tick};

/// Misst verstrichene Millisekunden seit dem letzten Reset
///
/// Rechnet mit Wrapping-Arithmetik, ein Überlauf der Uhr ist also
/// unkritisch solange zwischen zwei Messungen weniger als `u32::MAX` ms
/// liegen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stopwatch {
    start_ms: u32,
}

impl Stopwatch {
    pub fn new(now_ms: u32) -> Self {
        Self { start_ms: now_ms }
    }

    pub fn reset(&mut self, now_ms: u32) {
        self.start_ms = now_ms;
    }

    /// # Beispiele
    ///
    /// ```
    /// # use blink_core::Stopwatch;
    /// let watch = Stopwatch::new(u32::MAX - 9);
    /// assert_eq!(watch.elapsed(20), 30);
    /// ```
    pub fn elapsed(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.start_ms)
    }
}

/// Gepollter periodischer Scheduler
pub struct Periodic<'a, C> {
    clock: C,
    stopwatch: Stopwatch,
    interval_ms: u32,
    target: Option<&'a dyn Tick>,
}

impl<'a, C: Clock> Periodic<'a, C> {
    pub fn new(clock: C) -> Self {
        let stopwatch = Stopwatch::new(clock.now_ms());
        Self {
            clock,
            stopwatch,
            interval_ms: 0,
            target: None,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Tickt das Ziel, wenn seit dem letzten Tick das Intervall abgelaufen ist
    ///
    /// Gibt zurück, ob getickt wurde. Verpasste Intervalle werden nicht
    /// nachgeholt: nach einem Tick beginnt die Messung neu.
    pub fn poll(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        let now = self.clock.now_ms();
        if self.stopwatch.elapsed(now) < self.interval_ms {
            return false;
        }

        target.tick();
        self.stopwatch.reset(now);
        true
    }
}

impl<'a, C: Clock> PeriodicScheduler<'a> for Periodic<'a, C> {
    fn attach(&mut self, interval_ms: u32, target: &'a dyn Tick) {
        self.interval_ms = interval_ms;
        self.target = Some(target);
        self.stopwatch.reset(self.clock.now_ms());
    }

    fn detach(&mut self) {
        self.target = None;
    }

    fn is_attached(&self) -> bool {
        self.target.is_some()
    }
}
