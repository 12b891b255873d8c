//! Logische Ausgangsleitung mit Polarität

use core::cell::RefCell;

use critical_section::Mutex;

use crate::traits::OutputLine;

/// Digitale Ausgangsleitung (z.B. LED)
///
/// Kapselt einen [`OutputLine`]-Pin und ein Polaritäts-Flag. Aufrufer
/// arbeiten nur mit logisch an/aus; bei `inverted = true` bedeutet "an"
/// elektrisch Low (LED gegen VCC geschaltet).
///
/// Alle Methoden nehmen `&self`, der Pin liegt hinter einer Critical
/// Section. So kann die Leitung geteilt werden, während ein Blinker aus
/// dem Timer-Interrupt darauf schreibt.
pub struct DigitalLine<P> {
    pin: Mutex<RefCell<P>>,
    inverted: bool,
}

/// Kurzname für den häufigsten Anwendungsfall
pub type Led<P> = DigitalLine<P>;

impl<P: OutputLine> DigitalLine<P> {
    /// Übernimmt den Pin und schaltet die Leitung sofort aus
    pub fn new(pin: P, inverted: bool) -> Self {
        let line = Self {
            pin: Mutex::new(RefCell::new(pin)),
            inverted,
        };
        line.off();
        line
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn is_on(&self) -> bool {
        critical_section::with(|cs| self.is_on_in(cs))
    }

    pub fn set(&self, on: bool) {
        critical_section::with(|cs| self.set_in(cs, on));
    }

    pub fn on(&self) {
        self.set(true);
    }

    pub fn off(&self) {
        self.set(false);
    }

    /// Lesen und Schreiben passieren in derselben Critical Section
    pub fn toggle(&self) {
        critical_section::with(|cs| {
            let on = self.is_on_in(cs);
            self.set_in(cs, !on);
        });
    }

    /// Lesender Zugriff auf den Pin (z.B. für Tests)
    ///
    /// Geschrieben wird nur über `set`/`on`/`off`/`toggle`, damit Polarität
    /// und Critical Section nicht umgangen werden.
    ///
    /// # Panics
    /// Wenn `f` dieselbe Leitung schaltet (`on`, `off`, `set`, `toggle`),
    /// da der Pin während `f` ausgeliehen ist. Lesen (`is_on`) ist erlaubt.
    pub fn with_pin<R>(&self, f: impl FnOnce(&P) -> R) -> R {
        critical_section::with(|cs| f(&*self.pin.borrow_ref(cs)))
    }

    pub(crate) fn is_on_in(&self, cs: critical_section::CriticalSection<'_>) -> bool {
        self.pin.borrow_ref(cs).is_set_high() != self.inverted
    }

    pub(crate) fn set_in(&self, cs: critical_section::CriticalSection<'_>, on: bool) {
        self.pin.borrow_ref_mut(cs).set_level(on != self.inverted);
    }
}
