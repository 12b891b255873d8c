//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Pin- und Timer-Zugriff
//! ohne konkrete Implementierung.

/// Trait für eine einzelne digitale Ausgangsleitung
///
/// Arbeitet auf elektrischer Ebene (High/Low). Die Polarität (invertierte
/// LEDs) wird erst von [`DigitalLine`](crate::DigitalLine) berücksichtigt.
///
/// # Implementierungen
/// - **Production:** GpioLine (ESP32 GPIO Output)
/// - **Testing:** MockPin (in-memory Mock)
pub trait OutputLine: Send {
    /// Setzt den elektrischen Pegel der Leitung
    fn set_level(&mut self, high: bool);

    /// Liest den zuletzt gesetzten Pegel zurück
    fn is_set_high(&self) -> bool;
}

/// Ein Callback-Ziel, das periodisch vom Scheduler aufgerufen wird
///
/// `tick()` kann im Interrupt-Kontext laufen: kurz halten, nie blockieren.
pub trait Tick: Sync {
    fn tick(&self);
}

/// Trait für periodische Scheduler (Hardware-Timer oder Software-Polling)
///
/// Pro Scheduler-Instanz gibt es höchstens eine Registrierung. Ein zweites
/// `attach()` ersetzt die erste.
///
/// # Implementierungen
/// - **Production:** TimerScheduler (ESP32 TIMG1 Interrupt)
/// - **Software:** [`Periodic`](crate::Periodic) (gepollt aus der Hauptschleife)
/// - **Testing:** ManualScheduler (feuert auf Anfrage)
pub trait PeriodicScheduler<'a> {
    /// Registriert `target`, das ab jetzt alle `interval_ms` Millisekunden
    /// getickt wird. Der erste Aufruf erfolgt nach Ablauf eines Intervalls.
    fn attach(&mut self, interval_ms: u32, target: &'a dyn Tick);

    /// Entfernt die Registrierung
    ///
    /// Nach der Rückkehr darf für diese Registrierung kein `tick()` mehr
    /// erfolgen.
    fn detach(&mut self);

    /// Gibt an, ob aktuell ein Ziel registriert ist
    fn is_attached(&self) -> bool;
}

/// Monotone Millisekunden-Uhr für gepollte Scheduler
///
/// Der Wert darf überlaufen (wie `millis()` auf Mikrocontrollern).
pub trait Clock {
    fn now_ms(&self) -> u32;
}
