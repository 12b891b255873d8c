// Hardware-Timer Scheduler
//
// Periodischer TIMG-Timer, dessen Interrupt das registrierte Tick-Ziel
// aufruft. Timer und Ziel liegen in Statics, weil der Interrupt-Handler
// keinen Kontext-Parameter bekommt.

use core::cell::{Cell, RefCell};

use blink_core::{PeriodicScheduler, Tick};
use critical_section::Mutex;
use defmt::error;
use esp_hal::Blocking;
use esp_hal::handler;
use esp_hal::time::Duration;
use esp_hal::timer::PeriodicTimer;

/// Der Hardware-Timer (wird im Interrupt quittiert)
static TIMER: Mutex<RefCell<Option<PeriodicTimer<'static, Blocking>>>> =
    Mutex::new(RefCell::new(None));

/// Aktuell registriertes Ziel
static TARGET: Mutex<Cell<Option<&'static dyn Tick>>> = Mutex::new(Cell::new(None));

/// Scheduler auf Basis eines TIMG Periodic Timers
///
/// Es darf nur eine Instanz geben: Timer und Ziel liegen in Statics.
/// Deshalb nimmt `new()` den Timer per Move und es existiert nur ein
/// TimerScheduler pro Firmware.
pub struct TimerScheduler {
    _private: (),
}

impl TimerScheduler {
    /// Übernimmt den Timer und installiert den Interrupt-Handler
    ///
    /// # Parameter
    /// - `timer`: Periodic Timer (z.B. aus TIMG1, TIMG0 gehört esp-rtos)
    pub fn new(mut timer: PeriodicTimer<'static, Blocking>) -> Self {
        timer.set_interrupt_handler(timer_interrupt);
        critical_section::with(|cs| {
            TIMER.borrow_ref_mut(cs).replace(timer);
            TARGET.borrow(cs).set(None);
        });
        Self { _private: () }
    }
}

impl PeriodicScheduler<'static> for TimerScheduler {
    fn attach(&mut self, interval_ms: u32, target: &'static dyn Tick) {
        critical_section::with(|cs| {
            TARGET.borrow(cs).set(Some(target));

            let mut timer = TIMER.borrow_ref_mut(cs);
            if let Some(timer) = timer.as_mut() {
                if let Err(_e) = timer.start(Duration::from_millis(interval_ms as u64)) {
                    error!("Failed to start blink timer ({} ms)", interval_ms);
                }
                timer.enable_interrupt(true);
            }
        });
    }

    fn detach(&mut self) {
        // Ziel und Interrupt in derselben Critical Section entfernen:
        // danach kann kein Tick mehr ankommen
        critical_section::with(|cs| {
            TARGET.borrow(cs).set(None);

            let mut timer = TIMER.borrow_ref_mut(cs);
            if let Some(timer) = timer.as_mut() {
                timer.enable_interrupt(false);
                timer.clear_interrupt();
                if let Err(_e) = timer.cancel() {
                    error!("Failed to cancel blink timer");
                }
            }
        });
    }

    fn is_attached(&self) -> bool {
        critical_section::with(|cs| TARGET.borrow(cs).get().is_some())
    }
}

/// Timer-Interrupt: quittieren, dann ein Bit ausgeben
///
/// Kein Logging hier - der Handler muss kurz bleiben.
#[handler]
fn timer_interrupt() {
    critical_section::with(|cs| {
        if let Some(timer) = TIMER.borrow_ref_mut(cs).as_mut() {
            timer.clear_interrupt();
        }
        if let Some(target) = TARGET.borrow(cs).get() {
            target.tick();
        }
    });
}
