// Status Task - übersetzt Status-Events in Blink-Patterns
use blink_core::{Blinking, OutputLine, Pattern, PatternBlinker, PeriodicScheduler};
use defmt::{info, warn};
use embassy_time::{Duration, Timer};

use crate::config::{BLINK_INTERVAL_MS, STATUS_PATTERNS};
use crate::{StatusBlinker, StatusEvent, StatusReceiver, StatusScheduler};

/// Status Logic - Business Logic ohne feste Hardware-Typen
///
/// - Setzt Dauer-Patterns für Idle/Error/Heartbeat
/// - Zeigt Jobs über einen PatternScopeGuard an (danach altes Pattern)
/// - Pausiert/startet den Blinker (gestoppt = LED aus)
///
/// # Trait-basierte Abstraktion
/// Generisch über `OutputLine` und `PeriodicScheduler`, damit die Logik
/// nicht an GPIO8/TIMG1 gebunden ist. Zuordnung und Zustandswechsel
/// stecken in `blink_core::status` und sind dort auf dem Host getestet.
pub async fn status_logic<P, S>(
    blinker: &'static PatternBlinker<'static, P>,
    scheduler: S,
    receiver: StatusReceiver,
) -> !
where
    P: OutputLine + 'static,
    S: PeriodicScheduler<'static>,
{
    let mut state = Blinking::Running(blinker.start(scheduler, BLINK_INTERVAL_MS));
    info!(
        "Blinker running: {} every {} ms",
        Pattern::new(blinker.pattern()),
        BLINK_INTERVAL_MS
    );

    loop {
        let event = receiver.receive().await;
        info!("Status event: {}", event);

        if let Some(pattern) = STATUS_PATTERNS.pattern_for(event) {
            // Gleiches Pattern erneut setzen startet es nicht neu
            blinker.set_pattern(pattern);
            info!("Pattern -> {}", Pattern::new(pattern));
            continue;
        }

        state = match event {
            StatusEvent::Job { duration_ms } => {
                let _busy = blinker.scoped(STATUS_PATTERNS.busy);
                Timer::after(Duration::from_millis(duration_ms)).await;
                info!("Job done, pattern restored");
                state
            }
            StatusEvent::Pause if state.is_running() => {
                info!("Blinker paused");
                state.pause()
            }
            StatusEvent::Resume if !state.is_running() => {
                info!("Blinker resumed");
                state.resume(blinker, BLINK_INTERVAL_MS)
            }
            _ => {
                warn!("Status event ignored in current state");
                state
            }
        };
    }
}

/// Status Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `blinker`: Blinker auf der Status-LED ('static via StaticCell)
/// - `scheduler`: Hardware-Timer Scheduler
/// - `receiver`: Channel Receiver für Status-Events
#[embassy_executor::task]
pub async fn status_task(
    blinker: &'static StatusBlinker,
    scheduler: StatusScheduler,
    receiver: StatusReceiver,
) {
    status_logic(blinker, scheduler, receiver).await
}
