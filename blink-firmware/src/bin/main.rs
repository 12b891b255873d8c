// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - ein vergessener BlinkerRun würde nie abgemeldet
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, and a forgotten \
    BlinkerRun never detaches its timer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::timer::PeriodicTimer;
use esp_hal::timer::timg::TimerGroup;

// Logging
use defmt::info;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use blink_firmware::config::{
    DEMO_JOB_MS, DEMO_STEP_MS, LED_GPIO_PIN, LED_INVERTED, startup_pattern,
};
use blink_firmware::hal::{GpioLine, TimerScheduler};
use blink_firmware::tasks::status_task;
use blink_firmware::{
    DigitalLine, PatternBlinker, StatusBlinker, StatusChannel, StatusEvent, StatusLine,
};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime, spawnt den Status-Task
/// und schickt danach im Kreis Demo-Events.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (TIMG0 + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("Blink firmware starting (LED on GPIO{})", LED_GPIO_PIN);

    // Status-LED: Leitung muss 'static sein, weil der Timer-Interrupt sie nutzt
    // GPIO8 muss zu LED_GPIO_PIN passen
    const _: () = assert!(LED_GPIO_PIN == 8, "LED_GPIO_PIN und peripherals.GPIO8 anpassen");
    let output = Output::new(peripherals.GPIO8, Level::Low, OutputConfig::default());
    static LINE: static_cell::StaticCell<StatusLine> = static_cell::StaticCell::new();
    let line = &*LINE.init(DigitalLine::new(GpioLine::new(output), LED_INVERTED));

    static BLINKER: static_cell::StaticCell<StatusBlinker> = static_cell::StaticCell::new();
    let blinker = &*BLINKER.init(PatternBlinker::new(line, startup_pattern()));

    // Blink-Takt aus TIMG1 (TIMG0 gehört der Embassy Runtime)
    let timg1 = TimerGroup::new(peripherals.TIMG1);
    let scheduler = TimerScheduler::new(PeriodicTimer::new(timg1.timer0));

    // Status Channel erstellen (main → Status Task)
    static STATUS_CHANNEL: static_cell::StaticCell<StatusChannel> =
        static_cell::StaticCell::new();
    let status_channel = &*STATUS_CHANNEL.init(StatusChannel::new());
    let status_sender = status_channel.sender();

    // Spawn Status Task (startet den Blinker)
    spawner
        .spawn(status_task(blinker, scheduler, status_channel.receiver()))
        .unwrap();

    // Demo-Ablauf: zeigt alle Zustände der Reihe nach
    let demo = [
        StatusEvent::Heartbeat,
        StatusEvent::Job {
            duration_ms: DEMO_JOB_MS,
        },
        StatusEvent::Error,
        StatusEvent::Pause,
        StatusEvent::Resume,
        StatusEvent::Idle,
    ];

    loop {
        for event in demo {
            Timer::after(Duration::from_millis(DEMO_STEP_MS)).await;
            status_sender.send(event).await;
        }
    }
}
