// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul verbindet die Traits aus blink-core mit der
// ESP32-C6 Hardware (GPIO + Timer-Interrupt).

pub mod gpio_line;
pub mod timer_scheduler;

pub use gpio_line::GpioLine;
pub use timer_scheduler::TimerScheduler;
