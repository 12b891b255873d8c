//! Blink Core - Platform-agnostic Pattern Blinker
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, die Pattern-Logik und die Blinker-Zustandsmaschine.

#![no_std]

pub mod blinker;
pub mod guard;
pub mod line;
pub mod logic;
pub mod status;
pub mod timing;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use blinker::{BlinkerRun, PatternBlinker};
pub use guard::PatternScopeGuard;
pub use line::{DigitalLine, Led};
pub use logic::{PatternCursor, highest_set_bit};
pub use status::{Blinking, StatusEvent, StatusPatterns};
pub use timing::{Periodic, Stopwatch};
pub use traits::{Clock, OutputLine, PeriodicScheduler, Tick};
pub use types::{Pattern, PatternError};
