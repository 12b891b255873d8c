// Task-Modul: Enthält alle Embassy Tasks
//
// Tasks kommunizieren über Embassy Channels (main → Status Task).
// Der Blink-Takt selbst kommt aus dem Timer-Interrupt, nicht aus einem Task.

pub mod status;

// Re-export Tasks für einfachen Import
pub use status::status_task;
