//! Scope Guard für temporäre Patterns

use crate::blinker::PatternBlinker;
use crate::traits::OutputLine;

/// Setzt ein Pattern für die Lebensdauer des Guards
///
/// Beim Drop wird das vorher aktive Pattern wiederhergestellt, auch wenn
/// der Scope per Panic verlassen wird. Verschachtelte Guards stellen in
/// umgekehrter Reihenfolge (LIFO) wieder her.
///
/// # Beispiele
///
/// ```
/// # use blink_core::{DigitalLine, OutputLine, PatternBlinker, PatternScopeGuard};
/// # struct Pin(bool);
/// # impl OutputLine for Pin {
/// #     fn set_level(&mut self, high: bool) { self.0 = high; }
/// #     fn is_set_high(&self) -> bool { self.0 }
/// # }
/// let line = DigitalLine::new(Pin(false), false);
/// let blinker = PatternBlinker::new(&line, 0b10);
/// {
///     let _busy = PatternScopeGuard::new(&blinker, 0b1110);
///     assert_eq!(blinker.pattern(), 0b1110);
/// }
/// assert_eq!(blinker.pattern(), 0b10);
/// ```
#[must_use = "das Pattern wird sofort wiederhergestellt, wenn der Guard nicht gebunden wird"]
pub struct PatternScopeGuard<'b, 'a, P: OutputLine> {
    blinker: &'b PatternBlinker<'a, P>,
    saved: u32,
}

impl<'b, 'a, P: OutputLine> PatternScopeGuard<'b, 'a, P> {
    pub fn new(blinker: &'b PatternBlinker<'a, P>, pattern: u32) -> Self {
        let saved = blinker.pattern();
        blinker.set_pattern(pattern);
        Self { blinker, saved }
    }

    /// Pattern, das beim Drop wiederhergestellt wird
    pub fn saved(&self) -> u32 {
        self.saved
    }
}

impl<P: OutputLine> Drop for PatternScopeGuard<'_, '_, P> {
    fn drop(&mut self) {
        self.blinker.set_pattern(self.saved);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::line::DigitalLine;

    struct FakePin(bool);

    impl OutputLine for FakePin {
        fn set_level(&mut self, high: bool) {
            self.0 = high;
        }

        fn is_set_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_guard_restores_pattern() {
        let line = DigitalLine::new(FakePin(false), false);
        let blinker = PatternBlinker::new(&line, 0b10);
        {
            let guard = PatternScopeGuard::new(&blinker, 0b111);
            assert_eq!(guard.saved(), 0b10);
            assert_eq!(blinker.pattern(), 0b111);
        }
        assert_eq!(blinker.pattern(), 0b10);
    }

    #[test]
    fn test_nested_guards_restore_lifo() {
        let line = DigitalLine::new(FakePin(false), false);
        let blinker = PatternBlinker::new(&line, 0b1);
        {
            let _outer = blinker.scoped(0b10);
            {
                let _inner = blinker.scoped(0b100);
                assert_eq!(blinker.pattern(), 0b100);
            }
            assert_eq!(blinker.pattern(), 0b10);
        }
        assert_eq!(blinker.pattern(), 0b1);
    }

    #[test]
    fn test_guard_with_same_pattern_keeps_cursor() {
        let line = DigitalLine::new(FakePin(false), false);
        let blinker = PatternBlinker::new(&line, 0b1010);
        blinker.tick();
        assert_eq!(blinker.position(), 2);
        {
            let _same = blinker.scoped(0b1010);
            assert_eq!(blinker.position(), 2);
        }
        assert_eq!(blinker.position(), 2);
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let line = DigitalLine::new(FakePin(false), false);
        let blinker = PatternBlinker::new(&line, 0b10);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = blinker.scoped(0b1111);
            panic!("job failed");
        }));

        assert!(result.is_err());
        assert_eq!(blinker.pattern(), 0b10);
    }
}
