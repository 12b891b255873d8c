//! Pure Pattern-Logik
//!
//! Funktionen und Zustand ohne Hardware-Dependencies (testbar!)

/// Index des höchsten gesetzten Bits
///
/// Für das leere Pattern (`0`) gibt es kein gesetztes Bit, dann ist das
/// Ergebnis `0`.
///
/// # Beispiele
///
/// ```
/// # use blink_core::highest_set_bit;
/// assert_eq!(highest_set_bit(0b1010), 3);
/// assert_eq!(highest_set_bit(1), 0);
/// assert_eq!(highest_set_bit(0), 0);
/// ```
pub const fn highest_set_bit(pattern: u32) -> u8 {
    match pattern.checked_ilog2() {
        Some(index) => index as u8,
        None => 0,
    }
}

/// Cursor in ein Blink-Pattern
///
/// Das Pattern wird vom höchsten gesetzten Bit bis Bit 0 gelesen und
/// wiederholt sich danach. `position` zeigt auf das nächste auszugebende Bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternCursor {
    pattern: u32,
    position: u8,
}

impl PatternCursor {
    /// Erstellt einen Cursor, der am höchsten gesetzten Bit startet
    pub const fn new(pattern: u32) -> Self {
        Self {
            pattern,
            position: highest_set_bit(pattern),
        }
    }

    pub const fn pattern(&self) -> u32 {
        self.pattern
    }

    pub const fn position(&self) -> u8 {
        self.position
    }

    /// Setzt ein neues Pattern und startet es von vorne
    ///
    /// Ist `pattern` bereits aktiv, passiert nichts (der Cursor bleibt
    /// stehen). Gibt zurück, ob sich etwas geändert hat.
    pub fn set_pattern(&mut self, pattern: u32) -> bool {
        if self.pattern == pattern {
            return false;
        }
        self.pattern = pattern;
        self.restart();
        true
    }

    /// Setzt den Cursor zurück auf das höchste gesetzte Bit
    pub fn restart(&mut self) {
        self.position = highest_set_bit(self.pattern);
    }

    /// Liefert das Bit unter dem Cursor und rückt weiter
    ///
    /// Nach Bit 0 beginnt das Pattern wieder beim höchsten gesetzten Bit.
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use blink_core::PatternCursor;
    /// let mut cursor = PatternCursor::new(0b110);
    /// assert!(cursor.step());
    /// assert!(cursor.step());
    /// assert!(!cursor.step());
    /// assert!(cursor.step()); // wieder von vorne
    /// ```
    pub fn step(&mut self) -> bool {
        let bit = (self.pattern >> self.position) & 1 == 1;
        match self.position.checked_sub(1) {
            Some(next) => self.position = next,
            None => self.restart(),
        }
        bit
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PatternCursor {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "PatternCursor {{ pattern: {=u32:#b}, position: {} }}",
            self.pattern,
            self.position
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_set_bit_msb() {
        assert_eq!(highest_set_bit(u32::MAX), 31);
        assert_eq!(highest_set_bit(1 << 31), 31);
    }

    #[test]
    fn test_highest_set_bit_small() {
        assert_eq!(highest_set_bit(0b10), 1);
        assert_eq!(highest_set_bit(0b1), 0);
        assert_eq!(highest_set_bit(0b1000_0001), 7);
    }

    #[test]
    fn test_highest_set_bit_empty() {
        assert_eq!(highest_set_bit(0), 0);
    }

    #[test]
    fn test_cursor_starts_at_highest_bit() {
        let cursor = PatternCursor::new(0b1010);
        assert_eq!(cursor.pattern(), 0b1010);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_step_reads_msb_first_and_loops() {
        let mut cursor = PatternCursor::new(0b1010);
        let mut bits = [false; 8];
        for bit in bits.iter_mut() {
            *bit = cursor.step();
        }
        assert_eq!(bits, [true, false, true, false, true, false, true, false]);
    }

    #[test]
    fn test_step_position_wraps_to_highest_bit() {
        let mut cursor = PatternCursor::new(0b100);
        cursor.step(); // Bit 2
        cursor.step(); // Bit 1
        assert_eq!(cursor.position(), 0);
        cursor.step(); // Bit 0
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_empty_pattern_stays_off() {
        let mut cursor = PatternCursor::new(0);
        for _ in 0..100 {
            assert!(!cursor.step());
            assert_eq!(cursor.position(), 0);
        }
    }

    #[test]
    fn test_full_width_pattern() {
        let mut cursor = PatternCursor::new(1 << 31);
        assert!(cursor.step());
        for _ in 0..31 {
            assert!(!cursor.step());
        }
        // Zyklus von 32 Slots, dann wieder Bit 31
        assert!(cursor.step());
    }

    #[test]
    fn test_set_same_pattern_keeps_position() {
        let mut cursor = PatternCursor::new(0b1101);
        cursor.step();
        cursor.step();
        assert_eq!(cursor.position(), 1);

        assert!(!cursor.set_pattern(0b1101));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_set_new_pattern_restarts() {
        let mut cursor = PatternCursor::new(0b1101);
        cursor.step();

        assert!(cursor.set_pattern(0b10));
        assert_eq!(cursor.pattern(), 0b10);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_set_pattern_to_zero() {
        let mut cursor = PatternCursor::new(0b111);
        assert!(cursor.set_pattern(0));
        assert_eq!(cursor.position(), 0);
        assert!(!cursor.step());
    }
}
