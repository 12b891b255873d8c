//! Core Types für Blink-Patterns
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;

use crate::logic::highest_set_bit;

/// Blink-Pattern als Bitfolge
///
/// Gelesen vom höchsten gesetzten Bit bis Bit 0, danach wiederholt.
/// Bit 1 = LED an, Bit 0 = LED aus. `Pattern(0)` ist "immer aus".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Pattern(u32);

impl Pattern {
    /// Maximale Anzahl Slots pro Zyklus
    pub const MAX_LEN: usize = u32::BITS as usize;

    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Zykluslänge in Slots (das leere Pattern hat einen Slot: aus)
    pub const fn len(self) -> usize {
        highest_set_bit(self.0) as usize + 1
    }

    /// Iteriert über einen Zyklus, MSB zuerst
    ///
    /// Der Iterator ist `Clone`, daher liefert `.cycle()` die Endlos-Folge.
    pub fn slots(self) -> impl Iterator<Item = bool> + Clone {
        (0..self.len()).rev().map(move |bit| (self.0 >> bit) & 1 == 1)
    }
}

impl From<u32> for Pattern {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<Pattern> for u32 {
    fn from(pattern: Pattern) -> Self {
        pattern.0
    }
}

/// Fehler beim Parsen eines Patterns aus Text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// Keine Ziffern vorhanden
    Empty,
    /// Zeichen außer `0`, `1` und `_`
    InvalidDigit,
    /// Mehr als 32 signifikante Ziffern
    TooLong,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Empty => f.write_str("pattern has no digits"),
            PatternError::InvalidDigit => f.write_str("pattern may only contain 0, 1 and _"),
            PatternError::TooLong => f.write_str("pattern longer than 32 bits"),
        }
    }
}

/// Parst Binär-Strings wie `"1010"`, `"0b1010"` oder `"1_000_1"`
///
/// Führende Nullen sind erlaubt, zählen aber nicht zur Zykluslänge
/// (das Pattern beginnt immer beim höchsten gesetzten Bit).
impl TryFrom<&str> for Pattern {
    type Error = PatternError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let text = text.trim();
        let digits = text
            .strip_prefix("0b")
            .or_else(|| text.strip_prefix("0B"))
            .unwrap_or(text);

        let mut bits: u32 = 0;
        let mut seen_digit = false;
        for c in digits.chars() {
            let bit = match c {
                '0' => 0,
                '1' => 1,
                '_' => continue,
                _ => return Err(PatternError::InvalidDigit),
            };
            seen_digit = true;
            if bits.leading_zeros() == 0 {
                return Err(PatternError::TooLong);
            }
            bits = (bits << 1) | bit;
        }

        if !seen_digit {
            return Err(PatternError::Empty);
        }
        Ok(Self(bits))
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Pattern {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Pattern({=u32:#b})", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PatternError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PatternError::Empty => defmt::write!(fmt, "Empty"),
            PatternError::InvalidDigit => defmt::write!(fmt, "InvalidDigit"),
            PatternError::TooLong => defmt::write!(fmt, "TooLong"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len() {
        assert_eq!(Pattern::new(0b1010).len(), 4);
        assert_eq!(Pattern::new(0b1).len(), 1);
        assert_eq!(Pattern::new(0).len(), 1);
        assert_eq!(Pattern::new(u32::MAX).len(), Pattern::MAX_LEN);
    }

    #[test]
    fn test_slots_msb_first() {
        let mut slots = Pattern::new(0b1100).slots();
        assert_eq!(slots.next(), Some(true));
        assert_eq!(slots.next(), Some(true));
        assert_eq!(slots.next(), Some(false));
        assert_eq!(slots.next(), Some(false));
        assert_eq!(slots.next(), None);
    }

    #[test]
    fn test_slots_empty_pattern() {
        let mut slots = Pattern::new(0).slots();
        assert_eq!(slots.next(), Some(false));
        assert_eq!(slots.next(), None);
    }

    #[test]
    fn test_slots_cycle_repeats() {
        let cycled = Pattern::new(0b110).slots().cycle().take(7);
        assert!(cycled.eq([true, true, false, true, true, false, true]));

        let mut off = Pattern::new(0).slots().cycle();
        assert!(off.by_ref().take(5).all(|on| !on));
        assert_eq!(off.next(), Some(false));
    }

    #[test]
    fn test_try_from_plain_and_prefixed() {
        assert_eq!(Pattern::try_from("1010"), Ok(Pattern::new(0b1010)));
        assert_eq!(Pattern::try_from("0b1010"), Ok(Pattern::new(0b1010)));
        assert_eq!(Pattern::try_from(" 0B11 "), Ok(Pattern::new(0b11)));
    }

    #[test]
    fn test_try_from_separators_and_leading_zeros() {
        assert_eq!(Pattern::try_from("1_0_1"), Ok(Pattern::new(0b101)));
        assert_eq!(Pattern::try_from("0001"), Ok(Pattern::new(1)));
        assert_eq!(Pattern::try_from("0"), Ok(Pattern::new(0)));
    }

    #[test]
    fn test_try_from_errors() {
        assert_eq!(Pattern::try_from(""), Err(PatternError::Empty));
        assert_eq!(Pattern::try_from("0b"), Err(PatternError::Empty));
        assert_eq!(Pattern::try_from("___"), Err(PatternError::Empty));
        assert_eq!(Pattern::try_from("12"), Err(PatternError::InvalidDigit));
        assert_eq!(Pattern::try_from("1 0"), Err(PatternError::InvalidDigit));
    }

    #[test]
    fn test_try_from_length_limit() {
        let max = "11111111_11111111_11111111_11111111";
        assert_eq!(Pattern::try_from(max), Ok(Pattern::new(u32::MAX)));

        let too_long = "1_11111111_11111111_11111111_11111111";
        assert_eq!(Pattern::try_from(too_long), Err(PatternError::TooLong));

        // Führende Nullen zählen nicht
        let padded = "0000_10000000_00000000_00000000_00000000";
        assert_eq!(Pattern::try_from(padded), Ok(Pattern::new(1 << 31)));
    }
}
