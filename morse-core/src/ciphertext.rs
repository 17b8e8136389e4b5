//! Encoded messages and their expansion into timed pulse patterns

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Write};
use crate::symbol::Symbol;
use crate::types::{GapConfig, GapKind, Timing};

/// Symbols of one word, borrowed from the static code tables
pub type Word = Vec<&'static Symbol>;

/// A message encoded as words of Morse symbols
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    words: Vec<Word>,
    gaps: GapConfig,
}

impl Ciphertext {
    pub fn new(words: Vec<Word>, gaps: GapConfig) -> Self {
        Self { words, gaps }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words, empty ones included
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Gap multipliers captured from the encoder
    pub fn gaps(&self) -> GapConfig {
        self.gaps
    }

    pub fn symbols(&self) -> impl Iterator<Item = &'static Symbol> + '_ {
        self.words.iter().flat_map(|word| word.iter().copied())
    }

    pub fn symbol_count(&self) -> usize {
        self.words.iter().map(Vec::len).sum()
    }

    /// Keyed pulses (dots and dashes) in the whole message
    pub fn pulse_count(&self) -> usize {
        self.symbols().map(Symbol::len).sum()
    }

    /// Multi-line display text: one line per word, symbols separated by a space
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Expand into alternating off/on durations
    ///
    /// The first entry is always `timing.wait`. Each symbol contributes its
    /// spaced signal; a short gap goes between symbols of one word and a
    /// medium gap between words. A gap is only emitted once the next symbol
    /// arrives, so empty words add nothing and the pattern never ends with
    /// a gap.
    pub fn to_timing_sequence(&self, timing: &Timing) -> Vec<u64> {
        let mut pattern = Vec::with_capacity(1 + 2 * self.pulse_count());
        pattern.push(timing.wait);

        let mut pending: Option<GapKind> = None;
        for word in &self.words {
            for symbol in word {
                if let Some(gap) = pending.take() {
                    pattern.push(timing.gap_duration(gap, &self.gaps));
                }
                pattern.extend(symbol.signal().map(|pulse| pulse.duration(timing)));
                pending = Some(GapKind::Short);
            }

            if pending.is_some() {
                pending = Some(GapKind::Medium);
            }
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("Pattern: {} durations", pattern.len());

        pattern
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            for (i, symbol) in word.iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                write!(f, "{}", symbol)?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
