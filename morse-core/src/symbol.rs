//! Morse code symbols: one character or prosign as a pulse sequence

use core::fmt;
use heapless::{String, Vec};
use crate::types::{Pulse, DAH_GLYPH, DIT_GLYPH};

/// Maximum number of dots and dashes in one symbol
pub const MAX_ELEMENTS: usize = 16;

/// Maximum length of a spaced signal (elements plus intra-character gaps)
pub const MAX_SIGNAL_LEN: usize = 2 * MAX_ELEMENTS - 1;

/// Symbol construction errors
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SymbolError {
    /// No dots or dashes
    Empty,
    /// More than `MAX_ELEMENTS` dots and dashes
    TooLong,
    /// Character outside the dot/dash glyph set
    InvalidGlyph(char),
    /// A dot or dash substitute was the empty string
    EmptySubstitute,
}

#[cfg(feature = "std")]
impl core::fmt::Display for SymbolError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SymbolError::Empty => write!(f, "Symbol has no elements"),
            SymbolError::TooLong => write!(f, "Symbol exceeds {} elements", MAX_ELEMENTS),
            SymbolError::InvalidGlyph(c) => write!(f, "Invalid Morse glyph {:?}", c),
            SymbolError::EmptySubstitute => write!(f, "Dot and dash substitutes must not be empty"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SymbolError {}

/// One Morse-encoded character or prosign
///
/// Stored packed: bit `i` of `dashes` is set when element `i` is a dash.
/// The spaced form with intra-character gaps is produced on demand by
/// [`Symbol::signal`], so a symbol never starts or ends with a gap and
/// never holds two adjacent gaps.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    len: u8,
    dashes: u16,
}

impl Symbol {
    /// Build a symbol from a literal code at compile time
    ///
    /// Panics (at compile time in `const` items) on anything but `.` and `-`.
    pub const fn literal(code: &str) -> Symbol {
        let bytes = code.as_bytes();
        assert!(!bytes.is_empty(), "empty Morse literal");
        assert!(bytes.len() <= MAX_ELEMENTS, "Morse literal too long");

        let mut dashes = 0u16;
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'.' => {}
                b'-' => dashes |= 1 << i,
                _ => panic!("invalid Morse literal"),
            }
            i += 1;
        }

        Symbol {
            len: bytes.len() as u8,
            dashes,
        }
    }

    /// Parse a code made of `.` and `-`
    pub fn parse(code: &str) -> Result<Symbol, SymbolError> {
        Self::parse_with(code, ".", "-")
    }

    /// Parse a code written with substitutes for the dot and dash
    ///
    /// The canonical glyphs stay valid alongside the substitutes. At each
    /// position the longest matching token wins; on a tie the substitute
    /// beats the canonical glyph, and the dot substitute beats the dash one.
    pub fn parse_with(code: &str, dit: &str, dah: &str) -> Result<Symbol, SymbolError> {
        if dit.is_empty() || dah.is_empty() {
            return Err(SymbolError::EmptySubstitute);
        }

        let tokens = [
            (dit, Pulse::Dot),
            (dah, Pulse::Dash),
            (".", Pulse::Dot),
            ("-", Pulse::Dash),
        ];

        let mut symbol = Symbol { len: 0, dashes: 0 };
        let mut rest = code;
        while let Some(first) = rest.chars().next() {
            let mut best: Option<(Pulse, usize)> = None;
            for (token, pulse) in tokens {
                if rest.starts_with(token) && best.map_or(true, |(_, used)| token.len() > used) {
                    best = Some((pulse, token.len()));
                }
            }

            let (pulse, used) = best.ok_or(SymbolError::InvalidGlyph(first))?;
            symbol.push(pulse)?;
            rest = &rest[used..];
        }

        if symbol.len == 0 {
            return Err(SymbolError::Empty);
        }
        Ok(symbol)
    }

    fn push(&mut self, pulse: Pulse) -> Result<(), SymbolError> {
        let index = self.len as usize;
        if index >= MAX_ELEMENTS {
            return Err(SymbolError::TooLong);
        }
        if pulse == Pulse::Dash {
            self.dashes |= 1 << index;
        }
        self.len += 1;
        Ok(())
    }

    /// Number of dots and dashes
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false for parsed and literal symbols
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Element at `index` (dot or dash)
    pub const fn element(&self, index: usize) -> Option<Pulse> {
        if index >= self.len as usize {
            return None;
        }
        if self.dashes & (1 << index) != 0 {
            Some(Pulse::Dash)
        } else {
            Some(Pulse::Dot)
        }
    }

    /// Dots and dashes without gaps
    pub fn elements(&self) -> impl Iterator<Item = Pulse> + '_ {
        (0..self.len()).filter_map(move |i| self.element(i))
    }

    /// Spaced pulse sequence with an intra-character gap between elements
    pub fn signal(&self) -> Signal {
        Signal {
            symbol: *self,
            position: 0,
        }
    }

    /// Spaced pulse sequence collected into a fixed-capacity buffer
    pub fn to_signal(&self) -> Vec<Pulse, MAX_SIGNAL_LEN> {
        self.signal().collect()
    }

    /// Canonical dot/dash text
    pub fn to_code(&self) -> String<MAX_ELEMENTS> {
        let mut code = String::new();
        for pulse in self.elements() {
            if let Some(glyph) = pulse.glyph() {
                code.push(glyph).ok();
            }
        }
        code
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pulse in self.elements() {
            let glyph = if pulse == Pulse::Dash { DAH_GLYPH } else { DIT_GLYPH };
            write!(f, "{}", glyph)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol(\"{}\")", self)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Symbol {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Symbol({=str})", self.to_code().as_str())
    }
}

impl core::str::FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::parse(s)
    }
}

/// Iterator over a symbol's spaced pulse sequence
#[derive(Clone, Debug)]
pub struct Signal {
    symbol: Symbol,
    position: usize,
}

impl Signal {
    fn spaced_len(&self) -> usize {
        (2 * self.symbol.len()).saturating_sub(1)
    }
}

impl Iterator for Signal {
    type Item = Pulse;

    fn next(&mut self) -> Option<Pulse> {
        if self.position >= self.spaced_len() {
            return None;
        }
        let position = self.position;
        self.position += 1;

        if position % 2 == 1 {
            Some(Pulse::IntraGap)
        } else {
            self.symbol.element(position / 2)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.spaced_len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Signal {}
