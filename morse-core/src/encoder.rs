//! Plaintext to ciphertext encoder

use alloc::vec;
use alloc::vec::Vec;
use crate::ciphertext::{Ciphertext, Word};
use crate::table::{CodeTable, Prosign};
use crate::types::{ConfigError, EncoderConfig, GapConfig};

/// Only the ASCII space separates words; other whitespace inside the
/// message is treated like any character missing from the alphabet.
pub const WORD_SEPARATOR: char = ' ';

/// Morse encoder over the static code tables
///
/// Holds no per-message state, so one encoder can be shared across threads
/// and reused for any number of messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Encoder {
    config: EncoderConfig,
    table: CodeTable,
}

impl Default for Encoder {
    fn default() -> Self {
        let config = EncoderConfig::default();
        Self {
            config,
            table: Self::table_for(&config),
        }
    }
}

impl Encoder {
    /// Create an encoder from a validated configuration
    pub fn new(config: EncoderConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Encoder config: {:?}", config);

        Ok(Self {
            config,
            table: Self::table_for(&config),
        })
    }

    /// Start building an encoder from the default configuration
    pub fn builder() -> EncoderBuilder {
        EncoderBuilder::default()
    }

    fn table_for(config: &EncoderConfig) -> CodeTable {
        CodeTable::new(
            config.include_numbers,
            config.include_symbols,
            config.include_prosigns,
        )
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    pub fn gaps(&self) -> GapConfig {
        self.config.gaps()
    }

    /// Encode a plaintext message
    ///
    /// The text is trimmed and uppercased; an empty result gives an empty
    /// ciphertext. Otherwise the words are framed by `<CT>` and `<SK>` when
    /// prosigns are enabled, even if no character of the body survived the
    /// alphabet lookup.
    pub fn encode(&self, plaintext: &str) -> Ciphertext {
        let text = plaintext.trim();
        if text.is_empty() {
            return Ciphertext::new(Vec::new(), self.gaps());
        }

        let mut words: Vec<Word> = Vec::new();

        if let Some(start) = self.table.prosign(Prosign::START.name()) {
            words.push(vec![start]);
        }

        let mut word = Word::new();
        for c in text.chars().flat_map(char::to_uppercase) {
            if c == WORD_SEPARATOR {
                words.push(core::mem::take(&mut word));
                continue;
            }
            if let Some(symbol) = self.table.lookup(c) {
                word.push(symbol);
            }
        }
        words.push(word);

        if let Some(end) = self.table.prosign(Prosign::END.name()) {
            words.push(vec![end]);
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("Encoded {} words", words.len());

        Ciphertext::new(words, self.gaps())
    }
}

/// Chained construction of an [`Encoder`]
#[derive(Copy, Clone, Debug, Default)]
pub struct EncoderBuilder {
    config: EncoderConfig,
}

impl EncoderBuilder {
    pub fn numbers(mut self, enabled: bool) -> Self {
        self.config.include_numbers = enabled;
        self
    }

    pub fn symbols(mut self, enabled: bool) -> Self {
        self.config.include_symbols = enabled;
        self
    }

    pub fn prosigns(mut self, enabled: bool) -> Self {
        self.config.include_prosigns = enabled;
        self
    }

    /// Unit gaps between characters
    pub fn short_gap(mut self, units: u32) -> Self {
        self.config.short_gap = units;
        self
    }

    /// Unit gaps between words
    pub fn medium_gap(mut self, units: u32) -> Self {
        self.config.medium_gap = units;
        self
    }

    pub fn build(self) -> Result<Encoder, ConfigError> {
        Encoder::new(self.config)
    }
}
