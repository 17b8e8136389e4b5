#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! # Morse Core
//!
//! Text to Morse code encoder for embedded and host targets.
//! Encodes a message into words of Morse symbols and expands them into
//! alternating off/on durations for a vibration motor, buzzer or key line.

extern crate alloc;

pub mod types;
pub mod symbol;
pub mod table;
pub mod encoder;
pub mod ciphertext;
pub mod hal;
pub mod player;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use types::*;
pub use symbol::{Signal, Symbol, SymbolError, MAX_ELEMENTS, MAX_SIGNAL_LEN};
pub use table::{CodeTable, Prosign};
pub use encoder::{Encoder, EncoderBuilder, WORD_SEPARATOR};
pub use ciphertext::{Ciphertext, Word};
pub use hal::{EmbeddedHalKeyOutput, HalError, OutputKey};
pub use player::{pattern_duration, play_blocking, steps, Step};

#[cfg(feature = "embassy-time")]
pub use player::play;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration: full alphabet, prosign framing, 3/7 gaps
pub fn default_config() -> EncoderConfig {
    EncoderConfig::default()
}
