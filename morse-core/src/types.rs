//! Core data types for the Morse encoder

/// Canonical glyph for a dot
pub const DIT_GLYPH: char = '.';
/// Canonical glyph for a dash
pub const DAH_GLYPH: char = '-';

/// Default gap between characters, in unit gaps
pub const DEFAULT_SHORT_GAP: u32 = 3;
/// Default gap between words, in unit gaps
pub const DEFAULT_MEDIUM_GAP: u32 = 7;

/// Morse signal elements
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pulse {
    /// Dot (short element)
    Dot,
    /// Dash (long element)
    Dash,
    /// Pause between the elements of one character
    IntraGap,
}

impl Pulse {
    /// Returns true if this pulse produces key output
    pub const fn is_keyed(&self) -> bool {
        match self {
            Pulse::Dot | Pulse::Dash => true,
            Pulse::IntraGap => false,
        }
    }

    /// Canonical glyph of a keyed pulse
    pub const fn glyph(&self) -> Option<char> {
        match self {
            Pulse::Dot => Some(DIT_GLYPH),
            Pulse::Dash => Some(DAH_GLYPH),
            Pulse::IntraGap => None,
        }
    }

    /// Parse a canonical glyph
    pub const fn from_glyph(c: char) -> Option<Pulse> {
        match c {
            DIT_GLYPH => Some(Pulse::Dot),
            DAH_GLYPH => Some(Pulse::Dash),
            _ => None,
        }
    }

    /// Duration of this pulse under the given timing
    pub const fn duration(&self, timing: &Timing) -> u64 {
        match self {
            Pulse::Dot => timing.dit,
            Pulse::Dash => timing.dah,
            Pulse::IntraGap => timing.unit_gap,
        }
    }
}

/// Gaps placed between symbols and words
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GapKind {
    /// Between characters of one word
    Short,
    /// Between words
    Medium,
}

impl GapKind {
    /// Length of this gap in unit gaps
    pub const fn units(&self, gaps: &GapConfig) -> u32 {
        match self {
            GapKind::Short => gaps.short,
            GapKind::Medium => gaps.medium,
        }
    }
}

/// Gap multipliers captured by an encoder and carried by its ciphertext
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GapConfig {
    /// Unit gaps between characters
    pub short: u32,
    /// Unit gaps between words
    pub medium: u32,
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            short: DEFAULT_SHORT_GAP,
            medium: DEFAULT_MEDIUM_GAP,
        }
    }
}

/// Configuration errors
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A gap multiplier was zero
    ZeroGap,
    /// Speed outside 1..=100 WPM
    InvalidWpm,
}

#[cfg(feature = "std")]
impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroGap => write!(f, "Gap multipliers must be positive"),
            ConfigError::InvalidWpm => write!(f, "WPM must be between 1 and 100"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Encoder configuration parameters
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderConfig {
    /// Add digits 0-9 to the alphabet
    pub include_numbers: bool,
    /// Add punctuation to the alphabet
    pub include_symbols: bool,
    /// Enable prosigns (and start/end framing)
    pub include_prosigns: bool,
    /// Unit gaps between characters
    pub short_gap: u32,
    /// Unit gaps between words
    pub medium_gap: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            include_numbers: true,
            include_symbols: true,
            include_prosigns: true,
            short_gap: DEFAULT_SHORT_GAP,
            medium_gap: DEFAULT_MEDIUM_GAP,
        }
    }
}

impl EncoderConfig {
    /// Create a new configuration with validation
    pub fn new(
        include_numbers: bool,
        include_symbols: bool,
        include_prosigns: bool,
        short_gap: u32,
        medium_gap: u32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            include_numbers,
            include_symbols,
            include_prosigns,
            short_gap,
            medium_gap,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the gap multipliers
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.short_gap == 0 || self.medium_gap == 0 {
            return Err(ConfigError::ZeroGap);
        }
        Ok(())
    }

    /// Gap multipliers of this configuration
    pub const fn gaps(&self) -> GapConfig {
        GapConfig {
            short: self.short_gap,
            medium: self.medium_gap,
        }
    }
}

/// Output timing, all values in milliseconds
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Delay before the first pulse
    pub wait: u64,
    /// Dot duration
    pub dit: u64,
    /// Dash duration
    pub dah: u64,
    /// One unit gap
    pub unit_gap: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self::from_dit(100)
    }
}

impl Timing {
    pub const fn new(wait: u64, dit: u64, dah: u64, unit_gap: u64) -> Self {
        Self { wait, dit, dah, unit_gap }
    }

    /// Standard ratios: dash is three dots, unit gap is one dot
    pub const fn from_dit(dit: u64) -> Self {
        Self {
            wait: 0,
            dit,
            dah: dit.saturating_mul(3),
            unit_gap: dit,
        }
    }

    /// Standard ratios at the given speed
    pub fn from_wpm(wpm: u32) -> Result<Self, ConfigError> {
        if wpm == 0 || wpm > 100 {
            return Err(ConfigError::InvalidWpm);
        }

        // PARIS standard: 50 units per word
        Ok(Self::from_dit(1200 / wpm as u64))
    }

    /// Same timing with a different leading delay
    pub const fn with_wait(self, wait: u64) -> Self {
        Self { wait, ..self }
    }

    /// Words per minute implied by the dot duration
    pub fn wpm(&self) -> u32 {
        if self.dit == 0 {
            return 0;
        }
        (1200 / self.dit).max(1) as u32
    }

    /// Duration of a gap of the given kind
    pub const fn gap_duration(&self, kind: GapKind, gaps: &GapConfig) -> u64 {
        self.unit_gap.saturating_mul(kind.units(gaps) as u64)
    }
}
