//! Static ITU code tables and the prosign dictionary

use crate::symbol::Symbol;

/// Letters A-Z, indexed by `c - 'A'`
pub static LETTERS: [Symbol; 26] = [
    Symbol::literal(".-"),   // A
    Symbol::literal("-..."), // B
    Symbol::literal("-.-."), // C
    Symbol::literal("-.."),  // D
    Symbol::literal("."),    // E
    Symbol::literal("..-."), // F
    Symbol::literal("--."),  // G
    Symbol::literal("...."), // H
    Symbol::literal(".."),   // I
    Symbol::literal(".---"), // J
    Symbol::literal("-.-"),  // K
    Symbol::literal(".-.."), // L
    Symbol::literal("--"),   // M
    Symbol::literal("-."),   // N
    Symbol::literal("---"),  // O
    Symbol::literal(".--."), // P
    Symbol::literal("--.-"), // Q
    Symbol::literal(".-."),  // R
    Symbol::literal("..."),  // S
    Symbol::literal("-"),    // T
    Symbol::literal("..-"),  // U
    Symbol::literal("...-"), // V
    Symbol::literal(".--"),  // W
    Symbol::literal("-..-"), // X
    Symbol::literal("-.--"), // Y
    Symbol::literal("--.."), // Z
];

/// Digits 0-9, indexed by `c - '0'`
pub static NUMBERS: [Symbol; 10] = [
    Symbol::literal("-----"),
    Symbol::literal(".----"),
    Symbol::literal("..---"),
    Symbol::literal("...--"),
    Symbol::literal("....-"),
    Symbol::literal("....."),
    Symbol::literal("-...."),
    Symbol::literal("--..."),
    Symbol::literal("---.."),
    Symbol::literal("----."),
];

/// Punctuation
pub static SYMBOLS: [(char, Symbol); 18] = [
    ('.', Symbol::literal(".-.-.-")),
    (',', Symbol::literal("--..--")),
    ('?', Symbol::literal("..--..")),
    ('\'', Symbol::literal(".----.")),
    ('!', Symbol::literal("-.-.--")),
    ('/', Symbol::literal("-..-.")),
    ('(', Symbol::literal("-.--.")),
    (')', Symbol::literal("-.--.-")),
    ('&', Symbol::literal(".-...")),
    (':', Symbol::literal("---...")),
    (';', Symbol::literal("-.-.-.")),
    ('=', Symbol::literal("-...-")),
    ('+', Symbol::literal(".-.-.")),
    ('-', Symbol::literal("-....-")),
    ('_', Symbol::literal("..--.-")),
    ('"', Symbol::literal(".-..-.")),
    ('$', Symbol::literal("...-..-")),
    ('@', Symbol::literal(".--.-.")),
];

/// Procedural signals, sent as one unbroken symbol
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Prosign {
    AA,
    AR,
    AS,
    BK,
    BT,
    CL,
    CT,
    DO,
    K,
    KN,
    SK,
    SN,
    SOS,
    EEEEEE,
}

impl Prosign {
    /// Start of transmission
    pub const START: Prosign = Prosign::CT;
    /// End of work
    pub const END: Prosign = Prosign::SK;

    pub const ALL: [Prosign; 14] = [
        Prosign::AA,
        Prosign::AR,
        Prosign::AS,
        Prosign::BK,
        Prosign::BT,
        Prosign::CL,
        Prosign::CT,
        Prosign::DO,
        Prosign::K,
        Prosign::KN,
        Prosign::SK,
        Prosign::SN,
        Prosign::SOS,
        Prosign::EEEEEE,
    ];

    /// Bracketed mnemonic, e.g. `<SK>`
    pub const fn name(&self) -> &'static str {
        match self {
            Prosign::AA => "<AA>",
            Prosign::AR => "<AR>",
            Prosign::AS => "<AS>",
            Prosign::BK => "<BK>",
            Prosign::BT => "<BT>",
            Prosign::CL => "<CL>",
            Prosign::CT => "<CT>",
            Prosign::DO => "<DO>",
            Prosign::K => "<K>",
            Prosign::KN => "<KN>",
            Prosign::SK => "<SK>",
            Prosign::SN => "<SN>",
            Prosign::SOS => "<SOS>",
            Prosign::EEEEEE => "<EEEEEE>",
        }
    }

    pub fn from_name(name: &str) -> Option<Prosign> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }

    pub fn symbol(&self) -> &'static Symbol {
        &PROSIGNS[*self as usize]
    }
}

/// Prosign codes, in `Prosign` declaration order
static PROSIGNS: [Symbol; 14] = [
    Symbol::literal(".-.-"),
    Symbol::literal(".-.-."),
    Symbol::literal(".-..."),
    Symbol::literal("-...-.-"),
    Symbol::literal("-...-"),
    Symbol::literal("-.-..-.."),
    Symbol::literal("-.-.-"),
    Symbol::literal("-..---"),
    Symbol::literal("-.-"),
    Symbol::literal("-.--."),
    Symbol::literal("...-.-"),
    Symbol::literal("...-."),
    Symbol::literal("...---..."),
    Symbol::literal("......"),
];

/// Selection of the static tables active for one encoder
///
/// The tables themselves are immutable statics; a `CodeTable` only records
/// which sections are enabled, so it is `Copy` and free to share.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CodeTable {
    numbers: bool,
    symbols: bool,
    prosigns: bool,
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}

impl CodeTable {
    pub const fn new(numbers: bool, symbols: bool, prosigns: bool) -> Self {
        Self { numbers, symbols, prosigns }
    }

    /// Letters only, no prosigns
    pub const fn letters() -> Self {
        Self::new(false, false, false)
    }

    pub const fn has_numbers(&self) -> bool {
        self.numbers
    }

    pub const fn has_symbols(&self) -> bool {
        self.symbols
    }

    pub const fn has_prosigns(&self) -> bool {
        self.prosigns
    }

    /// Look up an uppercase character
    pub fn lookup(&self, c: char) -> Option<&'static Symbol> {
        match c {
            'A'..='Z' => LETTERS.get(c as usize - 'A' as usize),
            '0'..='9' if self.numbers => NUMBERS.get(c as usize - '0' as usize),
            _ if self.symbols => SYMBOLS.iter().find(|(key, _)| *key == c).map(|(_, symbol)| symbol),
            _ => None,
        }
    }

    /// Look up an active prosign by its bracketed name
    pub fn prosign(&self, name: &str) -> Option<&'static Symbol> {
        if !self.prosigns {
            return None;
        }
        Prosign::from_name(name).map(|p| p.symbol())
    }

    pub fn contains(&self, c: char) -> bool {
        self.lookup(c).is_some()
    }

    /// Active alphabet entries
    pub fn alphabet(&self) -> impl Iterator<Item = (char, &'static Symbol)> {
        let (with_numbers, with_symbols) = (self.numbers, self.symbols);
        let letters = ('A'..='Z').zip(LETTERS.iter());
        let numbers = ('0'..='9').zip(NUMBERS.iter()).filter(move |_| with_numbers);
        let symbols = SYMBOLS
            .iter()
            .filter(move |_| with_symbols)
            .map(|(c, symbol)| (*c, symbol));
        letters.chain(numbers).chain(symbols)
    }

    pub fn alphabet_len(&self) -> usize {
        LETTERS.len()
            + if self.numbers { NUMBERS.len() } else { 0 }
            + if self.symbols { SYMBOLS.len() } else { 0 }
    }

    /// Active prosign entries
    pub fn dictionary(&self) -> impl Iterator<Item = (&'static str, &'static Symbol)> {
        let active = self.prosigns;
        Prosign::ALL
            .into_iter()
            .filter(move |_| active)
            .map(|p| (p.name(), p.symbol()))
    }
}
