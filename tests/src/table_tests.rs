//! Table-driven tests for the code tables and encoder configuration

use morse_core::test_utils::test_scenarios::{rendered_messages, PANGRAM, PARIS};
use morse_core::*;
use rstest::rstest;

#[rstest]
#[case('A', ".-")]
#[case('B', "-...")]
#[case('E', ".")]
#[case('Q', "--.-")]
#[case('T', "-")]
#[case('Z', "--..")]
#[case('0', "-----")]
#[case('5', ".....")]
#[case('9', "----.")]
#[case('?', "..--..")]
#[case('\'', ".----.")]
#[case('"', ".-..-.")]
#[case('$', "...-..-")]
#[case('@', ".--.-.")]
fn test_alphabet_entry(#[case] c: char, #[case] code: &str) {
    let table = CodeTable::default();
    assert_eq!(table.lookup(c), Some(&Symbol::parse(code).unwrap()));
}

#[rstest]
#[case("<AA>", ".-.-")]
#[case("<AR>", ".-.-.")]
#[case("<BT>", "-...-")]
#[case("<CL>", "-.-..-..")]
#[case("<CT>", "-.-.-")]
#[case("<KN>", "-.--.")]
#[case("<SK>", "...-.-")]
#[case("<SOS>", "...---...")]
#[case("<EEEEEE>", "......")]
fn test_prosign_entry(#[case] name: &str, #[case] code: &str) {
    let table = CodeTable::default();
    assert_eq!(table.prosign(name).map(|s| s.to_string()), Some(code.to_string()));
}

#[rstest]
#[case(true, true, 54)]
#[case(true, false, 36)]
#[case(false, true, 44)]
#[case(false, false, 26)]
fn test_alphabet_sections(#[case] numbers: bool, #[case] symbols: bool, #[case] expected: usize) {
    let table = CodeTable::new(numbers, symbols, false);
    assert_eq!(table.alphabet_len(), expected);
    assert_eq!(table.alphabet().count(), expected);
    assert_eq!(table.contains('7'), numbers);
    assert_eq!(table.contains('+'), symbols);
}

#[rstest]
#[case("*", "_", "*_**", ".-..")]
#[case("dot", "dash", "dashdotdash", "-.-")]
#[case("·", "−", "···−", "...-")]
#[case("o", "=", "o.=-", "..--")]
fn test_substitute_glyphs(#[case] dit: &str, #[case] dah: &str, #[case] input: &str, #[case] canonical: &str) {
    let symbol = Symbol::parse_with(input, dit, dah).unwrap();
    assert_eq!(symbol.to_string(), canonical);
}

#[rstest]
#[case("", SymbolError::Empty)]
#[case("..x", SymbolError::InvalidGlyph('x'))]
#[case("•", SymbolError::InvalidGlyph('•'))]
#[case("-----------------", SymbolError::TooLong)]
fn test_invalid_symbol_input(#[case] input: &str, #[case] expected: SymbolError) {
    assert_eq!(Symbol::parse(input), Err(expected));
}

#[test]
fn test_rendered_messages() {
    let encoder = Encoder::builder().prosigns(false).build().unwrap();
    for (message, rendered) in rendered_messages() {
        assert_eq!(encoder.encode(message).render(), *rendered, "message {:?}", message);
    }
}

#[test]
fn test_pangram_covers_letters() {
    let encoder = Encoder::builder().prosigns(false).build().unwrap();
    let ciphertext = encoder.encode(PANGRAM);
    assert_eq!(ciphertext.len(), 9);
    for (_, symbol) in CodeTable::letters().alphabet() {
        assert!(ciphertext.symbols().any(|s| s == symbol));
    }
}

#[test]
fn test_paris_is_fifty_units() {
    // PARIS plus one trailing word space is 50 dot units at standard ratios
    let encoder = Encoder::builder().prosigns(false).build().unwrap();
    let timing = Timing::from_dit(1);
    let pattern = encoder.encode(PARIS).to_timing_sequence(&timing);
    assert_eq!(pattern_duration(&pattern) + 7, 50);
}

#[rstest]
#[case(5, 240)]
#[case(12, 100)]
#[case(20, 60)]
#[case(100, 12)]
fn test_timing_from_wpm(#[case] wpm: u32, #[case] dit: u64) {
    let timing = Timing::from_wpm(wpm).unwrap();
    assert_eq!(timing, Timing::new(0, dit, dit * 3, dit));
}

#[test]
fn test_default_config() {
    let config = default_config();
    assert!(config.include_numbers && config.include_symbols && config.include_prosigns);
    assert_eq!((config.short_gap, config.medium_gap), (DEFAULT_SHORT_GAP, DEFAULT_MEDIUM_GAP));
    assert_eq!(Timing::default(), Timing::new(0, 100, 300, 100));
    assert!(!VERSION.is_empty());
}

#[test]
fn test_error_display() {
    assert_eq!(ConfigError::ZeroGap.to_string(), "Gap multipliers must be positive");
    assert_eq!(SymbolError::InvalidGlyph('x').to_string(), "Invalid Morse glyph 'x'");
    let boxed: Box<dyn std::error::Error> = Box::new(HalError::GpioError);
    assert_eq!(boxed.to_string(), "GPIO operation failed");
    assert_eq!(HalError::NotInitialized.to_string(), "Hardware not initialized");
}
