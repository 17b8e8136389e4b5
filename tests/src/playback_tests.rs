//! Pattern playback through mock devices

use embedded_hal::delay::DelayNs;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::pin::{Mock as PinMock, State as PinState, Transaction as PinTransaction};
use morse_core::hal::mock::MockKeyOutput;
use morse_core::test_utils::output_capture::OutputCapture;
use morse_core::test_utils::test_scenarios::PANGRAM;
use morse_core::*;

fn unframed() -> Encoder {
    Encoder::builder().prosigns(false).build().unwrap()
}

#[test]
fn test_embedded_hal_output_pin() {
    // wait, dot, key released
    let expectations = [
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
    ];
    let pin = PinMock::new(&expectations);
    let mut key = EmbeddedHalKeyOutput::new(pin, false);
    let mut delay = NoopDelay::new();

    let pattern = unframed().encode("E").to_timing_sequence(&Timing::default());
    assert_eq!(pattern, [0, 100]);
    play_blocking(&mut key, &mut delay, &pattern).unwrap();
    assert_eq!(key.get_state(), Ok(false));

    key.into_inner().done();
}

#[test]
fn test_embedded_hal_inverted_pin() {
    let expectations = [
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ];
    let pin = PinMock::new(&expectations);
    let mut key = EmbeddedHalKeyOutput::new(pin, true);

    assert_eq!(key.get_state(), Err(HalError::NotInitialized));
    key.set_state(true).unwrap();
    key.toggle().unwrap();
    assert_eq!(key.get_state(), Ok(false));

    key.into_inner().done();
}

#[test]
fn test_mock_key_sees_alternating_writes() {
    let mut key = MockKeyOutput::new();
    let mut delay = NoopDelay::new();
    let pattern = unframed().encode("SOS").to_timing_sequence(&Timing::default());

    play_blocking(&mut key, &mut delay, &pattern).unwrap();

    let writes = key.writes();
    assert_eq!(writes.len(), pattern.len() + 1);
    assert!(writes.iter().enumerate().all(|(i, &down)| down == (i % 2 == 1) || i == pattern.len()));
    assert!(!key.is_active());
}

#[test]
fn test_capture_rebuilds_code() {
    println!("📡 Capturing played output...");

    let encoder = Encoder::default();
    let timing = Timing::from_wpm(20).unwrap().with_wait(500);
    let ciphertext = encoder.encode("sos 73");
    let pattern = ciphertext.to_timing_sequence(&timing);

    let capture = OutputCapture::new();
    let mut key = capture.key();
    let mut delay = capture.delay();
    play_blocking(&mut key, &mut delay, &pattern).unwrap();

    assert_eq!(capture.now_ms(), pattern_duration(&pattern));
    assert_eq!(capture.pulse_count(), ciphertext.pulse_count());
    assert_eq!(
        capture.to_morse_string(&timing, &encoder.gaps()),
        "-.-.- / ... --- ... / --... ...-- / ...-.-"
    );

    let events = capture.events();
    assert_eq!(events[0].key_down, false);
    assert_eq!(events[0].duration_ms, 500);

    println!("  ✅ Captured {} intervals", events.len());
}

#[test]
fn test_capture_keyed_time() {
    let timing = Timing::from_dit(10);
    let ciphertext = unframed().encode(PANGRAM);
    let pattern = ciphertext.to_timing_sequence(&timing);

    let capture = OutputCapture::new();
    play_blocking(&mut capture.key(), &mut capture.delay(), &pattern).unwrap();

    let expected: u64 = ciphertext
        .symbols()
        .flat_map(|symbol| symbol.elements())
        .map(|pulse| pulse.duration(&timing))
        .sum();
    assert_eq!(capture.keyed_ms(), expected);
}

#[test]
fn test_capture_read_mid_playback() {
    let capture = OutputCapture::new();
    let mut key = capture.key();
    let mut delay = capture.delay();

    key.set_state(true).unwrap();
    delay.delay_ms(10);
    assert_eq!(capture.pulse_count(), 1);
    assert_eq!(capture.keyed_ms(), 10);

    delay.delay_ms(20);
    key.set_state(false).unwrap();
    delay.delay_ms(5);

    let events = capture.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].duration_ms, 30);
    assert_eq!(events[1].start_ms, 30);
    assert_eq!(capture.pulse_count(), 1);
    assert_eq!(capture.keyed_ms(), 30);
    assert_eq!(capture.to_morse_string(&Timing::new(0, 10, 30, 10), &GapConfig::default()), "-");
}
