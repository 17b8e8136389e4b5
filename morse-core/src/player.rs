//! Driving an output key from a timing pattern

use embedded_hal::delay::DelayNs;
use crate::hal::OutputKey;

/// One interval of a pattern
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    /// Key state held for this interval
    pub key_down: bool,
    /// Interval length in milliseconds
    pub duration_ms: u64,
}

/// Interpret a pattern as alternating key-up/key-down intervals
///
/// Index 0 is the leading wait with the key up, odd indices are pulses.
pub fn steps(pattern: &[u64]) -> impl Iterator<Item = Step> + '_ {
    pattern.iter().enumerate().map(|(i, &duration_ms)| Step {
        key_down: i % 2 == 1,
        duration_ms,
    })
}

/// Total playback time of a pattern in milliseconds, saturating at `u64::MAX`
pub fn pattern_duration(pattern: &[u64]) -> u64 {
    pattern.iter().fold(0u64, |total, &ms| total.saturating_add(ms))
}

/// Play a pattern with a blocking delay provider
///
/// The key is left up afterwards. Errors from the output abort playback.
pub fn play_blocking<K, D>(key: &mut K, delay: &mut D, pattern: &[u64]) -> Result<(), K::Error>
where
    K: OutputKey,
    D: DelayNs,
{
    #[cfg(feature = "defmt")]
    defmt::debug!("Playing {} steps, {} ms", pattern.len(), pattern_duration(pattern));

    for step in steps(pattern) {
        key.set_state(step.key_down)?;
        delay_long_ms(delay, step.duration_ms);
    }
    key.set_state(false)
}

fn delay_long_ms<D: DelayNs>(delay: &mut D, mut ms: u64) {
    while ms > u32::MAX as u64 {
        delay.delay_ms(u32::MAX);
        ms -= u32::MAX as u64;
    }
    delay.delay_ms(ms as u32);
}

/// Play a pattern on the embassy timer
#[cfg(feature = "embassy-time")]
pub async fn play<K: OutputKey>(key: &mut K, pattern: &[u64]) -> Result<(), K::Error> {
    use embassy_time::{Duration, Timer};

    #[cfg(feature = "defmt")]
    defmt::debug!("Playing {} steps, {} ms", pattern.len(), pattern_duration(pattern));

    for step in steps(pattern) {
        key.set_state(step.key_down)?;
        Timer::after(Duration::from_millis(step.duration_ms)).await;
    }
    key.set_state(false)
}
