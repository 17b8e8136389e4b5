//! Hardware abstraction for the binary output device (buzzer, vibration motor, key line)

use embedded_hal::digital::OutputPin;

/// Error types for HAL operations
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HalError {
    /// GPIO operation failed
    GpioError,
    /// Hardware not initialized
    NotInitialized,
}

#[cfg(feature = "std")]
impl core::fmt::Display for HalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HalError::GpioError => write!(f, "GPIO operation failed"),
            HalError::NotInitialized => write!(f, "Hardware not initialized"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HalError {}

/// Trait for key output control
pub trait OutputKey {
    type Error: From<HalError>;

    /// Set key output state (true = key down, false = key up)
    fn set_state(&mut self, state: bool) -> Result<(), Self::Error>;

    /// Get current key output state
    fn get_state(&self) -> Result<bool, Self::Error>;

    /// Toggle key output state
    fn toggle(&mut self) -> Result<(), Self::Error> {
        let current = self.get_state()?;
        self.set_state(!current)
    }
}

/// Key output on an embedded-hal output pin
///
/// The last written state is cached because embedded-hal output pins
/// cannot be read back.
pub struct EmbeddedHalKeyOutput<P> {
    pin: P,
    inverted: bool,
    state: Option<bool>,
}

impl<P> EmbeddedHalKeyOutput<P>
where
    P: OutputPin,
{
    pub fn new(pin: P, inverted: bool) -> Self {
        Self {
            pin,
            inverted,
            state: None,
        }
    }

    /// Release the underlying pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OutputKey for EmbeddedHalKeyOutput<P>
where
    P: OutputPin,
{
    type Error = HalError;

    fn set_state(&mut self, state: bool) -> Result<(), Self::Error> {
        let output_state = if self.inverted { !state } else { state };
        if output_state {
            self.pin.set_high().map_err(|_| HalError::GpioError)?;
        } else {
            self.pin.set_low().map_err(|_| HalError::GpioError)?;
        }
        self.state = Some(state);
        Ok(())
    }

    fn get_state(&self) -> Result<bool, Self::Error> {
        self.state.ok_or(HalError::NotInitialized)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! Mock implementations for testing

    use super::*;
    use core::cell::RefCell;
    use embedded_hal::delay::DelayNs;
    use std::vec::Vec;

    /// Key output that records every state change
    #[derive(Default)]
    pub struct MockKeyOutput {
        state: RefCell<bool>,
        writes: RefCell<Vec<bool>>,
    }

    impl MockKeyOutput {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn is_active(&self) -> bool {
            *self.state.borrow()
        }

        /// All states written so far
        pub fn writes(&self) -> Vec<bool> {
            self.writes.borrow().clone()
        }
    }

    impl OutputKey for MockKeyOutput {
        type Error = HalError;

        fn set_state(&mut self, state: bool) -> Result<(), Self::Error> {
            *self.state.borrow_mut() = state;
            self.writes.borrow_mut().push(state);
            Ok(())
        }

        fn get_state(&self) -> Result<bool, Self::Error> {
            Ok(*self.state.borrow())
        }
    }

    /// Key output whose writes always fail
    #[derive(Default)]
    pub struct FailingKeyOutput;

    impl OutputKey for FailingKeyOutput {
        type Error = HalError;

        fn set_state(&mut self, _state: bool) -> Result<(), Self::Error> {
            Err(HalError::GpioError)
        }

        fn get_state(&self) -> Result<bool, Self::Error> {
            Err(HalError::GpioError)
        }
    }

    /// Delay provider that records requested delays instead of sleeping
    #[derive(Default)]
    pub struct RecordingDelay {
        delays_ms: Vec<u32>,
    }

    impl RecordingDelay {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn delays_ms(&self) -> &[u32] {
            &self.delays_ms
        }

        pub fn total_ms(&self) -> u64 {
            self.delays_ms.iter().map(|&ms| ms as u64).sum()
        }
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.delays_ms.push(ns / 1_000_000);
        }

        fn delay_ms(&mut self, ms: u32) {
            self.delays_ms.push(ms);
        }
    }
}
