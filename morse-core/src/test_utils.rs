//! Test utilities for the encoder and pattern playback

#[cfg(feature = "test-utils")]
pub mod output_capture {
    //! Output capture and analysis for testing

    use std::cell::RefCell;
    use std::rc::Rc;
    use std::string::String;
    use std::vec::Vec;
    use embedded_hal::delay::DelayNs;
    use crate::hal::{HalError, OutputKey};
    use crate::types::{GapConfig, GapKind, Timing};

    /// One captured interval of constant key state
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OutputEvent {
        pub key_down: bool,
        pub start_ms: u64,
        pub duration_ms: u64,
    }

    #[derive(Debug, Default)]
    struct Timeline {
        now_ms: u64,
        key_down: bool,
        since_ms: u64,
        events: Vec<OutputEvent>,
    }

    impl Timeline {
        /// Interval since the last key change, if any time has passed
        fn open_interval(&self) -> Option<OutputEvent> {
            let duration_ms = self.now_ms - self.since_ms;
            (duration_ms > 0).then_some(OutputEvent {
                key_down: self.key_down,
                start_ms: self.since_ms,
                duration_ms,
            })
        }

        fn close_interval(&mut self) {
            if let Some(event) = self.open_interval() {
                self.events.push(event);
            }
            self.since_ms = self.now_ms;
        }
    }

    /// Virtual clock plus key line, shared by a [`CaptureKey`] and a [`CaptureDelay`]
    #[derive(Debug, Clone, Default)]
    pub struct OutputCapture {
        inner: Rc<RefCell<Timeline>>,
    }

    impl OutputCapture {
        pub fn new() -> Self {
            Self::default()
        }

        /// Key output writing into this capture
        pub fn key(&self) -> CaptureKey {
            CaptureKey { inner: self.inner.clone() }
        }

        /// Delay provider advancing this capture's clock
        pub fn delay(&self) -> CaptureDelay {
            CaptureDelay { inner: self.inner.clone() }
        }

        /// Virtual time elapsed so far
        pub fn now_ms(&self) -> u64 {
            self.inner.borrow().now_ms
        }

        /// Completed intervals, the one in progress included
        ///
        /// Reading does not close the open interval, so it can be called
        /// while playback is still running.
        pub fn events(&self) -> Vec<OutputEvent> {
            let timeline = self.inner.borrow();
            let mut events = timeline.events.clone();
            events.extend(timeline.open_interval());
            events
        }

        /// Total key-down time
        pub fn keyed_ms(&self) -> u64 {
            self.events()
                .iter()
                .filter(|event| event.key_down)
                .map(|event| event.duration_ms)
                .sum()
        }

        /// Number of key-down intervals
        pub fn pulse_count(&self) -> usize {
            self.events().iter().filter(|event| event.key_down).count()
        }

        /// Rebuild dot/dash text from the captured output
        ///
        /// Characters are separated by a space and words by `" / "`; the
        /// leading wait is ignored.
        pub fn to_morse_string(&self, timing: &Timing, gaps: &GapConfig) -> String {
            let short = timing.gap_duration(GapKind::Short, gaps);
            let medium = timing.gap_duration(GapKind::Medium, gaps);

            let mut result = String::new();
            for event in self.events() {
                if event.key_down {
                    result.push(if event.duration_ms >= timing.dah { '-' } else { '.' });
                } else if !result.is_empty() {
                    if event.duration_ms >= medium {
                        result.push_str(" / ");
                    } else if event.duration_ms >= short {
                        result.push(' ');
                    }
                }
            }
            result
        }
    }

    pub struct CaptureKey {
        inner: Rc<RefCell<Timeline>>,
    }

    impl OutputKey for CaptureKey {
        type Error = HalError;

        fn set_state(&mut self, state: bool) -> Result<(), Self::Error> {
            let mut timeline = self.inner.borrow_mut();
            if timeline.key_down != state {
                timeline.close_interval();
                timeline.key_down = state;
            }
            Ok(())
        }

        fn get_state(&self) -> Result<bool, Self::Error> {
            Ok(self.inner.borrow().key_down)
        }
    }

    pub struct CaptureDelay {
        inner: Rc<RefCell<Timeline>>,
    }

    impl DelayNs for CaptureDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.inner.borrow_mut().now_ms += ns as u64 / 1_000_000;
        }

        fn delay_ms(&mut self, ms: u32) {
            self.inner.borrow_mut().now_ms += ms as u64;
        }
    }
}

#[cfg(feature = "test-utils")]
pub mod test_scenarios {
    //! Common test messages

    /// Standard word for speed measurement (50 units)
    pub const PARIS: &str = "PARIS";

    /// Every letter of the alphabet
    pub const PANGRAM: &str = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";

    /// Messages paired with their unframed rendering
    pub fn rendered_messages() -> &'static [(&'static str, &'static str)] {
        &[
            ("SOS", "... --- ...\n"),
            ("cq de k1abc", "-.-. --.-\n-.. .\n-.- .---- .- -... -.-.\n"),
            ("73!", "--... ...-- -.-.--\n"),
            ("e=mc2", ". -...- -- -.-. ..---\n"),
        ]
    }
}
