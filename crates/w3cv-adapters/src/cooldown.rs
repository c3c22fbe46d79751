//! Cooldown adapters.

use std::time::Duration;

use tracing::trace;
use w3cv_core::application::ports::Cooldown;

/// Pause between requests to the shared W3C services.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(2);

/// Production cooldown: blocks the calling thread.
#[derive(Debug, Clone, Copy)]
pub struct SleepCooldown {
    duration: Duration,
}

impl SleepCooldown {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for SleepCooldown {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

impl Cooldown for SleepCooldown {
    fn pause(&self) {
        if self.duration.is_zero() {
            return;
        }
        trace!(millis = self.duration.as_millis(), "Cooling down");
        std::thread::sleep(self.duration);
    }
}

/// Cooldown that returns immediately (tests, local validators).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCooldown;

impl Cooldown for NoCooldown {
    fn pause(&self) {}
}
