//! Infrastructure adapters for w3cv.
//!
//! This crate implements the ports defined in `w3cv-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod cooldown;
pub mod reporter;
pub mod transport;

// Re-export commonly used adapters
pub use cooldown::{NoCooldown, SleepCooldown};
pub use reporter::MemoryReporter;
pub use transport::{CannedTransport, HttpSettings, HttpTransport};
