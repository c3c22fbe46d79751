//! Reporter adapters.
//!
//! The terminal reporter lives in the CLI crate next to the rest of the
//! output formatting; only the in-memory one is shared.

mod memory;

pub use memory::MemoryReporter;
