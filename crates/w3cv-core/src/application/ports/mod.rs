//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `w3cv-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Transport`: HTTP exchange with a validator
//!   - `Cooldown`: Pause between requests
//!   - `Reporter`: Diagnostic stream
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Cooldown, Diagnostic, Reporter, Severity, Transport};
