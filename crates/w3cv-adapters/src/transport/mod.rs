//! Transport adapters.

mod canned;
mod http;

pub use canned::CannedTransport;
pub use http::{HttpSettings, HttpTransport};
