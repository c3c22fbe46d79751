pub mod request;
pub mod result;
pub mod tally;
pub mod target;

pub use crate::domain::DomainError;
pub use request::{Endpoints, ValidationRequest};
pub use result::ValidationResult;
pub use tally::{Contribution, Tally};
pub use target::ValidationTarget;
