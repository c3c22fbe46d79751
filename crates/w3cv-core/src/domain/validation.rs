use crate::domain::{entities::Endpoints, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_endpoints(endpoints: &Endpoints) -> Result<(), DomainError> {
        endpoints.validate()
    }

    pub fn validate_attempt_budget(attempts: u32) -> Result<(), DomainError> {
        if attempts == 0 {
            return Err(DomainError::InvalidAttemptBudget { attempts });
        }
        Ok(())
    }
}
