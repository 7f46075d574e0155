use async_trait::async_trait;

use crate::domain::{DomainError, NewPatient, Patient, PatientUpdate};

/// Persistence for patients.
#[async_trait]
pub trait PatientRepository: Send + Sync {
    async fn save(&self, patient: NewPatient) -> Result<Patient, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Patient>, DomainError>;

    /// Exact, case-sensitive email match.
    async fn find_by_email(&self, email: &str) -> Result<Option<Patient>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Patient>, DomainError>;

    async fn update(
        &self,
        id: &str,
        update: &PatientUpdate,
    ) -> Result<Option<Patient>, DomainError>;

    async fn delete(&self, id: &str) -> Result<bool, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
