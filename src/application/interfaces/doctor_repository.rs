use async_trait::async_trait;

use crate::domain::{Doctor, DoctorUpdate, DomainError, NewDoctor};

/// Persistence for doctors.
///
/// `save` assigns the identifier and creation time. Lookups that find
/// nothing return `Ok(None)` or an empty list, never an error.
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    async fn save(&self, doctor: NewDoctor) -> Result<Doctor, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Doctor>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Doctor>, DomainError>;

    /// Case-insensitive match on the specialty's display value.
    async fn find_by_specialty(&self, specialty: &str) -> Result<Vec<Doctor>, DomainError>;

    async fn update(&self, id: &str, update: &DoctorUpdate)
        -> Result<Option<Doctor>, DomainError>;

    async fn delete(&self, id: &str) -> Result<bool, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
