use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::application::{Clock, DoctorRepository, IdGenerator};
use crate::domain::{Doctor, DoctorUpdate, DomainError, NewDoctor};

use super::InMemoryStore;

pub struct InMemoryDoctorRepository {
    store: InMemoryStore<Doctor>,
}

impl InMemoryDoctorRepository {
    pub fn new() -> Self {
        Self {
            store: InMemoryStore::new(),
        }
    }

    pub fn with_sources(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: InMemoryStore::with_sources(ids, clock),
        }
    }
}

impl Default for InMemoryDoctorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DoctorRepository for InMemoryDoctorRepository {
    async fn save(&self, doctor: NewDoctor) -> Result<Doctor, DomainError> {
        let saved = self
            .store
            .insert_with(|id, created_at| Doctor::register(id, created_at, doctor))
            .await;
        debug!("Saved doctor {} to memory", saved.id());
        Ok(saved)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Doctor>, DomainError> {
        Ok(self.store.get(id).await)
    }

    async fn find_all(&self) -> Result<Vec<Doctor>, DomainError> {
        Ok(self.store.all().await)
    }

    async fn find_by_specialty(&self, specialty: &str) -> Result<Vec<Doctor>, DomainError> {
        Ok(self
            .store
            .filter(|doctor| doctor.specialty().matches(specialty))
            .await)
    }

    async fn update(
        &self,
        id: &str,
        update: &DoctorUpdate,
    ) -> Result<Option<Doctor>, DomainError> {
        Ok(self.store.update(id, update).await)
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.store.remove(id).await)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.store.count().await as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Specialty;

    #[tokio::test]
    async fn test_find_by_specialty_ignores_case() {
        let repo = InMemoryDoctorRepository::new();
        repo.save(NewDoctor::new("Dr. X", Specialty::Cardiology))
            .await
            .unwrap();
        repo.save(NewDoctor::new("Dra. Y", Specialty::Neurology))
            .await
            .unwrap();

        let found = repo.find_by_specialty("CARDIOLOGÍA").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "Dr. X");

        assert!(repo.find_by_specialty("pediatría").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_find_returns_equal_record() {
        let repo = InMemoryDoctorRepository::new();
        let saved = repo
            .save(NewDoctor::new("Dr. X", Specialty::Surgery))
            .await
            .unwrap();

        let found = repo.find_by_id(saved.id()).await.unwrap();
        assert_eq!(found, Some(saved));
    }
}
