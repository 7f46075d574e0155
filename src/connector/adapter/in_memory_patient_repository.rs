use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::application::{Clock, IdGenerator, PatientRepository};
use crate::domain::{DomainError, NewPatient, Patient, PatientUpdate};

use super::InMemoryStore;

pub struct InMemoryPatientRepository {
    store: InMemoryStore<Patient>,
}

impl InMemoryPatientRepository {
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

impl Default for InMemoryPatientRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepository {
    async fn save(&self, patient: NewPatient) -> Result<Patient, DomainError> {
        let saved = self
            .store
            .insert_with(|id, created_at| Patient::register(id, created_at, patient))
            .await;
        debug!("Saved patient {} to memory", saved.id());
        Ok(saved)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Patient>, DomainError> {
        Ok(self.store.get(id).await)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Patient>, DomainError> {
        Ok(self.store.find_first(|patient| patient.email() == email).await)
    }

    async fn find_all(&self) -> Result<Vec<Patient>, DomainError> {
        Ok(self.store.all().await)
    }

    async fn update(
        &self,
        id: &str,
        update: &PatientUpdate,
    ) -> Result<Option<Patient>, DomainError> {
        Ok(self.store.update(id, update).await)
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.store.remove(id).await)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.store.count().await as u64)
    }
}
