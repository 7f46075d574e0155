use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::DoctorRepository;
use crate::domain::{Doctor, DoctorUpdate, DomainError, NewDoctor};

use super::validation::{require_text, require_text_if_set};

const NAME_REQUIRED: &str = "Nombre del doctor es requerido";

/// Use cases for the doctor directory.
pub struct DoctorService {
    repository: Arc<dyn DoctorRepository>,
}

impl DoctorService {
    pub fn new(repository: Arc<dyn DoctorRepository>) -> Self {
        Self { repository }
    }

    /// The specialty is already constrained by its type, so only the name is checked here.
    pub async fn create(&self, new_doctor: NewDoctor) -> Result<Doctor, DomainError> {
        if let Err(e) = require_text(&new_doctor.name, NAME_REQUIRED) {
            warn!("Rejected doctor registration: {}", e);
            return Err(e);
        }

        let doctor = self.repository.save(new_doctor).await?;
        info!("Registered doctor {} ({})", doctor, doctor.id());
        Ok(doctor)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Doctor>, DomainError> {
        self.repository.find_by_id(id).await
    }

    pub async fn list(&self) -> Result<Vec<Doctor>, DomainError> {
        self.repository.find_all().await
    }

    pub async fn list_by_specialty(&self, specialty: &str) -> Result<Vec<Doctor>, DomainError> {
        let doctors = self.repository.find_by_specialty(specialty).await?;
        debug!("Found {} doctors for specialty '{}'", doctors.len(), specialty);
        Ok(doctors)
    }

    pub async fn update(
        &self,
        id: &str,
        update: &DoctorUpdate,
    ) -> Result<Option<Doctor>, DomainError> {
        require_text_if_set(&update.name, NAME_REQUIRED)?;

        if self.repository.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let updated = self.repository.update(id, update).await?;
        if let Some(ref doctor) = updated {
            info!("Updated doctor {}", doctor.id());
        }
        Ok(updated)
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        self.repository.count().await
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            info!("Deleted doctor {}", id);
        }
        Ok(deleted)
    }
}
