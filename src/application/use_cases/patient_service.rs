use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::application::PatientRepository;
use crate::domain::{
    DomainError, NewPatient, Patient, PatientStats, PatientStatus, PatientUpdate,
};

use super::validation::{require_text, require_text_if_set};

const NAME_AND_EMAIL_REQUIRED: &str = "Nombre y email son requeridos";
const NAME_REQUIRED: &str = "Nombre es requerido";
const EMAIL_REQUIRED: &str = "Email es requerido";

/// Use cases for patient registration and lifecycle.
///
/// Email uniqueness is a check-then-write across the whole collection, so
/// every operation that can introduce an email holds `write_gate` for the
/// duration of the check and the write.
pub struct PatientService {
    repository: Arc<dyn PatientRepository>,
    write_gate: Mutex<()>,
}

impl PatientService {
    pub fn new(repository: Arc<dyn PatientRepository>) -> Self {
        Self {
            repository,
            write_gate: Mutex::new(()),
        }
    }

    pub async fn register(&self, new_patient: NewPatient) -> Result<Patient, DomainError> {
        require_text(&new_patient.name, NAME_AND_EMAIL_REQUIRED)?;
        require_text(&new_patient.email, NAME_AND_EMAIL_REQUIRED)?;

        let _guard = self.write_gate.lock().await;

        if self
            .repository
            .find_by_email(&new_patient.email)
            .await?
            .is_some()
        {
            warn!("Rejected patient registration: duplicate email");
            return Err(duplicate_email(&new_patient.email));
        }

        let patient = self.repository.save(new_patient).await?;
        info!("Registered patient {}", patient.id());
        Ok(patient)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Patient>, DomainError> {
        self.repository.find_by_id(id).await
    }

    pub async fn list(&self) -> Result<Vec<Patient>, DomainError> {
        self.repository.find_all().await
    }

    /// Changing the email to one held by another patient is rejected.
    pub async fn update(
        &self,
        id: &str,
        update: &PatientUpdate,
    ) -> Result<Option<Patient>, DomainError> {
        require_text_if_set(&update.name, NAME_REQUIRED)?;
        require_text_if_set(&update.email, EMAIL_REQUIRED)?;

        let _guard = self.write_gate.lock().await;

        let Some(current) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(email) = update.email.as_set() {
            if email != current.email() {
                if let Some(owner) = self.repository.find_by_email(email).await? {
                    if owner.id() != id {
                        warn!("Rejected update of patient {}: duplicate email", id);
                        return Err(duplicate_email(email));
                    }
                }
            }
        }

        let updated = self.repository.update(id, update).await?;
        if updated.is_some() {
            info!("Updated patient {}", id);
        }
        Ok(updated)
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        self.repository.count().await
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            info!("Deleted patient {}", id);
        }
        Ok(deleted)
    }

    pub async fn activate(&self, id: &str) -> Result<Option<Patient>, DomainError> {
        self.transition(id, PatientStatus::Active).await
    }

    pub async fn deactivate(&self, id: &str) -> Result<Option<Patient>, DomainError> {
        self.transition(id, PatientStatus::Inactive).await
    }

    pub async fn stats(&self) -> Result<PatientStats, DomainError> {
        let patients = self.repository.find_all().await?;
        Ok(PatientStats::from_patients(&patients))
    }

    /// Writes the target status whatever the current one is.
    async fn transition(
        &self,
        id: &str,
        status: PatientStatus,
    ) -> Result<Option<Patient>, DomainError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let updated = self
            .repository
            .update(id, &PatientUpdate::status(status))
            .await?;
        if updated.is_some() {
            info!("Patient {} is now {}", id, status.as_str());
        }
        Ok(updated)
    }
}

fn duplicate_email(email: &str) -> DomainError {
    DomainError::already_exists(format!("Email {} ya está registrado", email))
}
