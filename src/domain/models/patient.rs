use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{FieldUpdate, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    #[default]
    Active,
    Inactive,
}

impl PatientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Active => "active",
            PatientStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    id: String,
    #[serde(rename = "nombre")]
    name: String,
    email: String,
    status: PatientStatus,
    created_at: DateTime<Utc>,
}

impl Patient {
    /// New patients always start out active.
    pub fn register(id: String, created_at: DateTime<Utc>, new_patient: NewPatient) -> Self {
        Self {
            id,
            name: new_patient.name,
            email: new_patient.email,
            status: PatientStatus::Active,
            created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> PatientStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_active(&self) -> bool {
        self.status == PatientStatus::Active
    }
}

impl Record for Patient {
    type Update = PatientUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn merged(&self, update: &PatientUpdate) -> Self {
        Self {
            id: self.id.clone(),
            name: update.name.resolve(&self.name),
            email: update.email.resolve(&self.email),
            status: update.status.resolve(&self.status),
            created_at: self.created_at,
        }
    }
}

/// Payload for registering a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPatient {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
}

impl NewPatient {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PatientUpdate {
    #[serde(rename = "nombre")]
    pub name: FieldUpdate<String>,
    pub email: FieldUpdate<String>,
    pub status: FieldUpdate<PatientStatus>,
}

impl PatientUpdate {
    /// An update whose only present field is the status.
    pub fn status(status: PatientStatus) -> Self {
        Self {
            status: FieldUpdate::Set(status),
            ..Self::default()
        }
    }

    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: FieldUpdate::Set(email.into()),
            ..Self::default()
        }
    }
}

/// Active/inactive breakdown of the patient collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientStats {
    #[serde(rename = "total_pacientes")]
    pub total: u64,
    #[serde(rename = "active_pacientes")]
    pub active: u64,
    #[serde(rename = "inactive_pacientes")]
    pub inactive: u64,
}

impl PatientStats {
    pub fn from_patients(patients: &[Patient]) -> Self {
        let total = patients.len() as u64;
        let active = patients.iter().filter(|p| p.is_active()).count() as u64;
        Self {
            total,
            active,
            inactive: total - active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(status: PatientStatus) -> Patient {
        let registered = Patient::register(
            "p-1".to_string(),
            Utc::now(),
            NewPatient::new("A", "a@x.com"),
        );
        registered.merged(&PatientUpdate::status(status))
    }

    #[test]
    fn test_registered_patient_is_active() {
        let p = Patient::register("p-1".to_string(), Utc::now(), NewPatient::new("A", "a@x.com"));
        assert!(p.is_active());
        assert_eq!(p.status().as_str(), "active");
    }

    #[test]
    fn test_status_update_keeps_other_fields() {
        let p = patient(PatientStatus::Inactive);

        assert_eq!(p.status(), PatientStatus::Inactive);
        assert_eq!(p.name(), "A");
        assert_eq!(p.email(), "a@x.com");
    }

    #[test]
    fn test_stats_partition_total() {
        let patients = vec![
            patient(PatientStatus::Active),
            patient(PatientStatus::Inactive),
            patient(PatientStatus::Inactive),
        ];
        let stats = PatientStats::from_patients(&patients);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.inactive, 2);
    }

    #[test]
    fn test_stats_wire_names() {
        let json = serde_json::to_value(PatientStats::from_patients(&[])).unwrap();
        assert_eq!(json["total_pacientes"], 0);
        assert_eq!(json["active_pacientes"], 0);
        assert_eq!(json["inactive_pacientes"], 0);
    }
}
