use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{FieldUpdate, Record};

/// Medical specialties a doctor can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    #[serde(rename = "cardiología")]
    Cardiology,
    #[serde(rename = "neurología")]
    Neurology,
    #[serde(rename = "pediatría")]
    Pediatrics,
    #[serde(rename = "cirugía")]
    Surgery,
    #[serde(rename = "dermatología")]
    Dermatology,
    #[serde(rename = "oftalmología")]
    Ophthalmology,
    #[serde(rename = "oncología")]
    Oncology,
    #[serde(rename = "psicología")]
    Psychology,
}

impl Specialty {
    pub const ALL: [Specialty; 8] = [
        Specialty::Cardiology,
        Specialty::Neurology,
        Specialty::Pediatrics,
        Specialty::Surgery,
        Specialty::Dermatology,
        Specialty::Ophthalmology,
        Specialty::Oncology,
        Specialty::Psychology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Cardiology => "cardiología",
            Specialty::Neurology => "neurología",
            Specialty::Pediatrics => "pediatría",
            Specialty::Surgery => "cirugía",
            Specialty::Dermatology => "dermatología",
            Specialty::Ophthalmology => "oftalmología",
            Specialty::Oncology => "oncología",
            Specialty::Psychology => "psicología",
        }
    }

    /// Case-insensitive comparison against the display value.
    pub fn matches(&self, text: &str) -> bool {
        self.as_str().to_lowercase() == text.trim().to_lowercase()
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    id: String,
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "especialidad")]
    specialty: Specialty,
    created_at: DateTime<Utc>,
}

impl Doctor {
    pub fn register(id: String, created_at: DateTime<Utc>, new_doctor: NewDoctor) -> Self {
        Self {
            id,
            name: new_doctor.name,
            specialty: new_doctor.specialty,
            created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specialty(&self) -> Specialty {
        self.specialty
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dr(a). {} - {}", self.name, self.specialty)
    }
}

impl Record for Doctor {
    type Update = DoctorUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn merged(&self, update: &DoctorUpdate) -> Self {
        Self {
            id: self.id.clone(),
            name: update.name.resolve(&self.name),
            specialty: update.specialty.resolve(&self.specialty),
            created_at: self.created_at,
        }
    }
}

/// Payload for registering a doctor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDoctor {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "especialidad")]
    pub specialty: Specialty,
}

impl NewDoctor {
    pub fn new(name: impl Into<String>, specialty: Specialty) -> Self {
        Self {
            name: name.into(),
            specialty,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DoctorUpdate {
    #[serde(rename = "nombre")]
    pub name: FieldUpdate<String>,
    #[serde(rename = "especialidad")]
    pub specialty: FieldUpdate<Specialty>,
}

impl DoctorUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: FieldUpdate::Set(name.into()),
            ..Self::default()
        }
    }

    pub fn specialty(specialty: Specialty) -> Self {
        Self {
            specialty: FieldUpdate::Set(specialty),
            ..Self::default()
        }
    }
}
