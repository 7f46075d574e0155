use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Json;

use crate::connector::api::{ApiError, ApiResult};
use crate::{
    DomainError, NewPatient, Patient, PatientService, PatientStats, PatientUpdate,
};

use super::super::Container;

const PATIENT_NOT_FOUND: &str = "Paciente no encontrado";

fn patient_not_found() -> ApiError {
    DomainError::not_found(PATIENT_NOT_FOUND).into()
}

#[derive(Clone)]
pub struct PatientController {
    service: Arc<PatientService>,
}

impl PatientController {
    pub fn new(container: &Container) -> Self {
        Self {
            service: container.patient_service(),
        }
    }

    pub fn routes(self) -> axum::Router {
        axum::Router::new()
            .route("/pacientes", get(list_patients).post(register_patient))
            .route("/pacientes/estadisticas/resumen", get(patient_stats))
            .route(
                "/pacientes/{paciente_id}",
                get(get_patient).put(update_patient).delete(delete_patient),
            )
            .route("/pacientes/{paciente_id}/activate", post(activate_patient))
            .route("/pacientes/{paciente_id}/deactivate", post(deactivate_patient))
            .with_state(self)
    }
}

fn found(patient: Option<Patient>) -> ApiResult<Json<Patient>> {
    patient
        .map(Json)
        .ok_or_else(patient_not_found)
}

async fn register_patient(
    State(controller): State<PatientController>,
    payload: Result<Json<NewPatient>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Patient>)> {
    let Json(new_patient) = payload?;
    let patient = controller.service.register(new_patient).await?;
    Ok((StatusCode::CREATED, Json(patient)))
}

async fn list_patients(
    State(controller): State<PatientController>,
) -> ApiResult<Json<Vec<Patient>>> {
    Ok(Json(controller.service.list().await?))
}

async fn get_patient(
    State(controller): State<PatientController>,
    Path(paciente_id): Path<String>,
) -> ApiResult<Json<Patient>> {
    found(controller.service.get(&paciente_id).await?)
}

async fn update_patient(
    State(controller): State<PatientController>,
    Path(paciente_id): Path<String>,
    payload: Result<Json<PatientUpdate>, JsonRejection>,
) -> ApiResult<Json<Patient>> {
    let Json(update) = payload?;
    found(controller.service.update(&paciente_id, &update).await?)
}

async fn delete_patient(
    State(controller): State<PatientController>,
    Path(paciente_id): Path<String>,
) -> ApiResult<StatusCode> {
    if controller.service.delete(&paciente_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(patient_not_found())
    }
}

async fn activate_patient(
    State(controller): State<PatientController>,
    Path(paciente_id): Path<String>,
) -> ApiResult<Json<Patient>> {
    found(controller.service.activate(&paciente_id).await?)
}

async fn deactivate_patient(
    State(controller): State<PatientController>,
    Path(paciente_id): Path<String>,
) -> ApiResult<Json<Patient>> {
    found(controller.service.deactivate(&paciente_id).await?)
}

async fn patient_stats(
    State(controller): State<PatientController>,
) -> ApiResult<Json<PatientStats>> {
    Ok(Json(controller.service.stats().await?))
}
