use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Json;
use serde_json::{json, Value};

use crate::connector::api::{ApiError, ApiResult};
use crate::{Doctor, DoctorService, DoctorUpdate, DomainError, NewDoctor, Specialty};

use super::super::Container;

#[derive(Clone)]
pub struct DoctorController {
    service: Arc<DoctorService>,
}

impl DoctorController {
    pub fn new(container: &Container) -> Self {
        Self {
            service: container.doctor_service(),
        }
    }

    pub fn routes(self) -> axum::Router {
        axum::Router::new()
            .route("/doctores", get(list_doctors).post(create_doctor))
            .route("/doctores/info", get(api_info))
            .route(
                "/doctores/especialidad/{especialidad}",
                get(list_doctors_by_specialty),
            )
            .route(
                "/doctores/{doctor_id}",
                get(get_doctor).put(update_doctor).delete(delete_doctor),
            )
            .with_state(self)
    }
}

fn doctor_not_found(id: &str) -> ApiError {
    DomainError::not_found(format!("Doctor con ID {} no encontrado", id)).into()
}

async fn create_doctor(
    State(controller): State<DoctorController>,
    payload: Result<Json<NewDoctor>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Doctor>)> {
    let Json(new_doctor) = payload?;
    let doctor = controller.service.create(new_doctor).await?;
    Ok((StatusCode::CREATED, Json(doctor)))
}

async fn list_doctors(State(controller): State<DoctorController>) -> ApiResult<Json<Vec<Doctor>>> {
    Ok(Json(controller.service.list().await?))
}

async fn get_doctor(
    State(controller): State<DoctorController>,
    Path(doctor_id): Path<String>,
) -> ApiResult<Json<Doctor>> {
    controller
        .service
        .get(&doctor_id)
        .await?
        .map(Json)
        .ok_or_else(|| doctor_not_found(&doctor_id))
}

async fn list_doctors_by_specialty(
    State(controller): State<DoctorController>,
    Path(especialidad): Path<String>,
) -> ApiResult<Json<Vec<Doctor>>> {
    Ok(Json(controller.service.list_by_specialty(&especialidad).await?))
}

async fn update_doctor(
    State(controller): State<DoctorController>,
    Path(doctor_id): Path<String>,
    payload: Result<Json<DoctorUpdate>, JsonRejection>,
) -> ApiResult<Json<Doctor>> {
    let Json(update) = payload?;
    controller
        .service
        .update(&doctor_id, &update)
        .await?
        .map(Json)
        .ok_or_else(|| doctor_not_found(&doctor_id))
}

async fn delete_doctor(
    State(controller): State<DoctorController>,
    Path(doctor_id): Path<String>,
) -> ApiResult<StatusCode> {
    if controller.service.delete(&doctor_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(doctor_not_found(&doctor_id))
    }
}

async fn api_info() -> Json<Value> {
    let specialties: Vec<&str> = Specialty::ALL.iter().map(Specialty::as_str).collect();
    Json(json!({
        "nombre": "Microservicio de Doctores",
        "versión": env!("CARGO_PKG_VERSION"),
        "descripción": "API CRUD para gestión de doctores",
        "métodos_disponibles": ["GET", "POST", "PUT", "DELETE"],
        "especialidades": specialties,
    }))
}
