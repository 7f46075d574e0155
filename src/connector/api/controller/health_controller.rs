use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::Json;
use serde::Serialize;

use crate::cli::ServiceKind;
use crate::connector::api::ApiResult;
use crate::{DoctorService, OrderService, PatientService};

use super::super::Container;

#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub service: &'static str,
    pub records: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub services: Vec<ServiceHealth>,
}

/// Reports liveness plus the record count of every mounted service.
#[derive(Clone)]
pub struct HealthController {
    services: Vec<ServiceKind>,
    doctor_service: Arc<DoctorService>,
    patient_service: Arc<PatientService>,
    order_service: Arc<OrderService>,
}

impl HealthController {
    pub fn new(container: &Container, services: Vec<ServiceKind>) -> Self {
        Self {
            services,
            doctor_service: container.doctor_service(),
            patient_service: container.patient_service(),
            order_service: container.order_service(),
        }
    }

    pub fn routes(self) -> axum::Router {
        axum::Router::new()
            .route("/health", get(health))
            .with_state(self)
    }

    async fn report(&self) -> ApiResult<HealthReport> {
        let mut services = Vec::with_capacity(self.services.len());
        for kind in &self.services {
            let records = match kind {
                ServiceKind::Doctors => self.doctor_service.count().await?,
                ServiceKind::Patients => self.patient_service.count().await?,
                ServiceKind::Orders => self.order_service.count().await?,
                ServiceKind::All => continue,
            };
            services.push(ServiceHealth {
                service: kind.name(),
                records,
            });
        }

        Ok(HealthReport {
            status: "ok",
            services,
        })
    }
}

async fn health(State(controller): State<HealthController>) -> ApiResult<Json<HealthReport>> {
    Ok(Json(controller.report().await?))
}
