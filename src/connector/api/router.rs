use tracing::debug;

use crate::cli::ServiceKind;

use super::container::Container;
use super::controller::{DoctorController, HealthController, OrderController, PatientController};

pub struct Router<'a> {
    container: &'a Container,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Mounts the routes of `service` (every service for `ServiceKind::All`) plus `/health`.
    pub fn build(&self, service: ServiceKind) -> axum::Router {
        let services = service.expand();
        let mut app = axum::Router::new();

        for kind in &services {
            debug!("Mounting {} routes", kind.name());
            app = match kind {
                ServiceKind::Doctors => app.merge(DoctorController::new(self.container).routes()),
                ServiceKind::Patients => {
                    app.merge(PatientController::new(self.container).routes())
                }
                ServiceKind::Orders => app.merge(OrderController::new(self.container).routes()),
                ServiceKind::All => app,
            };
        }

        app.merge(HealthController::new(self.container, services).routes())
    }
}
