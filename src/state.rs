use std::sync::Arc;

use crate::{application::command_service::CommandService, interface::http::auth::JwtValidator};

#[derive(Clone)]
pub struct AppState {
    pub command_service: Arc<CommandService>,
    /// Runtime environment descriptor, echoed on the list endpoint.
    pub environment: String,
    /// Absent when the deployment runs without the bearer gate.
    pub jwt_validator: Option<Arc<JwtValidator>>,
}

impl AppState {
    pub fn new(
        command_service: Arc<CommandService>,
        environment: String,
        jwt_validator: Option<Arc<JwtValidator>>,
    ) -> Self {
        Self {
            command_service,
            environment,
            jwt_validator,
        }
    }
}
