use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tracing::debug;

use crate::{config::AuthConfig, state::AppState};

/// Validates bearer tokens against the externally configured issuer and
/// audience. Pure pass/fail gate in front of the command handlers; the
/// handlers never see the claims.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    #[allow(dead_code)]
    sub: Option<String>,
}

impl JwtValidator {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);

        Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    fn validate(&self, token: &str) -> Result<(), jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation).map(|_| ())
    }
}

pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    // No validator configured means the deployment runs without the gate.
    let Some(validator) = state.jwt_validator.as_ref() else {
        return next.run(request).await;
    };

    let Some(token) = bearer_token(request.headers()) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };

    match validator.validate(token) {
        Ok(()) => next.run(request).await,
        Err(error) => {
            debug!(error = %error, "bearer token rejected");
            StatusCode::UNAUTHORIZED.into_response()
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
