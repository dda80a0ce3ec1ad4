use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header},
};

use crate::{
    application::dto::{
        CommandResponse, CreateCommandRequest, HealthResponse, UpdateCommandRequest,
    },
    interface::http::api_error::{ApiError, ApiResult},
    state::AppState,
};

const ENVIRONMENT_HEADER: HeaderName = HeaderName::from_static("environment");

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn list_commands(
    State(state): State<AppState>,
) -> ApiResult<(HeaderMap, Json<Vec<CommandResponse>>)> {
    let commands = state
        .command_service
        .list_commands()
        .await
        .map_err(ApiError::from_domain)?;

    // Diagnostic header naming the runtime environment, for deploy checks.
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&state.environment) {
        headers.insert(ENVIRONMENT_HEADER, value);
    }

    Ok((headers, Json(commands)))
}

pub async fn get_command(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<CommandResponse>> {
    let command = state
        .command_service
        .get_command(id)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(command))
}

pub async fn create_command(
    State(state): State<AppState>,
    Json(request): Json<CreateCommandRequest>,
) -> ApiResult<(StatusCode, [(HeaderName, String); 1], Json<CommandResponse>)> {
    let created = state
        .command_service
        .create_command(request)
        .await
        .map_err(ApiError::from_create_failure)?;

    let location = format!("/api/commands/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

pub async fn update_command(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateCommandRequest>,
) -> ApiResult<StatusCode> {
    state
        .command_service
        .update_command(id, request)
        .await
        .map_err(ApiError::from_domain)?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_command(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<CommandResponse>> {
    let deleted = state
        .command_service
        .delete_command(id)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(deleted))
}
