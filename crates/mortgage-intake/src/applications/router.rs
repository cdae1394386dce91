use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{
    ApplicationDraft, ApplicationId, ApplicationUpdate, MortgageApplication, RequiredFieldSet,
};
use super::repository::{ApplicationRepository, RepositoryError};
use super::service::{ApplicationServiceError, MortgageApplicationService};

/// Payload returned by the speculative requirements endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredFieldsResponse {
    pub required_fields: RequiredFieldSet,
}

/// Router builder exposing HTTP endpoints for intake, retrieval, updates,
/// and speculative requirement checks.
pub fn application_router<R>(service: Arc<MortgageApplicationService<R>>) -> Router
where
    R: ApplicationRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/mortgage/applications",
            post(create_handler::<R>).get(list_handler::<R>),
        )
        .route(
            "/api/v1/mortgage/applications/:application_id",
            get(fetch_handler::<R>).put(update_handler::<R>),
        )
        .route(
            "/api/v1/mortgage/requirements",
            post(requirements_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<MortgageApplicationService<R>>>,
    axum::Json(application): axum::Json<MortgageApplication>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.create(application) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<MortgageApplicationService<R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    let id = ApplicationId(application_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<MortgageApplicationService<R>>>,
    Path(application_id): Path<String>,
    axum::Json(update): axum::Json<ApplicationUpdate>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    let id = ApplicationId(application_id);
    match service.update(&id, update) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<MortgageApplicationService<R>>>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.list() {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn requirements_handler<R>(
    State(service): State<Arc<MortgageApplicationService<R>>>,
    axum::Json(draft): axum::Json<ApplicationDraft>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.requirements(&draft) {
        Ok(required_fields) => (
            StatusCode::OK,
            axum::Json(RequiredFieldsResponse { required_fields }),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ApplicationServiceError) -> Response {
    let (status, message) = match &error {
        ApplicationServiceError::Validation(validation) => {
            (StatusCode::UNPROCESSABLE_ENTITY, validation.to_string())
        }
        ApplicationServiceError::Repository(RepositoryError::NotFound) => (
            StatusCode::NOT_FOUND,
            "mortgage application not found".to_string(),
        ),
        ApplicationServiceError::Repository(RepositoryError::Conflict) => (
            StatusCode::CONFLICT,
            "mortgage application already exists".to_string(),
        ),
        ApplicationServiceError::Repository(RepositoryError::Unavailable(_)) => {
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    };

    let payload = json!({ "error": message });
    (status, axum::Json(payload)).into_response()
}
