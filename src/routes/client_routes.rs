use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::client_controller::ClientController;
use crate::dto::client_dto::ClientRequest;
use crate::models::Client;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::{AppJson, AppPath};

pub fn create_client_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_client))
        .route("/:id", get(get_client))
        .route("/cpf/:cpf", get(get_client_by_cpf))
}

async fn create_client(
    State(state): State<AppState>,
    AppJson(request): AppJson<ClientRequest>,
) -> Result<(StatusCode, Json<Client>), AppError> {
    let controller = ClientController::new(state.client_service.clone());
    let client = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

async fn get_client(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Client>, AppError> {
    let controller = ClientController::new(state.client_service.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn get_client_by_cpf(
    State(state): State<AppState>,
    AppPath(cpf): AppPath<String>,
) -> Result<Json<Client>, AppError> {
    let controller = ClientController::new(state.client_service.clone());
    Ok(Json(controller.get_by_cpf(&cpf).await?))
}
