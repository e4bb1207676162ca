use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::sale_controller::SaleController;
use crate::dto::sale_dto::SaleRequest;
use crate::models::Sale;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::{AppJson, AppPath};

pub fn create_sale_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sales).post(create_sale))
        .route("/vehicle/:vehicle_id", get(get_sale_by_vehicle))
}

fn controller(state: &AppState) -> SaleController {
    SaleController::new(
        state.sale_service.clone(),
        state.vehicle_service.clone(),
        state.client_service.clone(),
    )
}

async fn create_sale(
    State(state): State<AppState>,
    AppJson(request): AppJson<SaleRequest>,
) -> Result<(StatusCode, Json<Sale>), AppError> {
    let sale = controller(&state).create(request).await?;
    Ok((StatusCode::CREATED, Json(sale)))
}

async fn list_sales(State(state): State<AppState>) -> Result<Json<Vec<Sale>>, AppError> {
    Ok(Json(controller(&state).list_all().await?))
}

async fn get_sale_by_vehicle(
    State(state): State<AppState>,
    AppPath(vehicle_id): AppPath<i64>,
) -> Result<Json<Sale>, AppError> {
    Ok(Json(controller(&state).get_by_vehicle(vehicle_id).await?))
}
