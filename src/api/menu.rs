use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::domain::menu::AddMenuItem;

use super::error::ApiError;
use super::AppState;

/// GET /menu
pub async fn list_items(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let items = state.menu.list_items().await?;
    Ok(HttpResponse::Ok().json(items))
}

/// POST /menu
pub async fn add_item(
    state: web::Data<AppState>,
    web::Json(command): web::Json<AddMenuItem>,
) -> Result<HttpResponse, ApiError> {
    let item = state.menu.add_item(command).await?;
    state.metrics.menu_items_created.inc();

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Menu item added",
        "id": item.id,
    })))
}
