use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::domain::order::{PlaceOrder, VerifyCode};

use super::error::ApiError;
use super::AppState;

/// POST /order
pub async fn place_order(
    state: web::Data<AppState>,
    web::Json(command): web::Json<PlaceOrder>,
) -> Result<HttpResponse, ApiError> {
    let order = state.orders.place_order(command).await?;
    state.metrics.orders_placed.inc();

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "order_id": order.order_id,
        "code": order.code,
    })))
}

/// POST /verify-code
pub async fn verify_code(
    state: web::Data<AppState>,
    web::Json(command): web::Json<VerifyCode>,
) -> Result<HttpResponse, ApiError> {
    let outcome = state.verification.verify_code(command).await?;
    state.metrics.record_verification(outcome.as_label());

    if !outcome.is_match() {
        return Err(ApiError::NoMatch);
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "status": "success",
    })))
}
