use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::domain::auth::{AuthError, Login, Register};

use super::error::ApiError;
use super::AppState;

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    web::Json(command): web::Json<Login>,
) -> Result<HttpResponse, ApiError> {
    match state.auth.login(command).await {
        Ok(_) => {
            state.metrics.record_login(true);
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "message": "Login successful",
            })))
        }
        Err(e @ AuthError::InvalidCredentials) => {
            state.metrics.record_login(false);
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /register
pub async fn register(
    state: web::Data<AppState>,
    web::Json(command): web::Json<Register>,
) -> Result<HttpResponse, ApiError> {
    let user = state.auth.register(command).await?;
    state.metrics.registrations.inc();

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "User registered",
        "id": user.id,
    })))
}
