use actix_web::{post, web, HttpResponse, Responder, ResponseError};

use crate::{entities::token::AdminLogin, AppState};

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<AdminLogin>,
) -> impl Responder {
    match state.auth_handler.login(request.into_inner()) {
        Ok(auth_response) => HttpResponse::Ok().json(auth_response),
        Err(e) => {
            tracing::warn!("Admin login rejected: {}", e);
            e.error_response()
        }
    }
}
