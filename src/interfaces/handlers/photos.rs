use actix_web::{delete, get, post, web, HttpResponse, Responder};

use crate::{
    entities::photo::SavePhotoRequest,
    use_cases::extractors::AdminClaims,
    AppState,
};

#[post("/photos")]
pub async fn save_photo(
    state: web::Data<AppState>,
    request: web::Json<SavePhotoRequest>,
) -> impl Responder {
    match state.photo_handler.save_photo(request.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => e.to_http_response(),
    }
}

#[get("/photos")]
pub async fn get_photos(
    state: web::Data<AppState>,
    _admin: AdminClaims,
) -> impl Responder {
    match state.photo_handler.get_photos().await {
        Ok(photos) => HttpResponse::Ok().json(photos),
        Err(e) => e.to_http_response(),
    }
}

#[delete("/photos/{name}")]
pub async fn delete_photo(
    state: web::Data<AppState>,
    name: web::Path<String>,
    _admin: AdminClaims,
) -> impl Responder {
    // At-most-once delete: a missing name still reports completion.
    match state.photo_handler.delete_photo(&name.into_inner()).await {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}
