use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EleveService;
use crate::models::eleves::responses::EleveView;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::request_projection;

pub async fn get_eleve(
    service: &EleveService,
    request: &HttpRequest,
    eleve_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let (_, ctx) = request_projection(request);

    match storage.get_eleve_by_id(eleve_id).await {
        Ok(Some(eleve)) => Ok(HttpResponse::Ok().json(EleveView::project(&eleve, &ctx))),
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => {
            error!("Failed to retrieve eleve {}: {}", eleve_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve eleve: {e}"),
                )),
            )
        }
    }
}
