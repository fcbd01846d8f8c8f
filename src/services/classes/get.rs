use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClasseService;
use crate::models::classes::responses::ClasseView;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::request_projection;

pub async fn get_classe(
    service: &ClasseService,
    request: &HttpRequest,
    classe_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let (_, ctx) = request_projection(request);

    match storage.get_classe_by_id(classe_id).await {
        Ok(Some(classe)) => Ok(HttpResponse::Ok().json(ClasseView::project(&classe, &ctx))),
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => {
            error!("Failed to retrieve classe {}: {}", classe_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve classe: {e}"),
                )),
            )
        }
    }
}
