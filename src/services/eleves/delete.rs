use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ELEVES_CACHE_TAG, EleveService};
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_eleve(
    service: &EleveService,
    request: &HttpRequest,
    eleve_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let cache = service.get_cache(request);

    match storage.delete_eleve(eleve_id).await {
        Ok(true) => {
            cache.invalidate_tag(ELEVES_CACHE_TAG).await;
            info!("Eleve {} deleted successfully", eleve_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => {
            error!("Eleve deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Eleve deletion failed: {e}"),
                )),
            )
        }
    }
}
