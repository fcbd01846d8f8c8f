use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{CLASSES_CACHE_TAG, ClasseService};
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_classe(
    service: &ClasseService,
    request: &HttpRequest,
    classe_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let cache = service.get_cache(request);

    match storage.delete_classe(classe_id).await {
        Ok(true) => {
            cache.invalidate_tag(CLASSES_CACHE_TAG).await;
            info!("Classe {} deleted successfully", classe_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => {
            error!("Classe deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Classe deletion failed: {e}"),
                )),
            )
        }
    }
}
