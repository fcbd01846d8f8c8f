use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{PROFESSEURS_CACHE_TAG, ProfesseurService};
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_professeur(
    service: &ProfesseurService,
    request: &HttpRequest,
    professeur_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let cache = service.get_cache(request);

    // 级联语义：学生随教师删除，班级保留但引用被清除
    match storage.delete_professeur(professeur_id).await {
        Ok(true) => {
            cache.invalidate_tag(PROFESSEURS_CACHE_TAG).await;
            info!("Professeur {} deleted successfully", professeur_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => {
            error!("Professeur deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Professeur deletion failed: {e}"),
                )),
            )
        }
    }
}
