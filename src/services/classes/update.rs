use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{debug, error, info};

use super::{CLASSES_CACHE_TAG, ClasseService};
use crate::models::classes::requests::UpdateClasseRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_classe;

pub async fn update_classe(
    service: &ClasseService,
    request: &HttpRequest,
    classe_id: i64,
    data: UpdateClasseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let cache = service.get_cache(request);

    // 解析教师引用：无法解析的 ID 静默忽略，保持原教师
    let professeur_id = match data.id_professeur {
        Some(pid) => match storage.professeur_exists(pid).await {
            Ok(true) => Some(pid),
            Ok(false) => {
                debug!("idProfesseur {} does not resolve, keeping previous", pid);
                None
            }
            Err(e) => {
                error!("Failed to resolve professeur {}: {}", pid, e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to resolve professeur: {e}"),
                    )),
                );
            }
        },
        None => None,
    };

    // 仅校验请求体中出现的字段
    let errors = validate_classe(data.nom.as_deref(), true, true);
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    match storage.update_classe(classe_id, data, professeur_id).await {
        Ok(Some(_)) => {
            cache.invalidate_tag(CLASSES_CACHE_TAG).await;
            info!("Classe {} updated successfully", classe_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => {
            error!("Classe update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Classe update failed: {e}"),
                )),
            )
        }
    }
}
