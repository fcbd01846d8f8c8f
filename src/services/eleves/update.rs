use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{debug, error, info};

use super::{ELEVES_CACHE_TAG, EleveService};
use crate::models::eleves::requests::UpdateEleveRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_eleve;

pub async fn update_eleve(
    service: &EleveService,
    request: &HttpRequest,
    eleve_id: i64,
    data: UpdateEleveRequest,
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

    // 仅校验请求体中出现的字段；教师引用不会因更新而失效
    let errors = validate_eleve(
        data.prenom.as_deref(),
        data.nom.as_deref(),
        data.moyenne,
        true,
        true,
    );
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    match storage.update_eleve(eleve_id, data, professeur_id).await {
        Ok(Some(_)) => {
            cache.invalidate_tag(ELEVES_CACHE_TAG).await;
            info!("Eleve {} updated successfully", eleve_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => {
            error!("Eleve update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Eleve update failed: {e}"),
                )),
            )
        }
    }
}
