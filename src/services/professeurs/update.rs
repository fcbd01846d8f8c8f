use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{PROFESSEURS_CACHE_TAG, ProfesseurService};
use crate::models::professeurs::requests::UpdateProfesseurRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_professeur;

pub async fn update_professeur(
    service: &ProfesseurService,
    request: &HttpRequest,
    professeur_id: i64,
    data: UpdateProfesseurRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let cache = service.get_cache(request);

    // 仅校验请求体中出现的字段
    let errors = validate_professeur(data.nom.as_deref(), data.prenom.as_deref(), true);
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    match storage.update_professeur(professeur_id, data).await {
        Ok(Some(_)) => {
            cache.invalidate_tag(PROFESSEURS_CACHE_TAG).await;
            info!("Professeur {} updated successfully", professeur_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => {
            error!("Professeur update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Professeur update failed: {e}"),
                )),
            )
        }
    }
}
