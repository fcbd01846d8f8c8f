use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use tracing::{debug, error, info};

use super::{ELEVES_CACHE_TAG, EleveService};
use crate::models::eleves::requests::CreateEleveRequest;
use crate::models::eleves::responses::EleveView;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::request_projection;
use crate::utils::validate::validate_eleve;

pub async fn create_eleve(
    service: &EleveService,
    request: &HttpRequest,
    data: CreateEleveRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let cache = service.get_cache(request);
    let (_, ctx) = request_projection(request);

    // 解析教师引用：无法解析的 ID 静默忽略，交给必填校验裁决
    let professeur_id = match data.id_professeur {
        Some(pid) => match storage.professeur_exists(pid).await {
            Ok(true) => Some(pid),
            Ok(false) => {
                debug!("idProfesseur {} does not resolve, ignoring", pid);
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

    // 字段校验
    let errors = validate_eleve(
        data.prenom.as_deref(),
        data.nom.as_deref(),
        data.moyenne,
        professeur_id.is_some(),
        false,
    );
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    // 校验已保证教师引用有效
    let Some(professeur_id) = professeur_id else {
        return Ok(HttpResponse::BadRequest().json(errors));
    };

    match storage.create_eleve(data, professeur_id).await {
        Ok(eleve) => {
            cache.invalidate_tag(ELEVES_CACHE_TAG).await;
            info!("Eleve {} created successfully", eleve.eleve.id);
            let location = format!("/api/eleves/{}", eleve.eleve.id);
            Ok(HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .json(EleveView::project(&eleve, &ctx)))
        }
        Err(e) => {
            error!("Eleve creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Eleve creation failed: {e}"),
                )),
            )
        }
    }
}
