use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use tracing::{error, info};

use super::{PROFESSEURS_CACHE_TAG, ProfesseurService};
use crate::models::professeurs::requests::CreateProfesseurRequest;
use crate::models::professeurs::responses::ProfesseurView;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::request_projection;
use crate::utils::validate::validate_professeur;

pub async fn create_professeur(
    service: &ProfesseurService,
    request: &HttpRequest,
    data: CreateProfesseurRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let cache = service.get_cache(request);
    let (_, ctx) = request_projection(request);

    // 字段校验
    let errors = validate_professeur(data.nom.as_deref(), data.prenom.as_deref(), false);
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    // 创建教师并挂接请求中的班级/学生
    match storage.create_professeur(data).await {
        Ok(professeur) => {
            cache.invalidate_tag(PROFESSEURS_CACHE_TAG).await;
            info!(
                "Professeur {} created successfully",
                professeur.professeur.id
            );
            let location = format!("/api/professeurs/{}", professeur.professeur.id);
            Ok(HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .json(ProfesseurView::project(&professeur, &ctx)))
        }
        Err(e) => {
            error!("Professeur creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Professeur creation failed: {e}"),
                )),
            )
        }
    }
}
