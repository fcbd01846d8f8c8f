use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use tracing::{debug, error, info};

use super::{CLASSES_CACHE_TAG, ClasseService};
use crate::models::classes::requests::CreateClasseRequest;
use crate::models::classes::responses::ClasseView;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::request_projection;
use crate::utils::validate::validate_classe;

// 创建班级（路由层要求 ROLE_ADMIN）
pub async fn create_classe(
    service: &ClasseService,
    request: &HttpRequest,
    data: CreateClasseRequest,
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
    let errors = validate_classe(data.nom.as_deref(), professeur_id.is_some(), false);
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    // 校验已保证教师引用有效
    let Some(professeur_id) = professeur_id else {
        return Ok(HttpResponse::BadRequest().json(errors));
    };

    match storage.create_classe(data, professeur_id).await {
        Ok(classe) => {
            cache.invalidate_tag(CLASSES_CACHE_TAG).await;
            info!("Classe {} created successfully", classe.classe.id);
            let location = format!("/api/classes/{}", classe.classe.id);
            Ok(HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .json(ClasseView::project(&classe, &ctx)))
        }
        Err(e) => {
            error!("Classe creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Classe creation failed: {e}"),
                )),
            )
        }
    }
}
