use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header::ContentType};
use tracing::error;

use super::{PROFESSEURS_CACHE_TAG, PROFESSEURS_LIST_NAME, ProfesseurService};
use crate::cache::ListCache;
use crate::models::professeurs::responses::ProfesseurView;
use crate::models::{ApiResponse, ErrorCode, PaginationQuery};
use crate::services::request_projection;

pub async fn list_professeurs(
    service: &ProfesseurService,
    request: &HttpRequest,
    query: PaginationQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let cache = service.get_cache(request);
    let (roles, ctx) = request_projection(request);

    let page = query.page();
    let limit = query.limit();

    let key = ListCache::list_key(PROFESSEURS_LIST_NAME, page, limit, &roles);
    let payload = cache
        .get_or_compute(&key, PROFESSEURS_CACHE_TAG, || async move {
            let professeurs = storage.list_professeurs_with_pagination(page, limit).await?;
            let views: Vec<ProfesseurView> = professeurs
                .iter()
                .map(|p| ProfesseurView::project(p, &ctx))
                .collect();
            Ok(serde_json::to_string(&views)?)
        })
        .await;

    match payload {
        Ok(json) => Ok(HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(json)),
        Err(e) => {
            error!("Failed to retrieve professeur list: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve professeur list: {e}"),
                )),
            )
        }
    }
}
