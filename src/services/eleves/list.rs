use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header::ContentType};
use tracing::error;

use super::{ELEVES_CACHE_TAG, ELEVES_LIST_NAME, EleveService};
use crate::cache::ListCache;
use crate::models::eleves::responses::EleveView;
use crate::models::{ApiResponse, ErrorCode, PaginationQuery};
use crate::services::request_projection;

pub async fn list_eleves(
    service: &EleveService,
    request: &HttpRequest,
    query: PaginationQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let cache = service.get_cache(request);
    let (roles, ctx) = request_projection(request);

    let page = query.page();
    let limit = query.limit();

    let key = ListCache::list_key(ELEVES_LIST_NAME, page, limit, &roles);
    let payload = cache
        .get_or_compute(&key, ELEVES_CACHE_TAG, || async move {
            let eleves = storage.list_eleves_with_pagination(page, limit).await?;
            let views: Vec<EleveView> = eleves.iter().map(|e| EleveView::project(e, &ctx)).collect();
            Ok(serde_json::to_string(&views)?)
        })
        .await;

    match payload {
        Ok(json) => Ok(HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(json)),
        Err(e) => {
            error!("Failed to retrieve eleve list: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve eleve list: {e}"),
                )),
            )
        }
    }
}
