use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header::ContentType};
use tracing::error;

use super::{CLASSES_CACHE_TAG, CLASSES_LIST_NAME, ClasseService};
use crate::cache::ListCache;
use crate::models::classes::responses::ClasseView;
use crate::models::{ApiResponse, ErrorCode, PaginationQuery};
use crate::services::request_projection;

pub async fn list_classes(
    service: &ClasseService,
    request: &HttpRequest,
    query: PaginationQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let cache = service.get_cache(request);
    let (roles, ctx) = request_projection(request);

    let page = query.page();
    let limit = query.limit();

    let key = ListCache::list_key(CLASSES_LIST_NAME, page, limit, &roles);
    let payload = cache
        .get_or_compute(&key, CLASSES_CACHE_TAG, || async move {
            let classes = storage.list_classes_with_pagination(page, limit).await?;
            let views: Vec<ClasseView> = classes.iter().map(|c| ClasseView::project(c, &ctx)).collect();
            Ok(serde_json::to_string(&views)?)
        })
        .await;

    match payload {
        Ok(json) => Ok(HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(json)),
        Err(e) => {
            error!("Failed to retrieve classe list: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve classe list: {e}"),
                )),
            )
        }
    }
}
