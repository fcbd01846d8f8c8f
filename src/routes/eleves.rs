use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::PaginationQuery;
use crate::models::eleves::requests::{CreateEleveRequest, UpdateEleveRequest};
use crate::services::EleveService;

// 懒加载的全局 ELEVE_SERVICE 实例
static ELEVE_SERVICE: Lazy<EleveService> = Lazy::new(EleveService::new_lazy);

// HTTP处理程序
pub async fn list_eleves(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    ELEVE_SERVICE.list_eleves(&req, query.into_inner()).await
}

pub async fn create_eleve(
    req: HttpRequest,
    data: web::Json<CreateEleveRequest>,
) -> ActixResult<HttpResponse> {
    ELEVE_SERVICE.create_eleve(&req, data.into_inner()).await
}

pub async fn get_eleve(req: HttpRequest, eleve_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ELEVE_SERVICE.get_eleve(&req, eleve_id.into_inner()).await
}

pub async fn update_eleve(
    req: HttpRequest,
    eleve_id: web::Path<i64>,
    data: web::Json<UpdateEleveRequest>,
) -> ActixResult<HttpResponse> {
    ELEVE_SERVICE
        .update_eleve(&req, eleve_id.into_inner(), data.into_inner())
        .await
}

pub async fn delete_eleve(req: HttpRequest, eleve_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ELEVE_SERVICE
        .delete_eleve(&req, eleve_id.into_inner())
        .await
}

// 配置路由
pub fn configure_eleves_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/eleves")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_eleves))
                    .route(web::post().to(create_eleve)),
            )
            .service(
                web::resource("/{eleve_id}")
                    .route(web::get().to(get_eleve))
                    .route(web::put().to(update_eleve))
                    .route(web::delete().to(delete_eleve)),
            ),
    );
}
