use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::PaginationQuery;
use crate::models::professeurs::requests::{CreateProfesseurRequest, UpdateProfesseurRequest};
use crate::services::ProfesseurService;

// 懒加载的全局 PROFESSEUR_SERVICE 实例
static PROFESSEUR_SERVICE: Lazy<ProfesseurService> = Lazy::new(ProfesseurService::new_lazy);

// HTTP处理程序
pub async fn list_professeurs(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    PROFESSEUR_SERVICE
        .list_professeurs(&req, query.into_inner())
        .await
}

pub async fn create_professeur(
    req: HttpRequest,
    data: web::Json<CreateProfesseurRequest>,
) -> ActixResult<HttpResponse> {
    PROFESSEUR_SERVICE
        .create_professeur(&req, data.into_inner())
        .await
}

pub async fn get_professeur(
    req: HttpRequest,
    professeur_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    PROFESSEUR_SERVICE
        .get_professeur(&req, professeur_id.into_inner())
        .await
}

pub async fn update_professeur(
    req: HttpRequest,
    professeur_id: web::Path<i64>,
    data: web::Json<UpdateProfesseurRequest>,
) -> ActixResult<HttpResponse> {
    PROFESSEUR_SERVICE
        .update_professeur(&req, professeur_id.into_inner(), data.into_inner())
        .await
}

pub async fn delete_professeur(
    req: HttpRequest,
    professeur_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    PROFESSEUR_SERVICE
        .delete_professeur(&req, professeur_id.into_inner())
        .await
}

// 配置路由
pub fn configure_professeurs_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/professeurs")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_professeurs))
                    .route(web::post().to(create_professeur)),
            )
            .service(
                web::resource("/{professeur_id}")
                    .route(web::get().to(get_professeur))
                    .route(web::put().to(update_professeur))
                    .route(web::delete().to(delete_professeur)),
            ),
    );
}
