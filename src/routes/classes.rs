use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::PaginationQuery;
use crate::models::auth::entities::ROLE_ADMIN;
use crate::models::classes::requests::{CreateClasseRequest, UpdateClasseRequest};
use crate::services::ClasseService;

// 懒加载的全局 CLASSE_SERVICE 实例
static CLASSE_SERVICE: Lazy<ClasseService> = Lazy::new(ClasseService::new_lazy);

// HTTP处理程序
pub async fn list_classes(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    CLASSE_SERVICE.list_classes(&req, query.into_inner()).await
}

pub async fn create_classe(
    req: HttpRequest,
    data: web::Json<CreateClasseRequest>,
) -> ActixResult<HttpResponse> {
    CLASSE_SERVICE.create_classe(&req, data.into_inner()).await
}

pub async fn get_classe(req: HttpRequest, classe_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    CLASSE_SERVICE.get_classe(&req, classe_id.into_inner()).await
}

pub async fn update_classe(
    req: HttpRequest,
    classe_id: web::Path<i64>,
    data: web::Json<UpdateClasseRequest>,
) -> ActixResult<HttpResponse> {
    CLASSE_SERVICE
        .update_classe(&req, classe_id.into_inner(), data.into_inner())
        .await
}

pub async fn delete_classe(
    req: HttpRequest,
    classe_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CLASSE_SERVICE
        .delete_classe(&req, classe_id.into_inner())
        .await
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/classes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_classes))
                    .route(
                        web::post()
                            .to(create_classe)
                            // 仅管理员可以创建班级，其余写操作只要求认证
                            .wrap(middlewares::RequireRole::new(ROLE_ADMIN)),
                    ),
            )
            .service(
                web::resource("/{classe_id}")
                    .route(web::get().to(get_classe))
                    .route(web::put().to(update_classe))
                    .route(web::delete().to(delete_classe)),
            ),
    );
}
