//! 集成测试公共工具
//!
//! 每个测试使用独立的 SQLite 临时库与独立的内存缓存，
//! JWT 使用配置中的共享密钥自签。

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, Error, test, web};
use serde_json::Value;

use rust_ecole_api::cache::ListCache;
use rust_ecole_api::cache::object_cache::moka::MokaCacheWrapper;
use rust_ecole_api::routes;
use rust_ecole_api::storage::{Storage, sea_orm_storage::SeaOrmStorage};
use rust_ecole_api::utils::jwt::JwtUtils;

static TEST_DB_SEQ: AtomicU32 = AtomicU32::new(0);

// 每个测试一个独立的临时数据库文件
fn test_database_url() -> String {
    let seq = TEST_DB_SEQ.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "ecole_test_{}_{}.db",
        std::process::id(),
        seq
    ));
    let _ = std::fs::remove_file(&path);
    format!("sqlite://{}?mode=rwc", path.display())
}

pub async fn spawn_app() -> impl Service<
    Request,
    Response = ServiceResponse<impl MessageBody>,
    Error = Error,
> {
    let storage: Arc<dyn Storage> = Arc::new(
        SeaOrmStorage::new_with_url(&test_database_url())
            .await
            .expect("Failed to create test storage"),
    );
    let backend = Arc::new(MokaCacheWrapper::new().expect("Failed to create test cache"));
    let cache = Arc::new(ListCache::new(backend, 600));

    test::init_service(
        App::new()
            .app_data(web::Data::new(storage))
            .app_data(web::Data::new(cache))
            .configure(routes::configure_professeurs_routes)
            .configure(routes::configure_eleves_routes)
            .configure(routes::configure_classes_routes),
    )
    .await
}

pub fn user_token() -> String {
    JwtUtils::generate_token("100", &["ROLE_USER"]).expect("Failed to issue user token")
}

pub fn admin_token() -> String {
    JwtUtils::generate_token("1", &["ROLE_USER", "ROLE_ADMIN"]).expect("Failed to issue admin token")
}

pub async fn send_get<S, B>(app: &S, path: &str, token: &str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::get()
        .uri(path)
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    test::call_service(app, req).await
}

pub async fn send_get_versioned<S, B>(
    app: &S,
    path: &str,
    token: &str,
    accept: &str,
) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::get()
        .uri(path)
        .insert_header(("Authorization", format!("Bearer {token}")))
        .insert_header(("Accept", accept.to_string()))
        .to_request();
    test::call_service(app, req).await
}

pub async fn send_post<S, B>(app: &S, path: &str, token: &str, body: Value) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri(path)
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

pub async fn send_put<S, B>(app: &S, path: &str, token: &str, body: Value) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::put()
        .uri(path)
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

pub async fn send_delete<S, B>(app: &S, path: &str, token: &str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::delete()
        .uri(path)
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    test::call_service(app, req).await
}

pub async fn read_json<B: MessageBody>(resp: ServiceResponse<B>) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("Response body is not valid JSON")
}

// 创建教师并返回其 ID
pub async fn create_professeur<S, B>(app: &S, token: &str, nom: &str, prenom: &str) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let resp = send_post(
        app,
        "/api/professeurs",
        token,
        serde_json::json!({"nom": nom, "prenom": prenom}),
    )
    .await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
    let body = read_json(resp).await;
    body["id"].as_i64().expect("Created professeur has no id")
}

// 创建学生并返回其 ID
pub async fn create_eleve<S, B>(
    app: &S,
    token: &str,
    professeur_id: i64,
    prenom: &str,
    nom: &str,
    moyenne: f64,
) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let resp = send_post(
        app,
        "/api/eleves",
        token,
        serde_json::json!({
            "prenom": prenom,
            "nom": nom,
            "moyenne": moyenne,
            "idProfesseur": professeur_id,
        }),
    )
    .await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
    let body = read_json(resp).await;
    body["id"].as_i64().expect("Created eleve has no id")
}

// 创建班级并返回其 ID（需要管理员令牌）
pub async fn create_classe<S, B>(app: &S, token: &str, professeur_id: i64, nom: &str) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let resp = send_post(
        app,
        "/api/classes",
        token,
        serde_json::json!({"nom": nom, "idProfesseur": professeur_id}),
    )
    .await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
    let body = read_json(resp).await;
    body["id"].as_i64().expect("Created classe has no id")
}
