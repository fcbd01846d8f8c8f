//! 班级端点集成测试

mod common;

use actix_web::http::StatusCode;
use serde_json::json;

use common::*;

#[actix_web::test]
async fn create_classe_requires_admin_role() {
    let app = spawn_app().await;
    let user = user_token();
    let admin = admin_token();
    let prof = create_professeur(&app, &user, "Martin", "Paul").await;

    // 普通用户被拒绝
    let resp = send_post(
        &app,
        "/api/classes",
        &user,
        json!({"nom": "6ème A", "idProfesseur": prof}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // 管理员可以创建
    let resp = send_post(
        &app,
        "/api/classes",
        &admin,
        json!({"nom": "6ème A", "idProfesseur": prof}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp
        .headers()
        .get("Location")
        .expect("Missing Location header")
        .to_str()
        .unwrap()
        .to_string();
    let body = read_json(resp).await;
    assert_eq!(body["nom"], "6ème A");
    assert_eq!(body["professeur"]["id"], prof);
    assert_eq!(location, format!("/api/classes/{}", body["id"]));
}

#[actix_web::test]
async fn other_classe_mutations_require_only_authentication() {
    let app = spawn_app().await;
    let user = user_token();
    let admin = admin_token();
    let prof = create_professeur(&app, &user, "Martin", "Paul").await;
    let classe = create_classe(&app, &admin, prof, "6ème A").await;

    // 更新与删除只要求认证，不要求管理员
    let resp = send_put(
        &app,
        &format!("/api/classes/{classe}"),
        &user,
        json!({"nom": "5ème B"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send_delete(&app, &format!("/api/classes/{classe}"), &user).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn create_classe_name_boundaries() {
    let app = spawn_app().await;
    let user = user_token();
    let admin = admin_token();
    let prof = create_professeur(&app, &user, "Martin", "Paul").await;

    // 空名称被拒绝
    let resp = send_post(
        &app,
        "/api/classes",
        &admin,
        json!({"nom": "", "idProfesseur": prof}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let errors = read_json(resp).await;
    assert_eq!(errors[0]["property"], "nom");

    // 255 个字符合法
    let resp = send_post(
        &app,
        "/api/classes",
        &admin,
        json!({"nom": "a".repeat(255), "idProfesseur": prof}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // 256 个字符被拒绝
    let resp = send_post(
        &app,
        "/api/classes",
        &admin,
        json!({"nom": "a".repeat(256), "idProfesseur": prof}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn create_classe_with_unresolvable_professeur_fails_validation() {
    let app = spawn_app().await;
    let admin = admin_token();

    let resp = send_post(
        &app,
        "/api/classes",
        &admin,
        json!({"nom": "6ème A", "idProfesseur": 9999}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let errors = read_json(resp).await;
    assert_eq!(errors[0]["property"], "professeur");
}

#[actix_web::test]
async fn links_visibility_depends_on_caller_role() {
    let app = spawn_app().await;
    let user = user_token();
    let admin = admin_token();
    let prof = create_professeur(&app, &user, "Martin", "Paul").await;
    create_classe(&app, &admin, prof, "6ème A").await;

    // 管理员先请求并填充缓存
    let resp = send_get(&app, "/api/classes?page=1&limit=3", &admin).await;
    let body = read_json(resp).await;
    let entry = &body.as_array().unwrap()[0];
    assert!(entry["_links"]["self"].is_object());
    assert!(entry["_links"]["update"].is_object());
    assert!(entry["_links"]["delete"].is_object());

    // 角色分区的缓存键：普通用户不会拿到管理员的投影
    let resp = send_get(&app, "/api/classes?page=1&limit=3", &user).await;
    let body = read_json(resp).await;
    let entry = &body.as_array().unwrap()[0];
    assert!(entry["_links"]["self"].is_object());
    assert!(entry["_links"].get("update").is_none());
    assert!(entry["_links"].get("delete").is_none());
}

#[actix_web::test]
async fn version_negotiation_gates_created_at() {
    let app = spawn_app().await;
    let user = user_token();
    let admin = admin_token();
    let prof = create_professeur(&app, &user, "Martin", "Paul").await;
    let classe = create_classe(&app, &admin, prof, "6ème A").await;

    // 默认版本 1.0 不输出 createdAt
    let resp = send_get(&app, &format!("/api/classes/{classe}"), &user).await;
    let body = read_json(resp).await;
    assert!(body.get("createdAt").is_none());

    // 协商 2.0 后输出
    let resp = send_get_versioned(
        &app,
        &format!("/api/classes/{classe}"),
        &user,
        "application/json; version=2.0",
    )
    .await;
    let body = read_json(resp).await;
    assert!(body.get("createdAt").is_some());
}

#[actix_web::test]
async fn classe_list_cache_busts_on_delete() {
    let app = spawn_app().await;
    let user = user_token();
    let admin = admin_token();
    let prof = create_professeur(&app, &user, "Martin", "Paul").await;
    let classe = create_classe(&app, &admin, prof, "6ème A").await;

    let resp = send_get(&app, "/api/classes?page=1&limit=3", &user).await;
    let before = actix_web::test::read_body(resp).await;
    assert!(!before.is_empty());

    let resp = send_delete(&app, &format!("/api/classes/{classe}"), &user).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send_get(&app, "/api/classes?page=1&limit=3", &user).await;
    let after = actix_web::test::read_body(resp).await;
    assert_ne!(before, after);
    let body: serde_json::Value = serde_json::from_slice(&after).unwrap();
    assert!(body.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn get_unknown_classe_returns_not_found() {
    let app = spawn_app().await;
    let user = user_token();

    let resp = send_get(&app, "/api/classes/4242", &user).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
