//! 学生端点集成测试

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;

use common::*;

#[actix_web::test]
async fn create_eleve_accepts_boundary_moyennes() {
    let app = spawn_app().await;
    let token = user_token();
    let prof = create_professeur(&app, &token, "Martin", "Paul").await;

    // 边界值 0 与 20 均合法
    for moyenne in [0.0, 20.0] {
        let resp = send_post(
            &app,
            "/api/eleves",
            &token,
            json!({"prenom": "Jean", "nom": "Dupont", "moyenne": moyenne, "idProfesseur": prof}),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = read_json(resp).await;
        assert_eq!(body["moyenne"].as_f64().unwrap(), moyenne);
    }
}

#[actix_web::test]
async fn create_eleve_rejects_out_of_range_moyennes() {
    let app = spawn_app().await;
    let token = user_token();
    let prof = create_professeur(&app, &token, "Martin", "Paul").await;

    for moyenne in [21.0, -1.0] {
        let resp = send_post(
            &app,
            "/api/eleves",
            &token,
            json!({"prenom": "Jean", "nom": "Dupont", "moyenne": moyenne, "idProfesseur": prof}),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let errors = read_json(resp).await;
        assert_eq!(errors[0]["property"], "moyenne");
    }
}

#[actix_web::test]
async fn create_eleve_without_moyenne_fails_validation() {
    let app = spawn_app().await;
    let token = user_token();
    let prof = create_professeur(&app, &token, "Martin", "Paul").await;

    let resp = send_post(
        &app,
        "/api/eleves",
        &token,
        json!({"prenom": "Jean", "nom": "Dupont", "idProfesseur": prof}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let errors = read_json(resp).await;
    assert_eq!(errors[0]["property"], "moyenne");
}

#[actix_web::test]
async fn create_eleve_with_unresolvable_professeur_fails_validation() {
    let app = spawn_app().await;
    let token = user_token();

    // 无法解析的教师引用被静默忽略，必填校验随即失败
    let resp = send_post(
        &app,
        "/api/eleves",
        &token,
        json!({"prenom": "Jean", "nom": "Dupont", "moyenne": 12.0, "idProfesseur": 9999}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let errors = read_json(resp).await;
    assert_eq!(errors[0]["property"], "professeur");
}

#[actix_web::test]
async fn update_eleve_only_touches_provided_fields() {
    let app = spawn_app().await;
    let token = user_token();
    let prof = create_professeur(&app, &token, "Martin", "Paul").await;
    let eleve = create_eleve(&app, &token, prof, "Jean", "Dupont", 15.0).await;

    let resp = send_put(
        &app,
        &format!("/api/eleves/{eleve}"),
        &token,
        json!({"nom": "Lefevre"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send_get(&app, &format!("/api/eleves/{eleve}"), &token).await;
    let body = read_json(resp).await;
    assert_eq!(body["nom"], "Lefevre");
    assert_eq!(body["prenom"], "Jean");
    assert_eq!(body["moyenne"].as_f64().unwrap(), 15.0);
}

#[actix_web::test]
async fn update_eleve_accepts_moyenne_zero() {
    let app = spawn_app().await;
    let token = user_token();
    let prof = create_professeur(&app, &token, "Martin", "Paul").await;
    let eleve = create_eleve(&app, &token, prof, "Jean", "Dupont", 15.0).await;

    // 0 是合法值，必须真正落库
    let resp = send_put(
        &app,
        &format!("/api/eleves/{eleve}"),
        &token,
        json!({"moyenne": 0.0}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send_get(&app, &format!("/api/eleves/{eleve}"), &token).await;
    let body = read_json(resp).await;
    assert_eq!(body["moyenne"].as_f64().unwrap(), 0.0);
}

#[actix_web::test]
async fn update_eleve_rejects_out_of_range_moyenne() {
    let app = spawn_app().await;
    let token = user_token();
    let prof = create_professeur(&app, &token, "Martin", "Paul").await;
    let eleve = create_eleve(&app, &token, prof, "Jean", "Dupont", 15.0).await;

    let resp = send_put(
        &app,
        &format!("/api/eleves/{eleve}"),
        &token,
        json!({"moyenne": 25.0}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn update_eleve_with_unresolvable_professeur_keeps_previous() {
    let app = spawn_app().await;
    let token = user_token();
    let prof = create_professeur(&app, &token, "Martin", "Paul").await;
    let eleve = create_eleve(&app, &token, prof, "Jean", "Dupont", 15.0).await;

    let resp = send_put(
        &app,
        &format!("/api/eleves/{eleve}"),
        &token,
        json!({"idProfesseur": 9999}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send_get(&app, &format!("/api/eleves/{eleve}"), &token).await;
    let body = read_json(resp).await;
    assert_eq!(body["professeur"]["id"], prof);
}

#[actix_web::test]
async fn update_eleve_can_reassign_professeur() {
    let app = spawn_app().await;
    let token = user_token();
    let first = create_professeur(&app, &token, "Martin", "Paul").await;
    let second = create_professeur(&app, &token, "Durand", "Marie").await;
    let eleve = create_eleve(&app, &token, first, "Jean", "Dupont", 15.0).await;

    let resp = send_put(
        &app,
        &format!("/api/eleves/{eleve}"),
        &token,
        json!({"idProfesseur": second}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send_get(&app, &format!("/api/eleves/{eleve}"), &token).await;
    let body = read_json(resp).await;
    assert_eq!(body["professeur"]["id"], second);
}

#[actix_web::test]
async fn eleve_list_cache_busts_on_update() {
    let app = spawn_app().await;
    let token = user_token();
    let prof = create_professeur(&app, &token, "Martin", "Paul").await;
    let eleve = create_eleve(&app, &token, prof, "Jean", "Dupont", 15.0).await;

    let resp = send_get(&app, "/api/eleves?page=1&limit=3", &token).await;
    let before = test::read_body(resp).await;

    let resp = send_put(
        &app,
        &format!("/api/eleves/{eleve}"),
        &token,
        json!({"nom": "Lefevre"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // 更新后不得再返回变更前的缓存载荷
    let resp = send_get(&app, "/api/eleves?page=1&limit=3", &token).await;
    let after = test::read_body(resp).await;
    assert_ne!(before, after);
    let body: serde_json::Value = serde_json::from_slice(&after).unwrap();
    assert_eq!(body[0]["nom"], "Lefevre");
}

#[actix_web::test]
async fn delete_eleve_returns_no_content_then_not_found() {
    let app = spawn_app().await;
    let token = user_token();
    let prof = create_professeur(&app, &token, "Martin", "Paul").await;
    let eleve = create_eleve(&app, &token, prof, "Jean", "Dupont", 15.0).await;

    let resp = send_delete(&app, &format!("/api/eleves/{eleve}"), &token).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send_delete(&app, &format!("/api/eleves/{eleve}"), &token).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
