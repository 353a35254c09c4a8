//! # Routes
//!
//! 기능별 라우트를 묶어 애플리케이션에 등록합니다.
//!
//! | 스코프 | 미들웨어 | 엔드포인트 |
//! |--------|----------|------------|
//! | `/health` | 없음 | 헬스체크 |
//! | `/api/v1/auth` | 선택적 인증 | `register`, `login` |
//! | `/api/v1/me` | 필수 인증 | 내 정보 조회/수정 |
//! | `/api/v1/users` | `ADMIN` 또는 `SUPER` | 목록, 검색, 조회, 수정, 삭제 |

use crate::core::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
/// 서비스 인스턴스는 [`AppState::configure`](crate::core::AppState::configure)로 따로 등록해야 합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .configure(|cfg| state.configure(cfg))
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_user_routes(cfg);
}

/// JSON 본문과 쿼리 파싱 실패를 `ValidationError`(400) 응답으로 통일합니다.
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );
}

/// 인증 관련 라우트를 설정합니다
///
/// 누구나 접근할 수 있지만, 토큰이 있으면 검증해서 요청자 정보를 남깁니다.
/// 회원가입 핸들러는 이 정보로 관리자 역할 부여 여부를 판단합니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"alice@example.com","password":"secret123"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .wrap(AuthMiddleware::optional())
            .service(handlers::auth::register)
            .service(handlers::auth::login)
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// ## Protected 라우트 (로그인 필요)
/// - `GET /api/v1/me`, `PATCH /api/v1/me`
///
/// ## Admin 라우트 (`ADMIN` 또는 `SUPER`)
/// - `GET /api/v1/users`, `GET /api/v1/users/search`
/// - `GET|PATCH|DELETE /api/v1/users/{id}`
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/me")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::get_me)
            .service(handlers::users::update_me)
    );

    // /search 가 /{user_id} 보다 먼저 등록되어야 한다
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(AuthMiddleware::admin())
            .service(handlers::users::list_users)
            .service(handlers::users::search_users)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use super::*;
    use crate::config::{JwtSettings, Role};
    use crate::core::AppState;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::services::auth::{PasswordService, TokenService};

    fn state() -> AppState {
        AppState::new(
            Arc::new(InMemoryUserRepository::new()),
            PasswordService::new(4),
            TokenService::new(JwtSettings::new("routes-secret", 1, "user_service")),
            Duration::from_secs(5),
        )
    }

    macro_rules! init_app {
        ($state:expr) => {{
            let state = $state.clone();
            test::init_service(
                App::new()
                    .configure(move |cfg| state.configure(cfg))
                    .configure(configure_all_routes),
            )
            .await
        }};
    }

    /// 서비스로 직접 가입시키고 토큰을 받아온다
    async fn seed(state: &AppState, name: &str, email: &str, role: Role) -> (String, String) {
        let user = state.users.register(name, email, "secret123", role).await.unwrap();
        let token = state.users.login(email, "secret123").await.unwrap();
        (user.id_string(), format!("Bearer {}", token.access_token))
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = init_app!(state());

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "user_service");
    }

    #[actix_web::test]
    async fn test_register_and_login_flow() {
        let app = init_app!(state());

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({
                "name": "  Alice  ",
                "email": "alice@example.com",
                "password": "secret123"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["user"]["name"], "Alice");
        assert_eq!(body["user"]["role"], "USER");
        assert_eq!(body["user"]["active"], true);
        assert!(body["user"].get("password_hash").is_none());

        let duplicate = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({
                "name": "Alice2",
                "email": "alice@example.com",
                "password": "secret123"
            }))
            .to_request();
        assert_eq!(test::call_service(&app, duplicate).await.status(), StatusCode::CONFLICT);

        let login = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "alice@example.com", "password": "secret123" }))
            .to_request();
        let token: Value = test::call_and_read_body_json(&app, login).await;
        assert_eq!(token["token_type"], "Bearer");
        assert_eq!(token["expires_in"], 3600);

        let me = test::TestRequest::get()
            .uri("/api/v1/me")
            .insert_header((
                "Authorization",
                format!("Bearer {}", token["access_token"].as_str().unwrap()),
            ))
            .to_request();
        let me: Value = test::call_and_read_body_json(&app, me).await;
        assert_eq!(me["email"], "alice@example.com");
    }

    #[actix_web::test]
    async fn test_login_failures() {
        let state = state();
        let app = init_app!(state);
        seed(&state, "Alice", "alice@example.com", Role::User).await;

        let wrong = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "alice@example.com", "password": "wrong" }))
            .to_request();
        let res = test::call_service(&app, wrong).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "WRONG_PASSWORD");

        let unknown = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "nobody@example.com", "password": "secret123" }))
            .to_request();
        assert_eq!(test::call_service(&app, unknown).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_invalid_bodies_are_400() {
        let app = init_app!(state());

        let invalid = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({ "name": "Kim", "email": "not-an-email", "password": "short" }))
            .to_request();
        let res = test::call_service(&app, invalid).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");

        let malformed = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let res = test::call_service(&app, malformed).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");

        let blank_name = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({ "name": "   ", "email": "kim@example.com", "password": "secret123" }))
            .to_request();
        assert_eq!(test::call_service(&app, blank_name).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_privileged_registration_requires_admin() {
        let state = state();
        let app = init_app!(state);

        let anonymous = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({
                "name": "Mallory",
                "email": "mallory@example.com",
                "password": "secret123",
                "role": "ADMIN"
            }))
            .to_request();
        assert_eq!(test::call_service(&app, anonymous).await.status(), StatusCode::FORBIDDEN);

        let (_, admin) = seed(&state, "Root", "root@example.com", Role::Admin).await;

        let as_admin = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .insert_header(("Authorization", admin.clone()))
            .set_json(json!({
                "name": "Ops",
                "email": "ops@example.com",
                "password": "secret123",
                "role": "ADMIN"
            }))
            .to_request();
        assert_eq!(test::call_service(&app, as_admin).await.status(), StatusCode::CREATED);

        // ADMIN이 SUPER를 만들 수는 없다
        let escalate = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .insert_header(("Authorization", admin))
            .set_json(json!({
                "name": "Boss",
                "email": "boss@example.com",
                "password": "secret123",
                "role": "SUPER"
            }))
            .to_request();
        assert_eq!(test::call_service(&app, escalate).await.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_user_routes_require_admin() {
        let state = state();
        let app = init_app!(state);
        let (_, user) = seed(&state, "Alice", "alice@example.com", Role::User).await;

        let anonymous = test::TestRequest::get().uri("/api/v1/users").to_request();
        assert_eq!(test::call_service(&app, anonymous).await.status(), StatusCode::UNAUTHORIZED);

        let plain = test::TestRequest::get()
            .uri("/api/v1/users")
            .insert_header(("Authorization", user))
            .to_request();
        assert_eq!(test::call_service(&app, plain).await.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_admin_list_and_search() {
        let state = state();
        let app = init_app!(state);
        let (_, admin) = seed(&state, "Root", "root@example.com", Role::Super).await;
        seed(&state, "Alice", "alice@example.com", Role::User).await;
        seed(&state, "Bob", "bob@example.com", Role::User).await;

        let list = test::TestRequest::get()
            .uri("/api/v1/users?page=1&limit=2")
            .insert_header(("Authorization", admin.clone()))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, list).await;
        assert_eq!(body["count"], 3);
        assert_eq!(body["current_page"], 1);
        assert_eq!(body["total_page"], 2);
        assert_eq!(body["users"].as_array().unwrap().len(), 2);
        // 최신순
        assert_eq!(body["users"][0]["name"], "Bob");

        let defaults = test::TestRequest::get()
            .uri("/api/v1/users?page=0&limit=0")
            .insert_header(("Authorization", admin.clone()))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, defaults).await;
        assert_eq!(body["current_page"], 1);
        assert_eq!(body["total_page"], 1);

        let search = test::TestRequest::get()
            .uri("/api/v1/users/search?q=ALI")
            .insert_header(("Authorization", admin.clone()))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, search).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["users"][0]["email"], "alice@example.com");

        let bad_query = test::TestRequest::get()
            .uri("/api/v1/users?page=abc")
            .insert_header(("Authorization", admin))
            .to_request();
        assert_eq!(test::call_service(&app, bad_query).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_admin_update_and_delete() {
        let state = state();
        let app = init_app!(state);
        let (_, admin) = seed(&state, "Root", "root@example.com", Role::Admin).await;
        let (alice_id, _) = seed(&state, "alice kim", "alice@example.com", Role::User).await;
        let path = format!("/api/v1/users/{}", alice_id);

        let get = test::TestRequest::get()
            .uri(&path)
            .insert_header(("Authorization", admin.clone()))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, get).await;
        assert_eq!(body["name"], "Alice Kim");

        let deactivate = test::TestRequest::patch()
            .uri(&path)
            .insert_header(("Authorization", admin.clone()))
            .set_json(json!({ "active": false }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, deactivate).await;
        assert_eq!(body["user"]["active"], false);
        assert_eq!(body["user"]["email"], "alice@example.com");

        let login = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "alice@example.com", "password": "secret123" }))
            .to_request();
        assert_eq!(test::call_service(&app, login).await.status(), StatusCode::FORBIDDEN);

        let delete = test::TestRequest::delete()
            .uri(&path)
            .insert_header(("Authorization", admin.clone()))
            .to_request();
        assert_eq!(test::call_service(&app, delete).await.status(), StatusCode::OK);

        let gone = test::TestRequest::get()
            .uri(&path)
            .insert_header(("Authorization", admin.clone()))
            .to_request();
        assert_eq!(test::call_service(&app, gone).await.status(), StatusCode::NOT_FOUND);

        let malformed = test::TestRequest::get()
            .uri("/api/v1/users/not-an-id")
            .insert_header(("Authorization", admin))
            .to_request();
        assert_eq!(test::call_service(&app, malformed).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_admin_cannot_exceed_own_role() {
        let state = state();
        let app = init_app!(state);
        let (admin_id, admin) = seed(&state, "Root", "root@example.com", Role::Admin).await;
        let (super_id, super_token) = seed(&state, "Owner", "owner@example.com", Role::Super).await;

        let promote_self = test::TestRequest::patch()
            .uri(&format!("/api/v1/users/{}", admin_id))
            .insert_header(("Authorization", admin.clone()))
            .set_json(json!({ "role": "SUPER" }))
            .to_request();
        assert_eq!(test::call_service(&app, promote_self).await.status(), StatusCode::FORBIDDEN);
        assert_eq!(state.users.read_by_id(&admin_id).await.unwrap().role, Role::Admin);

        let super_path = format!("/api/v1/users/{}", super_id);
        let deactivate_super = test::TestRequest::patch()
            .uri(&super_path)
            .insert_header(("Authorization", admin.clone()))
            .set_json(json!({ "active": false }))
            .to_request();
        assert_eq!(test::call_service(&app, deactivate_super).await.status(), StatusCode::FORBIDDEN);

        let delete_super = test::TestRequest::delete()
            .uri(&super_path)
            .insert_header(("Authorization", admin))
            .to_request();
        assert_eq!(test::call_service(&app, delete_super).await.status(), StatusCode::FORBIDDEN);
        assert!(state.users.read_by_id(&super_id).await.unwrap().active);

        // SUPER는 ADMIN을 SUPER로 올릴 수 있다
        let promote = test::TestRequest::patch()
            .uri(&format!("/api/v1/users/{}", admin_id))
            .insert_header(("Authorization", super_token))
            .set_json(json!({ "role": "SUPER" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, promote).await;
        assert_eq!(body["user"]["role"], "SUPER");
    }

    #[actix_web::test]
    async fn test_huge_page_number_returns_empty_page() {
        let state = state();
        let app = init_app!(state);
        let (_, admin) = seed(&state, "Root", "root@example.com", Role::Admin).await;

        let req = test::TestRequest::get()
            .uri("/api/v1/users?page=18446744073709551615&limit=100")
            .insert_header(("Authorization", admin))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["users"].as_array().map(Vec::len), Some(0));
        assert_eq!(body["count"], 1);
    }

    #[actix_web::test]
    async fn test_self_update_cannot_touch_privileges() {
        let state = state();
        let app = init_app!(state);
        let (_, user) = seed(&state, "Alice", "alice@example.com", Role::User).await;

        let escalate = test::TestRequest::patch()
            .uri("/api/v1/me")
            .insert_header(("Authorization", user.clone()))
            .set_json(json!({ "role": "SUPER" }))
            .to_request();
        assert_eq!(test::call_service(&app, escalate).await.status(), StatusCode::FORBIDDEN);

        let rename = test::TestRequest::patch()
            .uri("/api/v1/me")
            .insert_header(("Authorization", user))
            .set_json(json!({ "name": "Alicia" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, rename).await;
        assert_eq!(body["user"]["name"], "Alicia");
        assert_eq!(body["user"]["role"], "USER");
    }
}
