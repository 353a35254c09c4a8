//! # 인증 HTTP 핸들러
//!
//! 회원가입과 로그인 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/auth/register` | 회원가입 | 201 Created |
//! | `POST` | `/api/v1/auth/login` | 로그인, 액세스 토큰 발급 | 200 OK |
//!
//! `/auth` 스코프는 선택적 인증 미들웨어로 감싸져 있어서,
//! 관리자 토큰이 있으면 `ADMIN`/`SUPER` 역할로 가입시킬 수 있습니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::response::{CreateUserResponse, LoginResponse};
use crate::domain::models::auth::OptionalUser;
use crate::services::users::UserService;
use crate::utils::string_utils::validate_required_string;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /auth/register`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Alice",
///   "email": "alice@example.com",
///   "password": "secret123"
/// }
/// ```
///
/// # 역할 지정
///
/// `role`을 생략하면 `USER`입니다. 그 이상의 역할은 요청자의 역할 이하로만 부여할 수 있습니다.
/// 익명 요청이 `ADMIN`을 요청하면 403을 반환합니다.
#[post("/register")]
pub async fn register(
    service: web::Data<UserService>,
    caller: OptionalUser,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let RegisterRequest { name, email, password, role } = payload.into_inner();
    let name = validate_required_string(&name, "name")?;
    let role = role.unwrap_or_default();

    if role.is_admin() {
        let granted = caller
            .0
            .as_ref()
            .is_some_and(|user| user.is_admin() && user.can_manage(role));
        if !granted {
            log::warn!("권한 없는 역할 가입 시도: {}", role.as_str());
            return Err(AppError::AuthorizationError(format!(
                "{} 역할로 가입시킬 권한이 없습니다",
                role.as_str()
            )));
        }
    }

    let user = service.register(&name, &email, &password, role).await?;

    Ok(HttpResponse::Created().json(CreateUserResponse::new(user, "User registered successfully")))
}

/// 로그인 핸들러
///
/// 이메일과 비밀번호를 확인하고 액세스 토큰을 발급합니다.
/// 리프레시 토큰은 없으며, 만료되면 다시 로그인해야 합니다.
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn login(
    service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token = service.login(&payload.email, &payload.password).await?;

    Ok(HttpResponse::Ok().json(LoginResponse::from(token)))
}
