//! # Application Error Handling System
//!
//! 사용자 관리 서비스의 통합 에러 처리 시스템입니다.
//! 유스케이스가 반환하는 실패 종류를 하나의 열거형으로 모으고,
//! `actix_web::ResponseError` 구현으로 HTTP 응답까지 일관되게 변환합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. 유스케이스 단위의 에러 분류
//! - **저장소 실패**: `StoreError`, `DuplicateEmail`, `NotFound`
//! - **자격 증명 실패**: `HashingError`, `WrongPassword`, `InactiveAccount`
//! - **토큰/권한 실패**: `Unauthenticated`, `AuthorizationError`
//! - **입력 실패**: `ValidationError`
//!
//! ### 2. 자동 HTTP 응답 변환
//! 핸들러는 `AppResult<HttpResponse>`를 반환하기만 하면 됩니다.
//! 상태 코드와 JSON 본문은 [`AppError::error_response`]가 결정합니다.
//!
//! ## Spring과의 비교
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@ExceptionHandler` | `ResponseError::error_response()` |
//! | `ResponseEntity<ErrorResponse>` | `HttpResponse::build().json()` |
//! | `@ResponseStatus` | 자동 상태 코드 매핑 |
//! | Custom Exception | `AppError` 열거형 변형 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn login(&self, email: &str, password: &str) -> AppResult<IssuedToken> {
//!     let user = self.store.read_by_email_private(email).await?;
//!
//!     if !user.active {
//!         return Err(AppError::InactiveAccount(email.to_string()));
//!     }
//!
//!     self.passwords.verify(user.password_hash.as_deref().unwrap_or_default(), password).await?;
//!     self.tokens.issue(&user.id_string(), &user.email, user.role)
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패 |
//! | `WrongPassword` | 401 Unauthorized | 비밀번호 불일치 |
//! | `Unauthenticated` | 401 Unauthorized | 토큰 없음, 만료, 위조 |
//! | `InactiveAccount` | 403 Forbidden | 비활성 계정 로그인 |
//! | `AuthorizationError` | 403 Forbidden | 역할 부족 |
//! | `NotFound` | 404 Not Found | 사용자 없음 또는 삭제됨 |
//! | `DuplicateEmail` | 409 Conflict | 이메일 중복 |
//! | `HashingError` | 500 Internal Server Error | bcrypt 실패 |
//! | `StoreError` | 500 Internal Server Error | 저장소 오류, 타임아웃 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 본문
//!
//! ```json
//! {
//!   "error": "NOT_FOUND",
//!   "message": "Not found: user 665f0c..."
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 사람이 읽을 수 있는 상세 메시지를 담습니다.
/// 5xx 계열의 상세 메시지는 로그에만 남기고 클라이언트에는 일반 문구를 보냅니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 패스워드 해싱 실패
    ///
    /// bcrypt가 해시 생성에 실패한 경우입니다. 정상적인 입력에서는
    /// 발생하지 않으며 500으로 응답됩니다.
    #[error("Hashing error: {0}")]
    HashingError(String),

    /// 저장소 실패
    ///
    /// 드라이버 오류, 직렬화 실패, 저장소 호출 타임아웃을 포함합니다.
    /// 유스케이스는 이 에러를 재시도하지 않습니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// collection.insert_one(&user).await
    ///     .map_err(|e| AppError::StoreError(format!("사용자 생성 실패: {}", e)))?;
    /// ```
    #[error("Store error: {0}")]
    StoreError(String),

    /// 이메일 중복
    ///
    /// 삭제되지 않은 다른 사용자가 같은 이메일을 사용 중입니다.
    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),

    /// 대상 사용자가 없거나 soft delete 된 상태
    #[error("Not found: {0}")]
    NotFound(String),

    /// 비활성 계정
    ///
    /// 로그인 시 비밀번호 검증보다 먼저 확인됩니다.
    #[error("Inactive account: {0}")]
    InactiveAccount(String),

    /// 비밀번호 불일치 (손상된 해시 포함)
    #[error("Wrong password")]
    WrongPassword,

    /// 토큰 없음, 서명 불일치, 만료, 알고리즘 치환 등 인증 실패
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// 입력값 검증 에러
    ///
    /// # 예제
    /// ```rust,ignore
    /// request.validate()
    ///     .map_err(|e| AppError::ValidationError(e.to_string()))?;
    /// ```
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 권한 부족 에러
    ///
    /// 인증은 되었지만 요청한 작업에 필요한 역할이 없습니다.
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 들어갈 기계 판독용 코드
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::HashingError(_) => "HASHING_ERROR",
            AppError::StoreError(_) => "STORE_ERROR",
            AppError::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InactiveAccount(_) => "INACTIVE_ACCOUNT",
            AppError::WrongPassword => "WRONG_PASSWORD",
            AppError::Unauthenticated(_) => "UNAUTHENTICATED",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::AuthorizationError(_) => "FORBIDDEN",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::WrongPassword | AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::InactiveAccount(_) | AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateEmail(_) => StatusCode::CONFLICT,
            AppError::HashingError(_) | AppError::StoreError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"error": <코드>, "message": <설명>}` 형식을 따릅니다.
    /// 5xx 에러는 서버 로그에 상세 내용을 남기고, 클라이언트에는 내부 정보를 노출하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let message = if status.is_server_error() {
            log::error!("{}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": self.kind(),
            "message": message,
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
///
/// ```rust,ignore
/// async fn read_by_id(&self, id: &str) -> AppResult<User> { ... }
/// ```
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let body = serde_json::to_string(&value).context("응답 직렬화 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
