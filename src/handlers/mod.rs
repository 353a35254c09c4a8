//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   UserService - 유스케이스                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   UserStore - 데이터 접근                         ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 전달
//!
//! 서비스는 전역 싱글톤이 아니라 `web::Data<UserService>` 추출자로 받습니다.
//! `main`에서 한 번 조립한 인스턴스가 모든 워커에 공유됩니다.
//!
//! ```rust,ignore
//! #[get("/{user_id}")]
//! pub async fn get_user(
//!     service: web::Data<UserService>,
//!     user_id: web::Path<String>,
//! ) -> Result<HttpResponse, AppError> {
//!     let user = service.read_by_id(&user_id).await?;
//!     Ok(HttpResponse::Ok().json(UserResponse::from(user)))
//! }
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환합니다.
//! 검증 실패는 `AppError::ValidationError`(400)로 변환되고,
//! 나머지 상태 코드는 `AppError`의 `ResponseError` 구현이 결정합니다.
//!
//! ## 모듈 구성
//! - **`auth`**: 회원가입, 로그인
//! - **`users`**: 사용자 조회/검색/수정/삭제, 본인 정보

pub mod users;
pub mod auth;
