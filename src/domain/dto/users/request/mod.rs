//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON/쿼리 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: 이메일, 길이 등 기본 형식 규칙 (`validator`)
//! 3. **비즈니스 검증**: 이메일 중복, 계정 상태 등 (유스케이스)
//!
//! ## 에러 핸들링
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! 핸들러에서 `AppError::ValidationError`(400)로 변환됩니다.

pub mod list_query;
pub mod login_request;
pub mod register_request;
pub mod update_user_request;

pub use list_query::{ListUsersQuery, SearchUsersQuery};
pub use login_request::LoginRequest;
pub use register_request::RegisterRequest;
pub use update_user_request::UpdateUserRequest;
