//! 인증 관련 서비스
//!
//! - [`PasswordService`] - bcrypt 해싱과 검증
//! - [`TokenService`] - HS256 JWT 발급과 검증
//!
//! 두 서비스 모두 상태를 바꾸지 않으므로 `Arc`로 공유됩니다.

pub mod password_service;
pub mod token_service;

pub use password_service::PasswordService;
pub use token_service::TokenService;
