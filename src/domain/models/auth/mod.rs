//! 인증 컨텍스트 모델
//!
//! 인증 미들웨어와 핸들러 사이에서 전달되는 값 객체들입니다.

pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::{AuthenticatedUser, OptionalUser};
pub use authentication_request::{AuthMode, RequiredRole};
