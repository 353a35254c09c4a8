//! 비즈니스 로직 계층
//!
//! - [`auth`] - 비밀번호 해싱과 JWT
//! - [`users`] - 사용자 유스케이스
//!
//! 모든 서비스는 `main`에서 생성자로 조립되어 `web::Data`로 핸들러에 전달됩니다.

pub mod users;
pub mod auth;
