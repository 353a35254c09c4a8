//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당합니다.
//!
//! # Features
//!
//! - 회원가입과 로그인 (JWT 발급)
//! - 페이지 단위 목록 조회와 검색
//! - 필드 단위 부분 수정
//! - soft delete
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(store, passwords, tokens, DatabaseConfig::timeout());
//! let user = service.register("Kim", "kim@example.com", "Secret123", Role::User).await?;
//! let token = service.login("kim@example.com", "Secret123").await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
