//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//! use crate::config::Role;
//!
//! let user = User::new(
//!     "Kim".to_string(),
//!     "kim@example.com".to_string(),
//!     hashed_password,
//!     Role::User,
//! );
//! let saved = store.create(user).await?;
//! ```

pub mod user;
