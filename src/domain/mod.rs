//! # Domain Layer
//!
//! 사용자 관리 서비스의 도메인 계층입니다.
//! 저장소, 유스케이스, 전송 계층이 공유하는 타입들을 한곳에 모읍니다.
//!
//! ## 구조
//!
//! ```text
//! domain/
//! ├── entities/        # 영속 엔티티 (MongoDB 문서)
//! │   └── users/user.rs
//! ├── models/          # 값 객체
//! │   ├── auth/        # AuthenticatedUser, AuthMode, RequiredRole
//! │   ├── token/       # TokenClaims, IssuedToken
//! │   ├── users/       # UpdateUserPayload, UserChangeSet
//! │   └── page.rs      # PageRequest, Page<T>
//! └── dto/             # HTTP 요청/응답
//!     └── users/{request,response}
//! ```
//!
//! ## 변환 흐름
//!
//! ```text
//! RegisterRequest ──▶ UserService::register ──▶ User ──▶ UserResponse
//! UpdateUserRequest ─▶ UpdateUserPayload ─▶ UserChangeSet ─▶ UserStore::update_fields
//! ```
//!
//! 엔티티는 HTTP 경계를 넘지 않습니다. 응답은 항상 `dto`의 타입으로 변환되며,
//! 이 단계에서 비밀번호 해시가 제거됩니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::User;
pub use models::page::{Page, PageRequest};
pub use models::users::{UpdateUserPayload, UserChangeSet};
