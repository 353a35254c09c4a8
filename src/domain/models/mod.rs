//! # Domain Models Module
//!
//! 도메인의 값 객체(Value Objects)를 정의하는 모듈입니다.
//! 영속 엔티티(`entities`)와 달리 식별자보다 값 자체가 중요한 객체들입니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - 데이터베이스에 직접 저장되는 객체 (`User`)
//!
//! ### Models (`./`)
//! - [`auth`] - 인증된 사용자 컨텍스트, 인증 모드, 요구 역할
//! - [`token`] - JWT 클레임과 발급 결과
//! - [`users`] - 부분 수정 요청과 저장소 변경 집합
//! - [`page`] - 페이지 요청 정규화와 결과 묶음
//!
//! ## 흐름
//!
//! ```text
//! PATCH 요청 본문
//!   → UpdateUserPayload (필드별 Option)
//!   → UserChangeSet (비밀번호는 해시로 치환)
//!   → UserStore::update_fields
//! ```

pub mod auth;
pub mod page;
pub mod token;
pub mod users;

pub use auth::*;
pub use page::*;
pub use token::*;
pub use users::*;
