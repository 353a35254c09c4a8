//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! Spring Framework의 `@RequestBody`, `@ResponseBody`와 동일한 역할을 수행합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `request` 모듈 | HTTP 요청 본문 매핑 |
//! | `@ResponseBody` | `response` 모듈 | HTTP 응답 본문 매핑 |
//! | `@Valid` | `validator` crate | 입력값 유효성 검증 |
//! | `@JsonProperty` | `serde` annotations | JSON 필드 매핑 |
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/
//!     │   ├── register_request.rs
//!     │   ├── login_request.rs
//!     │   ├── update_user_request.rs
//!     │   └── list_query.rs
//!     └── response/
//!         └── user_response.rs
//! ```
//!
//! ## 변환 패턴
//! - **Entity → Response**: `impl From<User> for UserResponse`
//! - **Request → 유스케이스 입력**: `UpdateUserRequest::into_payload`

pub mod users;

pub use users::*;
