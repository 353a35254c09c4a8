//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 안전하고 일관된 형태로 전달합니다.
//!
//! ## 설계 철학
//!
//! - **데이터 은닉**: 비밀번호 해시는 응답 타입에 필드 자체가 없음
//! - **일관성**: 모든 응답이 snake_case 필드명 사용
//!
//! ## 응답 DTO
//!
//! - `UserResponse` - 표준 사용자 정보
//! - `CreateUserResponse` - 회원가입/수정 결과 (`user` + `message`)
//! - `LoginResponse` - 액세스 토큰
//! - `UserListResponse` - 목록/검색 결과 (`users`, `count`, `current_page`, `total_page`)

pub mod user_response;

pub use user_response::{CreateUserResponse, LoginResponse, UserListResponse, UserResponse};
