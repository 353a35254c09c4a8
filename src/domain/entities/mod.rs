//! # Domain Entities Module
//!
//! 이 모듈은 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! Spring Framework의 JPA Entity와 유사한 역할을 하며, MongoDB 문서와 직접 매핑되는
//! 데이터 구조체들을 포함합니다.
//!
//! ## 아키텍처 특징
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (영속 엔티티)
//! ├── models/       ← 페이지, 변경 집합, 토큰 클레임 등 값 객체
//! └── dto/          ← 데이터 전송 객체
//! ```
//!
//! ### MongoDB 통합
//! - **BSON 직렬화**: `serde`와 `bson` 크레이트를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//! - **Soft delete**: `deleted_at` 필드로 삭제 상태를 표현
//!
//! ## 주의사항
//!
//! - 엔티티는 저장소 계층과 유스케이스 사이에서만 이동합니다.
//!   HTTP 응답으로 내보낼 때는 반드시 `dto`의 응답 타입으로 변환합니다.

pub mod users;

pub use users::user::User;
