//! 사용자 관리 서비스 백엔드
//!
//! 회원가입, 로그인, 역할 기반 접근 제어, 페이지 조회/검색,
//! 부분 수정과 soft delete를 제공하는 REST 서비스입니다.
//!
//! # Features
//!
//! - **계정 관리**: bcrypt 해싱, 이메일 중복 방지, 활성/비활성 상태
//! - **JWT 인증**: HS256 액세스 토큰, 역할(`USER`/`ADMIN`/`SUPER`) 클레임
//! - **조회**: 최신순 페이지 목록, 이름/이메일 부분 일치 검색
//! - **soft delete**: 삭제된 사용자는 모든 조회와 로그인에서 제외
//! - **저장소 교체**: MongoDB 또는 인메모리 (`DATABASE_BACKEND`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, DTO 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← UserService, PasswordService, TokenService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← dyn UserStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / 메모리 │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_service_backend::core::AppState;
//! use user_service_backend::repositories::users::InMemoryUserRepository;
//!
//! let state = AppState::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     PasswordService::from_env(),
//!     TokenService::new(JwtSettings::from_env()),
//!     DatabaseConfig::timeout(),
//! );
//!
//! let user = state.users.register("Alice", "alice@example.com", "secret123", Role::User).await?;
//! let token = state.users.login("alice@example.com", "secret123").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
