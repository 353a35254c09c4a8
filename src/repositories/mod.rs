//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 유스케이스는 [`UserStore`](users::UserStore) trait에만 의존하고,
//! 실제 구현은 `main`에서 설정에 따라 선택됩니다.
//!
//! # Features
//!
//! - MongoDB 기반 저장소 (`MongoUserRepository`)
//! - 프로세스 메모리 저장소 (`InMemoryUserRepository`, 테스트 및 로컬 실행용)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{UserStore, MongoUserRepository};
//!
//! let store: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(&database));
//! let user = store.read_by_email_public("user@example.com").await?;
//! ```

pub mod users;
