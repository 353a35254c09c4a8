//! 사용자 데이터 액세스 계층
//!
//! 저장소 계약 [`UserStore`]와 두 가지 구현을 제공합니다.
//!
//! # 계약
//!
//! - 모든 조회는 soft delete 된 사용자를 제외합니다.
//! - 공개 조회(`read`, `search`, `read_by_id`, `read_by_email_public`)는
//!   `password_hash`를 `None`으로 돌려줍니다.
//! - `read_by_email_private`만 해시를 포함합니다 (로그인 전용).
//! - 목록은 `created_at` 내림차순, 같으면 `id` 내림차순입니다.
//! - 이메일은 삭제되지 않은 사용자 사이에서 unique 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserStore, InMemoryUserRepository};
//!
//! let store = InMemoryUserRepository::new();
//! let created = store.create(user).await?;
//! let page = store.read(PageRequest::new(1, 10)).await?;
//! ```

pub mod memory_repo;
pub mod user_repo;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::user::User;
use crate::domain::models::page::{Page, PageRequest};
use crate::domain::models::users::UserChangeSet;

pub use memory_repo::InMemoryUserRepository;
pub use user_repo::MongoUserRepository;

/// 사용자 저장소 계약
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 저장합니다. 이메일이 중복이면 `DuplicateEmail`.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 살아있는 사용자 한 페이지와 전체 건수
    async fn read(&self, page: PageRequest) -> AppResult<Page<User>>;

    async fn read_by_id(&self, id: &str) -> AppResult<User>;

    async fn read_by_email_public(&self, email: &str) -> AppResult<User>;

    /// 해시를 포함한 조회. 로그인 외에는 사용하지 않습니다.
    async fn read_by_email_private(&self, email: &str) -> AppResult<User>;

    /// `name` 또는 `email`에 keyword가 포함된 사용자 (대소문자 무시).
    /// 공백뿐인 keyword는 필터 없이 `read`와 같습니다.
    async fn search(&self, page: PageRequest, keyword: &str) -> AppResult<Page<User>>;

    /// 레코드 전체를 덮어씁니다. `password_hash`가 `None`이면 기존 해시를 유지합니다.
    async fn update(&self, user: User) -> AppResult<User>;

    /// 변경 집합에 있는 필드만 반영하고 갱신된 레코드를 돌려줍니다.
    async fn update_fields(&self, id: &str, changes: UserChangeSet) -> AppResult<User>;

    /// `deleted_at`을 현재 시간으로 설정합니다. 살아있는 레코드가 없으면 `NotFound`.
    async fn soft_delete(&self, id: &str) -> AppResult<()>;
}
