//! 프로세스 메모리 기반 사용자 저장소
//!
//! `DATABASE_BACKEND=memory` 실행과 유스케이스 테스트에서 사용됩니다.
//! MongoDB 구현과 같은 계약(soft delete 제외, 공개 조회 시 해시 제거, 정렬 순서)을 따릅니다.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use crate::domain::models::page::{Page, PageRequest};
use crate::domain::models::users::UserChangeSet;
use crate::repositories::users::UserStore;

/// 메모리 저장소
///
/// 복제본은 같은 맵을 공유합니다.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<ObjectId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_guard(&self) -> AppResult<RwLockReadGuard<'_, HashMap<ObjectId, User>>> {
        self.users
            .read()
            .map_err(|_| AppError::StoreError("user map lock poisoned".to_string()))
    }

    fn write_guard(&self) -> AppResult<RwLockWriteGuard<'_, HashMap<ObjectId, User>>> {
        self.users
            .write()
            .map_err(|_| AppError::StoreError("user map lock poisoned".to_string()))
    }

    /// 저장소 ID 형식이 아니면 존재할 수 없는 사용자이므로 `NotFound`
    fn parse_id(id: &str) -> AppResult<ObjectId> {
        ObjectId::parse_str(id).map_err(|_| AppError::NotFound(format!("user {}", id)))
    }

    fn email_taken(users: &HashMap<ObjectId, User>, email: &str, except: Option<ObjectId>) -> bool {
        users
            .values()
            .any(|u| !u.is_deleted() && u.email == email && u.id != except)
    }

    fn live_by_id(users: &HashMap<ObjectId, User>, id: ObjectId) -> Option<&User> {
        users.get(&id).filter(|u| !u.is_deleted())
    }

    /// 필터를 통과한 살아있는 사용자를 정렬해 한 페이지로 자릅니다.
    fn page_of<F>(&self, page: PageRequest, filter: F) -> AppResult<Page<User>>
    where
        F: Fn(&User) -> bool,
    {
        let users = self.read_guard()?;

        let mut matched: Vec<&User> = users
            .values()
            .filter(|u| !u.is_deleted() && filter(u))
            .collect();

        // created_at 내림차순, 같으면 id 내림차순
        matched.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let total = matched.len() as u64;
        let items = matched
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .map(|u| u.clone().without_password())
            .collect();

        Ok(Page::new(items, total))
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.write_guard()?;

        if Self::email_taken(&users, &user.email, None) {
            return Err(AppError::DuplicateEmail(user.email));
        }

        let id = ObjectId::new();
        let now = DateTime::now();
        user.id = Some(id);
        user.created_at = now;
        user.updated_at = now;
        user.deleted_at = None;

        users.insert(id, user.clone());

        Ok(user.without_password())
    }

    async fn read(&self, page: PageRequest) -> AppResult<Page<User>> {
        self.page_of(page, |_| true)
    }

    async fn read_by_id(&self, id: &str) -> AppResult<User> {
        let object_id = Self::parse_id(id)?;
        let users = self.read_guard()?;

        Self::live_by_id(&users, object_id)
            .map(|u| u.clone().without_password())
            .ok_or_else(|| AppError::NotFound(format!("user {}", id)))
    }

    async fn read_by_email_public(&self, email: &str) -> AppResult<User> {
        self.read_by_email_private(email)
            .await
            .map(User::without_password)
    }

    async fn read_by_email_private(&self, email: &str) -> AppResult<User> {
        let users = self.read_guard()?;

        users
            .values()
            .find(|u| !u.is_deleted() && u.email == email)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("user {}", email)))
    }

    async fn search(&self, page: PageRequest, keyword: &str) -> AppResult<Page<User>> {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return self.page_of(page, |_| true);
        }

        self.page_of(page, |u| {
            u.name.to_lowercase().contains(&keyword) || u.email.to_lowercase().contains(&keyword)
        })
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let id = user
            .id
            .ok_or_else(|| AppError::NotFound("user without id".to_string()))?;
        let mut users = self.write_guard()?;

        let existing = Self::live_by_id(&users, id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("user {}", id.to_hex())))?;

        if Self::email_taken(&users, &user.email, Some(id)) {
            return Err(AppError::DuplicateEmail(user.email));
        }

        let updated = User {
            id: Some(id),
            password_hash: user.password_hash.or(existing.password_hash),
            created_at: existing.created_at,
            updated_at: DateTime::now(),
            deleted_at: None,
            ..user
        };

        users.insert(id, updated.clone());

        Ok(updated.without_password())
    }

    async fn update_fields(&self, id: &str, changes: UserChangeSet) -> AppResult<User> {
        let object_id = Self::parse_id(id)?;
        let mut users = self.write_guard()?;

        if Self::live_by_id(&users, object_id).is_none() {
            return Err(AppError::NotFound(format!("user {}", id)));
        }

        if let Some(email) = &changes.email {
            if Self::email_taken(&users, email, Some(object_id)) {
                return Err(AppError::DuplicateEmail(email.clone()));
            }
        }

        let user = users
            .get_mut(&object_id)
            .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
        changes.apply_to(user, DateTime::now());

        Ok(user.clone().without_password())
    }

    async fn soft_delete(&self, id: &str) -> AppResult<()> {
        let object_id = Self::parse_id(id)?;
        let mut users = self.write_guard()?;

        match users.get_mut(&object_id) {
            Some(user) if !user.is_deleted() => {
                let now = DateTime::now();
                user.deleted_at = Some(now);
                user.updated_at = now;
                Ok(())
            }
            _ => Err(AppError::NotFound(format!("user {}", id))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Role;

    fn new_user(name: &str, email: &str) -> User {
        User::new(name.to_string(), email.to_string(), "$2b$04$hash".to_string(), Role::User)
    }

    async fn seeded(n: usize) -> (InMemoryUserRepository, Vec<User>) {
        let repo = InMemoryUserRepository::new();
        let mut created = Vec::new();
        for i in 0..n {
            let user = repo
                .create(new_user(&format!("user{}", i), &format!("user{}@example.com", i)))
                .await
                .unwrap();
            created.push(user);
        }
        (repo, created)
    }

    #[actix_web::test]
    async fn test_create_assigns_id_and_hides_hash() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(new_user("kim", "kim@example.com")).await.unwrap();

        assert!(user.id.is_some());
        assert!(user.password_hash.is_none());

        let private = repo.read_by_email_private("kim@example.com").await.unwrap();
        assert_eq!(private.password_hash.as_deref(), Some("$2b$04$hash"));

        let public = repo.read_by_email_public("kim@example.com").await.unwrap();
        assert!(public.password_hash.is_none());
        assert_eq!(public.id, user.id);
    }

    #[actix_web::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("kim", "kim@example.com")).await.unwrap();

        let result = repo.create(new_user("other", "kim@example.com")).await;
        assert!(matches!(result, Err(AppError::DuplicateEmail(_))));
    }

    #[actix_web::test]
    async fn test_email_reusable_after_soft_delete() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(new_user("kim", "kim@example.com")).await.unwrap();
        repo.soft_delete(&user.id_string()).await.unwrap();

        assert!(repo.create(new_user("kim2", "kim@example.com")).await.is_ok());
    }

    #[actix_web::test]
    async fn test_read_orders_newest_first_and_counts_all() {
        let (repo, created) = seeded(15).await;

        let first = repo.read(PageRequest::new(1, 10)).await.unwrap();
        assert_eq!(first.total, 15);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.items[0].id, created[14].id);

        let second = repo.read(PageRequest::new(2, 10)).await.unwrap();
        assert_eq!(second.items.len(), 5);
        assert_eq!(second.items[4].id, created[0].id);
        assert!(second.items.iter().all(|u| u.password_hash.is_none()));
    }

    #[actix_web::test]
    async fn test_search_is_case_insensitive_over_name_or_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("Alice", "a@example.com")).await.unwrap();
        repo.create(new_user("bob", "ALICE.bob@example.com")).await.unwrap();
        repo.create(new_user("carol", "c@example.com")).await.unwrap();

        let page = repo.search(PageRequest::new(1, 10), "alice").await.unwrap();
        assert_eq!(page.total, 2);

        let all = repo.search(PageRequest::new(1, 10), "   ").await.unwrap();
        assert_eq!(all.total, 3);
    }

    #[actix_web::test]
    async fn test_soft_deleted_user_is_invisible() {
        let (repo, created) = seeded(3).await;
        let id = created[1].id_string();

        repo.soft_delete(&id).await.unwrap();

        assert!(matches!(repo.read_by_id(&id).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            repo.read_by_email_private("user1@example.com").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            repo.read_by_email_public("user1@example.com").await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(repo.read(PageRequest::default()).await.unwrap().total, 2);
        assert_eq!(
            repo.search(PageRequest::default(), "user1").await.unwrap().total,
            0
        );
        assert!(matches!(repo.soft_delete(&id).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_update_fields_applies_only_present_fields() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(new_user("kim", "kim@example.com")).await.unwrap();

        let changes = UserChangeSet {
            active: Some(false),
            ..Default::default()
        };
        let updated = repo.update_fields(&user.id_string(), changes).await.unwrap();

        assert!(!updated.active);
        assert_eq!(updated.name, "kim");
        assert_eq!(updated.email, "kim@example.com");

        let private = repo.read_by_email_private("kim@example.com").await.unwrap();
        assert_eq!(private.password_hash.as_deref(), Some("$2b$04$hash"));
    }

    #[actix_web::test]
    async fn test_update_fields_duplicate_email() {
        let (repo, created) = seeded(2).await;
        let changes = UserChangeSet {
            email: Some("user1@example.com".to_string()),
            ..Default::default()
        };

        let result = repo.update_fields(&created[0].id_string(), changes).await;
        assert!(matches!(result, Err(AppError::DuplicateEmail(_))));
    }

    #[actix_web::test]
    async fn test_update_keeps_hash_when_absent() {
        let repo = InMemoryUserRepository::new();
        let mut user = repo.create(new_user("kim", "kim@example.com")).await.unwrap();
        user.name = "lee".to_string();

        let updated = repo.update(user).await.unwrap();
        assert_eq!(updated.name, "lee");

        let private = repo.read_by_email_private("kim@example.com").await.unwrap();
        assert_eq!(private.password_hash.as_deref(), Some("$2b$04$hash"));
    }

    #[actix_web::test]
    async fn test_unknown_or_malformed_id_is_not_found() {
        let repo = InMemoryUserRepository::new();
        assert!(matches!(repo.read_by_id("not-an-id").await, Err(AppError::NotFound(_))));
        assert!(matches!(
            repo.update_fields(&ObjectId::new().to_hex(), UserChangeSet::default()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
