//! MongoDB 사용자 저장소
//!
//! `users` 컬렉션에 대한 [`UserStore`] 구현입니다.
//!
//! ## 컬렉션 규칙
//!
//! - 살아있는 문서는 `deleted_at: null`을 가집니다.
//! - 이메일 unique 인덱스는 `deleted_at`이 `null`인 문서에만 적용되는 부분 인덱스입니다.
//!   삭제된 사용자의 이메일은 재가입에 사용할 수 있습니다.
//! - 공개 조회는 `password_hash`를 프로젝션에서 제외합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, DateTime, Document},
    error::{ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::domain::models::page::{Page, PageRequest};
use crate::domain::models::users::UserChangeSet;
use crate::repositories::users::UserStore;

const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 사용자 저장소
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(Self::COLLECTION),
        }
    }

    /// 컬렉션 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        // 살아있는 사용자 사이에서만 이메일 유니크
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .partial_filter_expression(doc! { "deleted_at": { "$type": "null" } })
                    .name("email_unique_live".to_string())
                    .build(),
            )
            .build();

        // 목록 정렬용
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1, "_id": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::StoreError(format!("인덱스 생성 실패: {}", e)))?;

        info!("✅ users 컬렉션 인덱스 준비 완료");
        Ok(())
    }

    async fn find_page(&self, filter: Document, page: PageRequest) -> AppResult<Page<User>> {
        let total = self
            .collection
            .count_documents(filter.clone())
            .await
            .map_err(store_error)?;

        let items: Vec<User> = self
            .collection
            .find(filter)
            .projection(public_projection())
            .sort(doc! { "created_at": -1, "_id": -1 })
            .skip(page.offset())
            .limit(page.limit as i64)
            .await
            .map_err(store_error)?
            .try_collect()
            .await
            .map_err(store_error)?;

        debug!("사용자 페이지 조회: page={} limit={} total={}", page.page, page.limit, total);

        Ok(Page::new(items, total))
    }

    async fn find_one_live(&self, filter: Document, with_hash: bool) -> AppResult<Option<User>> {
        let mut find = self.collection.find_one(live(filter));
        if !with_hash {
            find = find.projection(public_projection());
        }
        find.await.map_err(store_error)
    }

    async fn set_fields(&self, id: ObjectId, mut set: Document) -> AppResult<User> {
        set.insert("updated_at", DateTime::now());

        self.collection
            .find_one_and_update(live(doc! { "_id": id }), doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .projection(public_projection())
            .await
            .map_err(write_error)?
            .ok_or_else(|| AppError::NotFound(format!("user {}", id.to_hex())))
    }
}

/// 삭제되지 않은 문서만 대상으로 하도록 필터를 확장
fn live(mut filter: Document) -> Document {
    filter.insert("deleted_at", Bson::Null);
    filter
}

fn public_projection() -> Document {
    doc! { "password_hash": 0 }
}

/// `name` 또는 `email` 부분 일치 (대소문자 무시). keyword의 정규식 메타문자는 이스케이프됩니다.
fn search_filter(keyword: &str) -> Document {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return live(Document::new());
    }

    let pattern = regex::escape(keyword);
    live(doc! {
        "$or": [
            { "name": { "$regex": pattern.as_str(), "$options": "i" } },
            { "email": { "$regex": pattern.as_str(), "$options": "i" } },
        ]
    })
}

/// 변경 집합에서 `$set` 문서를 만듭니다. 없는 필드는 포함되지 않습니다.
fn set_document(changes: &UserChangeSet) -> Document {
    let mut set = Document::new();

    if let Some(name) = &changes.name {
        set.insert("name", name.as_str());
    }
    if let Some(email) = &changes.email {
        set.insert("email", email.as_str());
    }
    if let Some(hash) = &changes.password_hash {
        set.insert("password_hash", hash.as_str());
    }
    if let Some(active) = changes.active {
        set.insert("active", active);
    }
    if let Some(role) = changes.role {
        set.insert("role", role.as_str());
    }

    set
}

fn parse_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::NotFound(format!("user {}", id)))
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

fn store_error(error: mongodb::error::Error) -> AppError {
    AppError::StoreError(error.to_string())
}

/// 쓰기 에러 변환. unique 인덱스 위반은 `DuplicateEmail`로 구분합니다.
fn write_error(error: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&error) {
        AppError::DuplicateEmail("이미 사용 중인 이메일입니다".to_string())
    } else {
        store_error(error)
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        let now = DateTime::now();
        user.id = None;
        user.created_at = now;
        user.updated_at = now;
        user.deleted_at = None;

        let result = self
            .collection
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::DuplicateEmail(user.email.clone())
                } else {
                    store_error(e)
                }
            })?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::StoreError("inserted_id가 ObjectId가 아닙니다".to_string()))?;
        user.id = Some(id);

        Ok(user.without_password())
    }

    async fn read(&self, page: PageRequest) -> AppResult<Page<User>> {
        self.find_page(live(Document::new()), page).await
    }

    async fn read_by_id(&self, id: &str) -> AppResult<User> {
        let object_id = parse_id(id)?;

        self.find_one_live(doc! { "_id": object_id }, false)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {}", id)))
    }

    async fn read_by_email_public(&self, email: &str) -> AppResult<User> {
        self.find_one_live(doc! { "email": email }, false)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {}", email)))
    }

    async fn read_by_email_private(&self, email: &str) -> AppResult<User> {
        self.find_one_live(doc! { "email": email }, true)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {}", email)))
    }

    async fn search(&self, page: PageRequest, keyword: &str) -> AppResult<Page<User>> {
        self.find_page(search_filter(keyword), page).await
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let id = user
            .id
            .ok_or_else(|| AppError::NotFound("user without id".to_string()))?;

        let mut set = doc! {
            "name": user.name.as_str(),
            "email": user.email.as_str(),
            "active": user.active,
            "role": user.role.as_str(),
        };
        if let Some(hash) = &user.password_hash {
            set.insert("password_hash", hash.as_str());
        }

        self.set_fields(id, set).await
    }

    async fn update_fields(&self, id: &str, changes: UserChangeSet) -> AppResult<User> {
        let object_id = parse_id(id)?;
        self.set_fields(object_id, set_document(&changes)).await
    }

    async fn soft_delete(&self, id: &str) -> AppResult<()> {
        let object_id = parse_id(id)?;
        let now = DateTime::now();

        let result = self
            .collection
            .update_one(
                live(doc! { "_id": object_id }),
                doc! { "$set": { "deleted_at": now, "updated_at": now } },
            )
            .await
            .map_err(store_error)?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("user {}", id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Role;

    #[test]
    fn test_live_filter_adds_deleted_at_null() {
        let filter = live(doc! { "email": "a@b.c" });
        assert_eq!(filter.get("deleted_at"), Some(&Bson::Null));
        assert_eq!(filter.get_str("email").unwrap(), "a@b.c");
    }

    #[test]
    fn test_search_filter_escapes_regex() {
        let filter = search_filter(" a.b+ ");
        let or = filter.get_array("$or").unwrap();
        let name = or[0].as_document().unwrap().get_document("name").unwrap();

        assert_eq!(name.get_str("$regex").unwrap(), r"a\.b\+");
        assert_eq!(name.get_str("$options").unwrap(), "i");
        assert_eq!(filter.get("deleted_at"), Some(&Bson::Null));
    }

    #[test]
    fn test_blank_search_is_unfiltered() {
        let filter = search_filter("   ");
        assert!(!filter.contains_key("$or"));
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn test_set_document_only_present_fields() {
        let changes = UserChangeSet {
            active: Some(false),
            role: Some(Role::Admin),
            ..Default::default()
        };
        let set = set_document(&changes);

        assert_eq!(set.len(), 2);
        assert!(!set.get_bool("active").unwrap());
        assert_eq!(set.get_str("role").unwrap(), "ADMIN");
        assert!(!set.contains_key("name"));
        assert!(!set.contains_key("password_hash"));
    }

    #[test]
    fn test_malformed_id_is_not_found() {
        assert!(matches!(parse_id("xyz"), Err(AppError::NotFound(_))));
        assert!(parse_id(&ObjectId::new().to_hex()).is_ok());
    }
}
