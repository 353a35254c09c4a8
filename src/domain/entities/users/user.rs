//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! MongoDB `users` 컬렉션의 문서 구조와 1:1로 대응합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::config::Role;

/// 사용자 엔티티
///
/// `deleted_at`이 `Some`이면 soft delete 된 사용자이며,
/// 모든 조회 연산에서 제외됩니다.
///
/// `password_hash`는 공개 프로젝션으로 읽은 경우 항상 `None`입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일 (삭제되지 않은 사용자 사이에서 unique)
    pub email: String,
    /// bcrypt 해시
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// 계정 활성화 여부
    pub active: bool,
    /// 사용자 역할
    pub role: Role,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
    /// 삭제 시간. 살아있는 문서는 `null`로 저장되어 부분 unique 인덱스의 대상이 됩니다.
    #[serde(default)]
    pub deleted_at: Option<DateTime>,
}

impl User {
    /// 새 사용자 생성
    ///
    /// `id`는 저장소가 부여합니다. 생성/수정 시간은 호출 시점으로 초기화되며
    /// 저장소가 다시 덮어쓸 수 있습니다.
    pub fn new(name: String, email: String, password_hash: String, role: Role) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password_hash: Some(password_hash),
            active: true,
            role,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_hex()).unwrap_or_default()
    }

    /// soft delete 여부
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// 해시를 제거한 사본을 반환합니다.
    pub fn without_password(mut self) -> Self {
        self.password_hash = None;
        self
    }
}
