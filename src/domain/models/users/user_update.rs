//! 사용자 부분 수정 모델
//!
//! 요청에 실제로 들어온 필드만 `Some`으로 표현합니다.
//! `None`은 "변경하지 않음"이며, 명시적인 `Some(false)`는 비활성화입니다.

use mongodb::bson::DateTime;

use crate::config::Role;
use crate::domain::entities::users::user::User;

/// 유스케이스에 전달되는 부분 수정 요청
///
/// 요청마다 전송 계층에서 만들어지고, `UserService::update`가 한 번 소비합니다.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserPayload {
    /// 수정 대상 사용자 ID
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    /// 평문 비밀번호. 유스케이스에서 해시로 바뀝니다.
    pub password: Option<String>,
    pub active: Option<bool>,
    pub role: Option<Role>,
}

impl UpdateUserPayload {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// 저장소에 전달되는 변경 집합
///
/// 비밀번호는 이미 해시된 상태입니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChangeSet {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub active: Option<bool>,
    pub role: Option<Role>,
}

impl UserChangeSet {
    /// 변경할 필드가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.active.is_none()
            && self.role.is_none()
    }

    /// 있는 필드만 덮어쓰고 `updated_at`을 갱신합니다.
    pub fn apply_to(&self, user: &mut User, now: DateTime) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(hash) = &self.password_hash {
            user.password_hash = Some(hash.clone());
        }
        if let Some(active) = self.active {
            user.active = active;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        user.updated_at = now;
    }
}
