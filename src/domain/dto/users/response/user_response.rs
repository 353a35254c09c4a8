use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Role;
use crate::domain::entities::users::user::User;
use crate::domain::models::page::{Page, PageRequest};
use crate::domain::models::token::IssuedToken;

/// 사용자 정보 응답
///
/// 비밀번호 해시는 어떤 경우에도 포함되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub active: bool,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn to_chrono(value: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            active,
            role,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            active,
            role,
            created_at: to_chrono(created_at),
            updated_at: to_chrono(updated_at),
        }
    }
}

/// 회원가입/수정 결과 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user: UserResponse,
    pub message: String,
}

impl CreateUserResponse {
    pub fn new(user: User, message: impl Into<String>) -> Self {
        Self {
            user: UserResponse::from(user),
            message: message.into(),
        }
    }
}

/// 로그인 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<IssuedToken> for LoginResponse {
    fn from(token: IssuedToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
        }
    }
}

/// 사용자 목록/검색 응답
///
/// `count`는 필터에 맞는 전체 건수, `total_page`는 `ceil(count / limit)`입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    pub count: u64,
    pub current_page: u64,
    pub total_page: u64,
}

impl UserListResponse {
    pub fn new(page: Page<User>, request: PageRequest) -> Self {
        let total_page = request.total_pages(page.total);
        let count = page.total;

        Self {
            users: page.items.into_iter().map(UserResponse::from).collect(),
            count,
            current_page: request.page,
            total_page,
        }
    }
}
