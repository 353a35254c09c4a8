//! # 사용자 부분 수정 요청 DTO
//!
//! 모든 필드가 선택사항입니다. 본문에 없는 필드는 변경되지 않고,
//! 있는 필드만 검증 후 반영됩니다.
//!
//! ```json
//! { "active": false }
//! ```

use serde::Deserialize;
use validator::Validate;

use crate::config::Role;
use crate::domain::models::users::UpdateUserPayload;

/// 사용자 부분 수정 요청
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: Option<String>,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: Option<String>,

    pub active: Option<bool>,

    pub role: Option<Role>,
}

impl UpdateUserRequest {
    /// 권한 관련 필드(`role`, `active`)가 포함되어 있는지 확인
    pub fn touches_privileges(&self) -> bool {
        self.role.is_some() || self.active.is_some()
    }

    /// 대상 ID와 함께 유스케이스 입력으로 변환합니다.
    pub fn into_payload(self, id: impl Into<String>) -> UpdateUserPayload {
        UpdateUserPayload {
            id: id.into(),
            name: self.name.map(|n| n.trim().to_string()),
            email: self.email,
            password: self.password,
            active: self.active,
            role: self.role,
        }
    }
}
