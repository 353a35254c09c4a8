//! # 회원가입 요청 DTO
//!
//! ## 검증 규칙
//!
//! ### 이름 (`name`)
//! - 길이: 1-50자, 앞뒤 공백은 핸들러에서 제거
//!
//! ### 이메일 (`email`)
//! - RFC 5322 표준 이메일 형식 준수
//! - 중복 여부는 저장소의 unique 인덱스가 판정
//!
//! ### 비밀번호 (`password`)
//! - 최소 길이: 8자
//!
//! ### 역할 (`role`)
//! - 생략 시 `USER`
//! - `ADMIN`, `SUPER` 가입은 관리자 토큰이 있어야 허용 (핸들러에서 검사)
//!
//! ## 요청 예시
//!
//! ```json
//! {
//!   "name": "Kim Minsu",
//!   "email": "minsu@example.com",
//!   "password": "Secret123",
//!   "role": "USER"
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::Role;

/// 회원가입 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,

    #[serde(default)]
    pub role: Option<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"name":"kim","email":"kim@example.com","password":"Secret123"}"#,
        )
        .unwrap();

        assert!(req.validate().is_ok());
        assert!(req.role.is_none());
    }

    #[test]
    fn test_invalid_email_and_short_password() {
        let req = RegisterRequest {
            name: "kim".into(),
            email: "not-an-email".into(),
            password: "short".into(),
            role: None,
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_role_is_parsed_uppercase() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"name":"kim","email":"kim@example.com","password":"Secret123","role":"ADMIN"}"#,
        )
        .unwrap();
        assert_eq!(req.role, Some(Role::Admin));
    }
}
