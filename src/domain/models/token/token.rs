//! JWT 클레임 및 발급 결과
//!
//! RFC 7519 표준 클레임과 애플리케이션 클레임(`email`, `role`)을 정의합니다.
use serde::{Deserialize, Serialize};

use crate::config::Role;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `email`: 발급 시점의 사용자 이메일
/// - `role`: 사용자 역할 (`USER` | `ADMIN` | `SUPER`)
/// - `iat`, `nbf`: 발급 시간 (Unix timestamp)
/// - `exp`: 만료 시간 (Unix timestamp)
/// - `iss`: 발급자
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 사용자 이메일
    pub email: String,
    /// 사용자 역할
    pub role: Role,
    /// 토큰 발급 시간
    pub iat: i64,
    /// 이 시간 이전에는 사용 불가
    pub nbf: i64,
    /// 토큰 만료 시간
    pub exp: i64,
    /// 발급자
    pub iss: String,
}

/// 로그인 성공 시 클라이언트에 전달되는 토큰
///
/// OAuth 2.0 토큰 응답 형식을 따릅니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// 액세스 토큰
    pub access_token: String,
    /// 항상 `"Bearer"`
    pub token_type: String,
    /// 액세스 토큰 만료까지 남은 시간 (초)
    pub expires_in: i64,
}
