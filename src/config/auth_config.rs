//! # Authentication Configuration Module
//!
//! JWT 토큰 서명 설정과 사용자 역할(Role) 정의를 관리하는 모듈입니다.
//! Spring Security의 JWT 설정과 `GrantedAuthority` 개념과 유사한 역할을 수행합니다.
//!
//! ## Spring Security 와의 비교
//!
//! | Spring Security | 이 모듈 |
//! |-----------------|---------|
//! | `jwt.secret` | `JwtConfig::secret()` |
//! | `jwt.expiration` | `JwtConfig::expiration_hours()` |
//! | `GrantedAuthority` | `Role` |
//! | `@PreAuthorize("hasRole('ADMIN')")` | `AuthMiddleware::required_with_roles(..)` |
//!
//! ## 필수 환경 변수 설정
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export JWT_ISSUER="user_service"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{JwtSettings, Role};
//!
//! // 프로세스 시작 시 한 번만 로드
//! let settings = JwtSettings::from_env();
//!
//! // 역할 파싱
//! let role = Role::from_str("admin")?;
//! assert!(role.is_admin());
//! ```

use std::env;
use serde::{Deserialize, Serialize};

/// 액세스 토큰 최소 유효 시간 (시간 단위)
pub const MIN_EXPIRATION_HOURS: i64 = 1;

/// 액세스 토큰 최대 유효 시간 (1년)
pub const MAX_EXPIRATION_HOURS: i64 = 24 * 365;

const DEFAULT_EXPIRATION_HOURS: i64 = 24;

fn parse_expiration_hours(raw: Option<&str>) -> i64 {
    let hours = raw
        .and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_EXPIRATION_HOURS);

    let bounded = hours.clamp(MIN_EXPIRATION_HOURS, MAX_EXPIRATION_HOURS);
    if bounded != hours {
        log::warn!(
            "JWT_EXPIRATION_HOURS={} 범위 밖, {}시간으로 조정합니다",
            hours, bounded
        );
    }
    bounded
}

/// JWT 토큰 관련 환경 변수 리더
///
/// 각 메서드는 호출 시점의 환경 변수를 읽습니다.
/// 서비스 코드는 이 값을 직접 읽지 않고, 시작 시 한 번 만들어진
/// [`JwtSettings`]를 생성자로 전달받습니다.
///
/// ## 권장 설정값
///
/// - **개발**: 액세스 토큰 24시간
/// - **프로덕션**: 환경에 맞게 단축 (예: 1시간)
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 이 키는 JWT 토큰의 무결성을 보장하는 핵심 요소입니다.
    /// HS256 대칭키로 사용되므로 최소 32바이트 이상의 랜덤 값을 권장합니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 24시간
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export JWT_EXPIRATION_HOURS="1"
    /// ```
    ///
    /// 숫자가 아니면 24시간, 범위를 벗어나면
    /// [`MIN_EXPIRATION_HOURS`]..=[`MAX_EXPIRATION_HOURS`]로 맞춥니다.
    pub fn expiration_hours() -> i64 {
        parse_expiration_hours(env::var("JWT_EXPIRATION_HOURS").ok().as_deref())
    }

    /// 토큰 발급자(`iss` 클레임) 값을 반환합니다.
    ///
    /// 검증 시 동일한 값이 아니면 토큰을 거부합니다.
    ///
    /// # 기본값
    ///
    /// `"user_service"`
    pub fn issuer() -> String {
        env::var("JWT_ISSUER").unwrap_or_else(|_| "user_service".to_string())
    }
}

/// 프로세스 전역 JWT 설정 값
///
/// `main`에서 한 번 생성되어 [`TokenService`](crate::services::auth::TokenService)에
/// 전달되며, 이후에는 읽기 전용으로만 사용됩니다.
#[derive(Debug, Clone)]
pub struct JwtSettings {
    /// HS256 서명 비밀키
    pub secret: String,
    /// 액세스 토큰 유효 시간 (시간 단위)
    pub expiration_hours: i64,
    /// 토큰 발급자
    pub issuer: String,
}

impl JwtSettings {
    /// 명시적인 값으로 설정을 생성합니다.
    ///
    /// 유효 시간은 [`MIN_EXPIRATION_HOURS`]..=[`MAX_EXPIRATION_HOURS`] 범위로 맞춰집니다.
    pub fn new(secret: impl Into<String>, expiration_hours: i64, issuer: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours: expiration_hours.clamp(MIN_EXPIRATION_HOURS, MAX_EXPIRATION_HOURS),
            issuer: issuer.into(),
        }
    }

    /// 환경 변수에서 설정을 읽어옵니다.
    pub fn from_env() -> Self {
        Self::new(
            JwtConfig::secret(),
            JwtConfig::expiration_hours(),
            JwtConfig::issuer(),
        )
    }

    /// 액세스 토큰 유효 시간을 초 단위로 반환합니다.
    pub fn expires_in_seconds(&self) -> i64 {
        self.expiration_hours * 3600
    }
}

/// 사용자 역할
///
/// 권한 수준이 낮은 순서대로 `User` < `Admin` < `Super` 입니다.
/// JSON과 데이터베이스에는 대문자 문자열(`"USER"`, `"ADMIN"`, `"SUPER"`)로 저장됩니다.
///
/// ## 접근 제어
///
/// 역할 비교는 토큰 서비스가 아니라 인증 미들웨어에서 수행합니다.
/// 토큰 서비스는 클레임을 검증하고 디코딩만 합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// 일반 사용자 (자기 정보만 조회/수정)
    User,
    /// 관리자 (사용자 목록 조회, 수정, 삭제)
    Admin,
    /// 최고 관리자
    Super,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl Role {
    /// 문자열에서 Role을 생성합니다.
    ///
    /// # 인자
    ///
    /// * `s` - 역할 이름 (대소문자 무관, 앞뒤 공백 무시)
    ///
    /// # 반환값
    ///
    /// * `Ok(Role)` - 유효한 역할인 경우
    /// * `Err(String)` - 지원하지 않는 역할인 경우
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// use crate::config::Role;
    ///
    /// assert_eq!(Role::from_str("admin")?, Role::Admin);
    /// assert!(Role::from_str("owner").is_err());
    /// ```
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_uppercase().as_str() {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            "SUPER" => Ok(Role::Super),
            _ => Err(format!("Unsupported role: {}", s)),
        }
    }

    /// Role을 대문자 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
            Role::Super => "SUPER",
        }
    }

    /// 관리자 이상 권한인지 확인
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin | Role::Super)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_string() {
        assert_eq!(Role::from_str("user").unwrap(), Role::User);
        assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
        assert_eq!(Role::from_str(" Super ").unwrap(), Role::Super);

        // 지원하지 않는 역할
        assert!(Role::from_str("owner").is_err());
        assert!(Role::from_str("").is_err());
    }

    #[test]
    fn test_role_as_string() {
        assert_eq!(Role::User.as_str(), "USER");
        assert_eq!(Role::Admin.as_str(), "ADMIN");
        assert_eq!(Role::Super.as_str(), "SUPER");
    }

    #[test]
    fn test_role_ordering_and_admin_check() {
        assert!(Role::User < Role::Admin);
        assert!(Role::Admin < Role::Super);
        assert!(!Role::User.is_admin());
        assert!(Role::Admin.is_admin());
        assert!(Role::Super.is_admin());
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"ADMIN\"");

        let deserialized: Role = serde_json::from_str("\"SUPER\"").unwrap();
        assert_eq!(deserialized, Role::Super);
    }

    #[test]
    fn test_jwt_settings_expires_in_seconds() {
        let settings = JwtSettings::new("secret", 24, "issuer");
        assert_eq!(settings.expires_in_seconds(), 86_400);
    }

    #[test]
    fn test_expiration_hours_parsing_is_bounded() {
        assert_eq!(parse_expiration_hours(None), 24);
        assert_eq!(parse_expiration_hours(Some("abc")), 24);
        assert_eq!(parse_expiration_hours(Some(" 2 ")), 2);

        // 0 이하는 이미 만료된 토큰을 만든다
        assert_eq!(parse_expiration_hours(Some("0")), MIN_EXPIRATION_HOURS);
        assert_eq!(parse_expiration_hours(Some("-5")), MIN_EXPIRATION_HOURS);
        assert_eq!(
            parse_expiration_hours(Some("9223372036854775807")),
            MAX_EXPIRATION_HOURS
        );
    }

    #[test]
    fn test_jwt_settings_clamps_expiration() {
        let huge = JwtSettings::new("secret", i64::MAX, "issuer");
        assert_eq!(huge.expiration_hours, MAX_EXPIRATION_HOURS);
        assert_eq!(huge.expires_in_seconds(), MAX_EXPIRATION_HOURS * 3600);

        let expired = JwtSettings::new("secret", 0, "issuer");
        assert_eq!(expired.expires_in_seconds(), 3600);
    }
}
