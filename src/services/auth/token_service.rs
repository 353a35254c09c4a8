//! JWT 토큰 관리 서비스 구현
//!
//! HS256으로 서명된 액세스 토큰을 발급하고 검증합니다.
//! 역할 비교는 하지 않습니다. 그것은 인증 미들웨어의 몫입니다.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::{JwtSettings, Role};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::models::token::{IssuedToken, TokenClaims};

/// JWT 발급/검증 서비스
///
/// 서명 키는 생성 시 한 번 만들어지고 이후 읽기 전용입니다.
pub struct TokenService {
    settings: JwtSettings,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(settings: JwtSettings) -> Self {
        let encoding_key = EncodingKey::from_secret(settings.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(settings.secret.as_bytes());

        // HS256 이외의 알고리즘은 거부
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_nbf = true;
        validation.set_issuer(&[settings.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "nbf", "iat", "sub", "iss"]);

        Self {
            settings,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// 액세스 토큰을 발급합니다.
    pub fn issue(&self, subject_id: &str, email: &str, role: Role) -> AppResult<IssuedToken> {
        let now = Utc::now().timestamp();
        let expires_in = self.settings.expires_in_seconds();

        let claims = TokenClaims {
            sub: subject_id.to_string(),
            email: email.to_string(),
            role,
            iat: now,
            nbf: now,
            exp: now + expires_in,
            iss: self.settings.issuer.clone(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("JWT 토큰 생성 실패")?;

        Ok(IssuedToken {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        })
    }

    /// 서명, 알고리즘, 발급자, 유효 기간을 검증하고 클레임을 돌려줍니다.
    pub fn validate(&self, token: &str) -> AppResult<TokenClaims> {
        use jsonwebtoken::errors::ErrorKind;

        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => "토큰이 만료되었습니다",
                    ErrorKind::ImmatureSignature => "아직 사용할 수 없는 토큰입니다",
                    ErrorKind::InvalidSignature => "토큰 서명이 올바르지 않습니다",
                    ErrorKind::InvalidAlgorithm => "허용되지 않은 서명 알고리즘입니다",
                    ErrorKind::InvalidIssuer => "토큰 발급자가 올바르지 않습니다",
                    _ => "유효하지 않은 토큰입니다",
                };
                AppError::Unauthenticated(reason.to_string())
            })
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다. 스킴 이름은 대소문자를 구분하지 않습니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        let header = auth_header.trim();

        match header.split_once(' ') {
            Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
                Ok(token.trim())
            }
            _ => Err(AppError::Unauthenticated(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            )),
        }
    }
}
