//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! Spring Framework의 UserService 패턴을 참고하여 설계되었으며,
//! 가입, 로그인, 목록/검색, 부분 수정, soft delete를 제공합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        UserService                        │
//! │                                                           │
//! │  register ─┐   login ─┐    read/search ─┐   update ─┐     │
//! │            ▼          ▼                 ▼           ▼     │
//! │   PasswordService  TokenService                           │
//! └──────────────────────────┬────────────────────────────────┘
//!                            │  (모든 호출에 타임아웃 적용)
//!                            ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │              dyn UserStore (Mongo | InMemory)             │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 가입과 비밀번호 변경 시 항상 새 salt로 해싱
//! - **계정 상태 우선 확인**: 로그인 시 비활성 계정은 비밀번호 검증 전에 거부
//! - **민감 정보 제거**: 반환되는 사용자는 항상 해시가 비어 있음
//! - **무상태 인증**: 서버 측 세션 없이 토큰 자체가 세션

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use actix_web::rt::time::timeout;
use log::{debug, info, warn};

use crate::config::Role;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use crate::domain::models::page::{Page, PageRequest};
use crate::domain::models::token::IssuedToken;
use crate::domain::models::users::{UpdateUserPayload, UserChangeSet};
use crate::repositories::users::UserStore;
use crate::services::auth::{PasswordService, TokenService};
use crate::utils::string_utils::to_title_case;

/// 사용자 유스케이스
///
/// 공유 가변 상태가 없으며, 주입된 핸들은 모두 `Send + Sync`입니다.
pub struct UserService {
    store: Arc<dyn UserStore>,
    passwords: Arc<PasswordService>,
    tokens: Arc<TokenService>,
    store_timeout: Duration,
}

impl UserService {
    pub fn new(
        store: Arc<dyn UserStore>,
        passwords: Arc<PasswordService>,
        tokens: Arc<TokenService>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            store,
            passwords,
            tokens,
            store_timeout,
        }
    }

    /// 저장소 호출에 기한을 적용합니다. 기한을 넘기면 `StoreError`.
    async fn bounded<T, F>(&self, operation: &str, call: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        match timeout(self.store_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(AppError::StoreError(format!(
                "{} 저장소 호출이 {:?} 안에 끝나지 않았습니다",
                operation, self.store_timeout
            ))),
        }
    }

    /// 회원가입
    ///
    /// 새 계정은 활성 상태로 만들어집니다.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> AppResult<User> {
        let start_time = std::time::Instant::now();

        let password_hash = self.passwords.hash(password).await?;
        let user = User::new(name.to_string(), email.to_string(), password_hash, role);

        let created = self.bounded("create", self.store.create(user)).await?;

        info!(
            "사용자 등록 완료: id={} role={} ({:?})",
            created.id_string(),
            created.role.as_str(),
            start_time.elapsed()
        );

        Ok(created.without_password())
    }

    /// 로그인
    ///
    /// 1. 이메일로 사용자 조회 (`NotFound`)
    /// 2. 비활성 계정 거부 (`InactiveAccount`), 비밀번호 확인보다 먼저
    /// 3. 비밀번호 검증 (`WrongPassword`)
    /// 4. 액세스 토큰 발급
    pub async fn login(&self, email: &str, password: &str) -> AppResult<IssuedToken> {
        let user = self
            .bounded("read_by_email_private", self.store.read_by_email_private(email))
            .await
            .inspect_err(|e| {
                if matches!(e, AppError::NotFound(_)) {
                    warn!("로그인 실패: 존재하지 않는 이메일");
                }
            })?;

        if !user.active {
            warn!("로그인 실패: 비활성 계정 id={}", user.id_string());
            return Err(AppError::InactiveAccount(format!("user {}", user.id_string())));
        }

        let hash = user.password_hash.as_deref().unwrap_or_default();
        if let Err(e) = self.passwords.verify(hash, password).await {
            warn!("로그인 실패: 비밀번호 불일치 id={}", user.id_string());
            return Err(e);
        }

        let token = self.tokens.issue(&user.id_string(), &user.email, user.role)?;
        debug!("토큰 발급: id={}", user.id_string());

        Ok(token)
    }

    /// 살아있는 사용자 목록 (최신순)
    pub async fn read(&self, page: PageRequest) -> AppResult<Page<User>> {
        self.bounded("read", self.store.read(page)).await
    }

    /// `name` 또는 `email` 부분 일치 검색. 빈 keyword는 전체 목록입니다.
    pub async fn search(&self, page: PageRequest, keyword: &str) -> AppResult<Page<User>> {
        self.bounded("search", self.store.search(page, keyword)).await
    }

    /// 단건 조회. 표시 이름은 단어별 첫 글자 대문자로 정규화됩니다.
    pub async fn read_by_id(&self, id: &str) -> AppResult<User> {
        let mut user = self.bounded("read_by_id", self.store.read_by_id(id)).await?;
        user.name = to_title_case(&user.name);
        Ok(user.without_password())
    }

    /// 부분 수정
    ///
    /// 요청에 있는 필드만 반영합니다. 아무 필드도 없으면 현재 레코드를 그대로 돌려줍니다.
    pub async fn update(&self, payload: UpdateUserPayload) -> AppResult<User> {
        let current = self
            .bounded("read_by_id", self.store.read_by_id(&payload.id))
            .await?;

        let UpdateUserPayload {
            id,
            name,
            email,
            password,
            active,
            role,
        } = payload;

        let password_hash = match password {
            Some(plain) => Some(self.passwords.hash(&plain).await?),
            None => None,
        };

        let changes = UserChangeSet {
            name,
            email,
            password_hash,
            active,
            role,
        };

        if changes.is_empty() {
            debug!("변경 사항 없음: id={}", id);
            return Ok(current.without_password());
        }

        let updated = self
            .bounded("update_fields", self.store.update_fields(&id, changes))
            .await?;

        info!("사용자 수정 완료: id={}", id);
        Ok(updated.without_password())
    }

    /// soft delete
    pub async fn soft_delete(&self, id: &str) -> AppResult<()> {
        self.bounded("soft_delete", self.store.soft_delete(id)).await?;
        info!("사용자 삭제 완료: id={}", id);
        Ok(())
    }
}
