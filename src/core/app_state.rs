//! # Application State
//!
//! 애플리케이션이 공유하는 서비스 인스턴스를 한곳에서 조립합니다.
//! 전역 컨테이너 대신 생성자 주입으로 의존성을 연결하고,
//! 완성된 인스턴스를 `web::Data`로 actix 앱에 등록합니다.
//!
//! ## 의존성 그래프
//!
//! ```text
//! AppState
//! ├── web::Data<UserService>
//! │   ├── Arc<dyn UserStore>      (Mongo 또는 InMemory)
//! │   ├── Arc<PasswordService>
//! │   └── Arc<TokenService> ──┐
//! └── web::Data<TokenService> ◄┘  (인증 미들웨어가 app_data에서 조회)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let state = AppState::new(store, PasswordService::from_env(), TokenService::new(settings), timeout);
//!
//! HttpServer::new(move || {
//!     let state = state.clone();
//!     App::new()
//!         .configure(|cfg| state.configure(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```

use std::sync::Arc;
use std::time::Duration;

use actix_web::web;

use crate::repositories::users::UserStore;
use crate::services::auth::{PasswordService, TokenService};
use crate::services::users::UserService;

/// 워커 간에 공유되는 서비스 핸들 묶음
#[derive(Clone)]
pub struct AppState {
    pub users: web::Data<UserService>,
    pub tokens: web::Data<TokenService>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn UserStore>,
        passwords: PasswordService,
        tokens: TokenService,
        store_timeout: Duration,
    ) -> Self {
        let tokens = Arc::new(tokens);
        let users = UserService::new(store, Arc::new(passwords), tokens.clone(), store_timeout);

        Self {
            users: web::Data::new(users),
            tokens: web::Data::from(tokens),
        }
    }

    /// 핸들러와 미들웨어가 꺼내 쓸 수 있도록 `app_data`에 등록합니다.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.users.clone())
            .app_data(self.tokens.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{JwtSettings, Role};
    use crate::repositories::users::InMemoryUserRepository;

    #[actix_web::test]
    async fn test_services_share_token_settings() {
        let state = AppState::new(
            Arc::new(InMemoryUserRepository::new()),
            PasswordService::new(4),
            TokenService::new(JwtSettings::new("state-secret", 2, "user_service")),
            Duration::from_secs(1),
        );

        state
            .users
            .register("Kim", "kim@example.com", "secret123", Role::User)
            .await
            .unwrap();
        let token = state.users.login("kim@example.com", "secret123").await.unwrap();

        // 미들웨어가 쓰는 TokenService로 검증 가능해야 한다
        let claims = state.tokens.validate(&token.access_token).unwrap();
        assert_eq!(claims.email, "kim@example.com");
        assert_eq!(token.expires_in, 2 * 3600);
    }
}
