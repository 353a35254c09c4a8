//! 패스워드 해싱 서비스
//!
//! bcrypt로 비밀번호를 해싱하고 검증합니다. cost는 시작 시 한 번 정해집니다.
//! bcrypt는 CPU를 오래 점유하므로 actix 워커가 아니라 blocking 스레드 풀에서 실행합니다.

use std::time::Instant;

use actix_web::web;
use log::debug;

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};

/// bcrypt 해싱 서비스
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// `BCRYPT_COST` 또는 실행 환경의 기본값으로 생성
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 평문 비밀번호를 salt가 포함된 bcrypt 해시로 변환합니다.
    pub async fn hash(&self, plaintext: &str) -> AppResult<String> {
        let start = Instant::now();
        let cost = self.cost;
        let plaintext = plaintext.to_owned();

        let hashed = web::block(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| AppError::HashingError(format!("해싱 작업 실행 실패: {}", e)))?
            .map_err(|e| AppError::HashingError(format!("비밀번호 해싱 실패: {}", e)))?;

        debug!("bcrypt 해싱 완료 (cost={}): {:?}", cost, start.elapsed());
        Ok(hashed)
    }

    /// 해시와 평문을 비교합니다.
    ///
    /// 불일치와 손상된 해시 모두 `WrongPassword`입니다.
    pub async fn verify(&self, hashed: &str, plaintext: &str) -> AppResult<()> {
        let hashed = hashed.to_owned();
        let plaintext = plaintext.to_owned();

        let outcome = web::block(move || bcrypt::verify(plaintext, &hashed))
            .await
            .map_err(|e| AppError::HashingError(format!("검증 작업 실행 실패: {}", e)))?;

        match outcome {
            Ok(true) => Ok(()),
            Ok(false) => Err(AppError::WrongPassword),
            Err(e) => {
                debug!("bcrypt 검증 실패: {}", e);
                Err(AppError::WrongPassword)
            }
        }
    }
}
