//! bcrypt 비밀번호 해싱
//!
//! bcrypt는 CPU를 오래 쓰는 연산이므로 actix 블로킹 스레드 풀에서 실행합니다.
//! 비교는 bcrypt 내부의 상수 시간 비교를 사용하며, 평문 비밀번호를 직접 비교하지 않습니다.

use std::sync::Arc;
use std::time::Instant;
use actix_web::rt::task::spawn_blocking;
use crate::core::{AppError, AppResult};

#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    /// 존재하지 않는 사용자 로그인 시 비교 대상으로 쓰는 해시
    dummy_hash: Arc<str>,
}

impl PasswordHasher {
    /// 주어진 비용으로 해셔를 생성합니다.
    ///
    /// 생성 시 더미 해시를 한 번 계산하므로 비용이 높으면 수백 ms가 걸릴 수 있습니다.
    pub fn new(cost: u32) -> AppResult<Self> {
        let dummy_hash = bcrypt::hash("dummy-password-for-timing", cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        Ok(Self {
            cost,
            dummy_hash: Arc::from(dummy_hash),
        })
    }

    /// 평문 비밀번호를 salt가 포함된 bcrypt 해시로 변환합니다.
    pub async fn hash(&self, password: &str) -> AppResult<String> {
        let password = password.to_string();
        let cost = self.cost;
        let hash_start = Instant::now();

        let hashed = spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("해싱 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(hashed)
    }

    /// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    pub async fn verify(&self, password: &str, password_hash: &str) -> AppResult<bool> {
        let password = password.to_string();
        let password_hash = password_hash.to_string();
        let verify_start = Instant::now();

        let is_valid = spawn_blocking(move || bcrypt::verify(password, &password_hash))
            .await
            .map_err(|e| AppError::InternalError(format!("검증 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        log::debug!("Password verification took: {:?}", verify_start.elapsed());
        Ok(is_valid)
    }

    /// 더미 해시와 비교하여 사용자가 없을 때도 같은 시간을 소모합니다.
    pub async fn burn_verification(&self, password: &str) {
        let dummy = self.dummy_hash.to_string();
        if let Err(e) = self.verify(password, &dummy).await {
            log::warn!("더미 검증 실패: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_hash_then_verify() {
        let hasher = PasswordHasher::new(4).unwrap();
        let hash = hasher.hash("correct horse").await.unwrap();

        assert_ne!(hash, "correct horse");
        assert!(hasher.verify("correct horse", &hash).await.unwrap());
        assert!(!hasher.verify("battery staple", &hash).await.unwrap());
    }

    #[actix_web::test]
    async fn test_same_password_gets_different_salts() {
        let hasher = PasswordHasher::new(4).unwrap();
        let first = hasher.hash("pw").await.unwrap();
        let second = hasher.hash("pw").await.unwrap();

        assert_ne!(first, second);
    }
}
