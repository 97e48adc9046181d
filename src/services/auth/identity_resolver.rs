//! # Identity Resolver
//!
//! 세 가지 로그인 증명을 하나의 정규화된 사용자 레코드로 변환합니다.
//!
//! | 증명 | 처리 |
//! |------|------|
//! | `AuthProof::Local` | 사용자명 조회 → bcrypt 검증. 실패 사유와 관계없이 `InvalidCredentials` |
//! | `AuthProof::OAuth` | `find_or_create_by_provider`. 회원가입 없이 계정이 생기는 유일한 경로 |
//! | `register` | 사용자명 중복 시 `UsernameTaken`, 아니면 해싱 후 생성 |
//!
//! 로컬 로그인은 "조회 후 검증"만 수행합니다. 저장되지 않은 레코드로 로그인하는 경로는 없습니다.

use std::sync::Arc;
use crate::core::{AppError, AppResult};
use crate::domain::entities::users::User;
use crate::domain::models::auth::AuthProof;
use crate::repositories::users::UserStore;
use crate::services::auth::password::PasswordHasher;

pub struct IdentityResolver {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl IdentityResolver {
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// 인증 증명을 사용자 레코드로 변환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 인증 성공 (OAuth는 필요 시 생성된 레코드)
    /// * `Err(AppError::InvalidCredentials)` - 로컬 로그인 실패
    /// * `Err(AppError::StoreError)` - 저장소 장애
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let user = resolver
    ///     .resolve(AuthProof::OAuth { provider: AuthProvider::Google, subject_id: sub })
    ///     .await?;
    /// ```
    pub async fn resolve(&self, proof: AuthProof) -> AppResult<User> {
        match proof {
            AuthProof::Local { username, password } => self.resolve_local(&username, &password).await,
            AuthProof::OAuth { provider, subject_id } => {
                if subject_id.trim().is_empty() {
                    return Err(AppError::OAuthFailure(format!("{} returned an empty subject id", provider)));
                }
                let user = self
                    .users
                    .find_or_create_by_provider(provider, &subject_id)
                    .await?;
                log::info!("OAuth 로그인 성공 - provider: {}, user_id: {:?}", provider, user.id_string());
                Ok(user)
            }
        }
    }

    async fn resolve_local(&self, username: &str, password: &str) -> AppResult<User> {
        let Some(user) = self.users.find_by_username(username).await? else {
            self.hasher.burn_verification(password).await;
            log::info!("로컬 로그인 실패 (알 수 없는 사용자)");
            return Err(AppError::InvalidCredentials);
        };

        let Some(password_hash) = user.password_hash.as_deref() else {
            self.hasher.burn_verification(password).await;
            log::info!("로컬 로그인 실패 (비밀번호 없는 계정) - user_id: {:?}", user.id_string());
            return Err(AppError::InvalidCredentials);
        };

        if !self.hasher.verify(password, password_hash).await? {
            log::info!("로컬 로그인 실패 (비밀번호 불일치) - user_id: {:?}", user.id_string());
            return Err(AppError::InvalidCredentials);
        }

        log::info!("로컬 로그인 성공 - user_id: {:?}", user.id_string());
        Ok(user)
    }

    /// 로컬 계정을 생성합니다. 호출자는 성공 시 곧바로 세션을 수립해야 합니다.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<User> {
        let start_time = std::time::Instant::now();

        if self.users.find_by_username(username).await?.is_some() {
            log::info!("회원가입 거부 (사용자명 중복)");
            return Err(AppError::UsernameTaken(username.to_string()));
        }

        let password_hash = self.hasher.hash(password).await?;
        let created = self
            .users
            .create(User::new_local(username.to_string(), password_hash))
            .await?;

        log::info!(
            "회원가입 완료 - user_id: {:?}, took: {:?}",
            created.id_string(),
            start_time.elapsed()
        );
        Ok(created)
    }
}
