//! # Session Manager
//!
//! 인증이 끝난 사용자에게 불투명한 세션 참조값을 발급하고,
//! 이후 요청에서 그 값을 다시 사용자로 복원합니다.
//!
//! ## 상태 전이
//!
//! ```text
//! Anonymous ──(로그인/회원가입/OAuth 콜백)──▶ Authenticated ──(로그아웃)──▶ Anonymous
//! ```
//!
//! ## 세션 ID
//!
//! - UUIDv4 두 개(약 244비트 난수)를 base64url로 인코딩한 값입니다.
//! - 저장소 키로는 ID의 SHA-256 다이제스트만 사용합니다.
//! - 복원 시 사용자 레코드를 항상 저장소에서 다시 읽습니다.

use std::sync::Arc;
use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use sha2::{Digest, Sha256};
use uuid::Uuid;
use crate::config::SessionConfig;
use crate::core::{AppError, AppResult};
use crate::domain::entities::sessions::{AuthMethod, SessionRecord};
use crate::domain::entities::users::User;
use crate::domain::models::auth::{CurrentUser, SessionState};
use crate::repositories::sessions::SessionStore;
use crate::repositories::users::UserStore;

/// base64url로 인코딩된 32바이트 값의 길이
const SESSION_ID_LEN: usize = 43;

/// 발급된 세션
#[derive(Debug, Clone)]
pub struct SessionTicket {
    pub session_id: String,
    pub user_id: String,
}

pub struct SessionManager {
    sessions: Arc<dyn SessionStore>,
    users: Arc<dyn UserStore>,
    config: SessionConfig,
}

impl SessionManager {
    pub fn new(sessions: Arc<dyn SessionStore>, users: Arc<dyn UserStore>, config: SessionConfig) -> Self {
        Self { sessions, users, config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn cookie_name(&self) -> &str {
        &self.config.cookie_name
    }

    fn generate_session_id() -> String {
        let mut bytes = [0u8; 32];
        bytes[..16].copy_from_slice(Uuid::new_v4().as_bytes());
        bytes[16..].copy_from_slice(Uuid::new_v4().as_bytes());
        URL_SAFE_NO_PAD.encode(bytes)
    }

    /// 세션 ID → 저장소 키
    fn storage_key(session_id: &str) -> String {
        format!("{:x}", Sha256::digest(session_id.as_bytes()))
    }

    /// 발급 형식과 다른 값은 저장소 조회 없이 거부합니다.
    fn is_well_formed(session_id: &str) -> bool {
        session_id.len() == SESSION_ID_LEN
            && session_id
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    }

    /// 사용자에게 새 세션을 발급합니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let ticket = session_manager.establish(&user, AuthMethod::Local).await?;
    /// let cookie = session_manager.build_cookie(&ticket);
    /// ```
    pub async fn establish(&self, user: &User, auth_method: AuthMethod) -> AppResult<SessionTicket> {
        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("저장되지 않은 사용자에게 세션을 발급할 수 없습니다".to_string()))?;

        let session_id = Self::generate_session_id();
        let record = SessionRecord::new(user_id.clone(), auth_method);

        self.sessions
            .put(&Self::storage_key(&session_id), &record, self.config.ttl_seconds)
            .await?;

        log::info!("세션 발급 - user_id: {}, method: {:?}", user_id, auth_method);
        Ok(SessionTicket { session_id, user_id })
    }

    /// 세션 참조값을 현재 사용자로 복원합니다.
    ///
    /// 세션이 없거나, 만료되었거나, 가리키는 사용자가 사라졌으면 `Anonymous`입니다.
    /// 저장소 장애는 에러로 전파합니다.
    pub async fn resolve(&self, session_id: &str) -> AppResult<SessionState> {
        if !Self::is_well_formed(session_id) {
            return Ok(SessionState::Anonymous);
        }

        let key = Self::storage_key(session_id);
        let Some(record) = self.sessions.get(&key).await? else {
            return Ok(SessionState::Anonymous);
        };

        match self.users.find_by_id(&record.user_id).await? {
            Some(user) => Ok(SessionState::Authenticated(CurrentUser {
                user_id: record.user_id,
                session_id: session_id.to_string(),
                auth_method: record.auth_method,
                user,
            })),
            None => {
                log::warn!("세션이 존재하지 않는 사용자를 가리킴 - user_id: {}", record.user_id);
                self.sessions.delete(&key).await?;
                Ok(SessionState::Anonymous)
            }
        }
    }

    /// 세션을 무효화합니다. 이후 같은 참조값은 익명으로 취급됩니다.
    pub async fn invalidate(&self, session_id: &str) -> AppResult<()> {
        if !Self::is_well_formed(session_id) {
            return Ok(());
        }
        self.sessions.delete(&Self::storage_key(session_id)).await?;
        log::info!("세션 무효화 완료");
        Ok(())
    }

    /// 세션 쿠키를 만듭니다 (HttpOnly, SameSite=Lax, Path=/).
    pub fn build_cookie(&self, ticket: &SessionTicket) -> Cookie<'static> {
        Cookie::build(self.config.cookie_name.clone(), ticket.session_id.clone())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.config.secure_cookie)
            .max_age(CookieDuration::seconds(self.config.ttl_seconds as i64))
            .finish()
    }

    /// 클라이언트의 세션 쿠키를 지우는 쿠키
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(self.config.cookie_name.clone(), "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.config.secure_cookie)
            .finish();
        cookie.make_removal();
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProvider;
    use crate::repositories::sessions::InMemorySessionStore;
    use crate::repositories::users::InMemoryUserStore;

    fn manager() -> (SessionManager, Arc<InMemoryUserStore>, Arc<InMemorySessionStore>) {
        let users = Arc::new(InMemoryUserStore::new());
        let sessions = Arc::new(InMemorySessionStore::new());
        let manager = SessionManager::new(sessions.clone(), users.clone(), SessionConfig::default());
        (manager, users, sessions)
    }

    #[test]
    fn test_session_ids_are_unique_and_well_formed() {
        let first = SessionManager::generate_session_id();
        let second = SessionManager::generate_session_id();

        assert_ne!(first, second);
        assert_eq!(first.len(), SESSION_ID_LEN);
        assert!(SessionManager::is_well_formed(&first));
        assert!(!SessionManager::is_well_formed("short"));
        assert!(!SessionManager::is_well_formed(&"!".repeat(SESSION_ID_LEN)));
    }

    #[test]
    fn test_storage_key_is_not_the_session_id() {
        let session_id = SessionManager::generate_session_id();
        let key = SessionManager::storage_key(&session_id);

        assert_eq!(key.len(), 64);
        assert_ne!(key, session_id);
    }

    #[actix_web::test]
    async fn test_establish_resolve_invalidate() {
        let (manager, users, _) = manager();
        let user = users
            .find_or_create_by_provider(AuthProvider::Google, "g-1")
            .await
            .unwrap();

        let ticket = manager.establish(&user, AuthMethod::Google).await.unwrap();
        let state = manager.resolve(&ticket.session_id).await.unwrap();
        let current = state.current_user().expect("authenticated");
        assert_eq!(Some(current.user_id.clone()), user.id_string());
        assert_eq!(current.auth_method, AuthMethod::Google);

        manager.invalidate(&ticket.session_id).await.unwrap();
        let state = manager.resolve(&ticket.session_id).await.unwrap();
        assert!(!state.is_authenticated());
    }

    #[actix_web::test]
    async fn test_resolve_always_refetches_user() {
        let (manager, users, _) = manager();
        let user = users
            .find_or_create_by_provider(AuthProvider::Facebook, "fb-1")
            .await
            .unwrap();
        let ticket = manager.establish(&user, AuthMethod::Facebook).await.unwrap();

        users
            .append_secret(&ticket.user_id, "added after login")
            .await
            .unwrap();

        let state = manager.resolve(&ticket.session_id).await.unwrap();
        let current = state.current_user().expect("authenticated");
        assert_eq!(current.user.secrets, vec!["added after login".to_string()]);
    }

    #[actix_web::test]
    async fn test_unknown_session_is_anonymous() {
        let (manager, _, _) = manager();
        let state = manager
            .resolve(&SessionManager::generate_session_id())
            .await
            .unwrap();
        assert!(!state.is_authenticated());
    }

    #[actix_web::test]
    async fn test_unsaved_user_cannot_get_session() {
        let (manager, _, sessions) = manager();
        let unsaved = User::new_local("ghost".to_string(), "hash".to_string());

        assert!(manager.establish(&unsaved, AuthMethod::Local).await.is_err());
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_cookie_attributes() {
        let (manager, _, _) = manager();
        let ticket = SessionTicket {
            session_id: "abc".to_string(),
            user_id: "u".to_string(),
        };
        let cookie = manager.build_cookie(&ticket);

        assert_eq!(cookie.name(), "secrets.sid");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));

        let removal = manager.removal_cookie();
        assert_eq!(removal.value(), "");
        assert_eq!(removal.max_age(), Some(CookieDuration::ZERO));
    }
}
