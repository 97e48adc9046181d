//! 프로세스 내 메모리 사용자 저장소
//!
//! `USER_STORE=memory`로 로컬 개발 시 사용하며, 테스트의 저장소 대역으로도 쓰입니다.
//! 모든 연산은 하나의 뮤텍스 아래에서 수행되므로 단일 문서 연산의 원자성이
//! MongoDB 구현과 같게 유지됩니다. 락을 쥔 채로 `.await` 하지 않습니다.

use std::sync::{Mutex, MutexGuard};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::config::AuthProvider;
use crate::core::{AppError, AppResult};
use crate::domain::entities::users::User;
use crate::repositories::users::UserStore;

#[derive(Default)]
pub struct InMemoryUserStore {
    // 삽입 순서 유지
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Vec<User>>> {
        self.users
            .lock()
            .map_err(|_| AppError::StoreError("in-memory user store lock poisoned".to_string()))
    }

    fn with_user_mut<F>(&self, id: &str, f: F) -> AppResult<()>
    where
        F: FnOnce(&mut User),
    {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::NotFound(format!("user {}", id)))?;
        let mut users = self.lock()?;
        let user = users
            .iter_mut()
            .find(|u| u.id == Some(object_id))
            .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;

        f(user);
        user.updated_at = DateTime::now();
        Ok(())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.lock()?;
        Ok(users
            .iter()
            .find(|u| u.username.as_deref() == Some(username))
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        let users = self.lock()?;
        Ok(users.iter().find(|u| u.id == Some(object_id)).cloned())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.lock()?;

        if let Some(username) = &user.username {
            if users.iter().any(|u| u.username.as_ref() == Some(username)) {
                return Err(AppError::UsernameTaken(username.clone()));
            }
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_or_create_by_provider(&self, provider: AuthProvider, subject_id: &str) -> AppResult<User> {
        let mut users = self.lock()?;

        if let Some(existing) = users
            .iter()
            .find(|u| u.provider_ids.get(provider) == Some(subject_id))
        {
            return Ok(existing.clone());
        }

        let mut user = User::new_oauth(provider, subject_id.to_string());
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn append_secret(&self, id: &str, text: &str) -> AppResult<()> {
        self.with_user_mut(id, |user| user.secrets.push(text.to_string()))
    }

    async fn remove_secret(&self, id: &str, text: &str) -> AppResult<()> {
        self.with_user_mut(id, |user| user.secrets.retain(|s| s != text))
    }

    async fn list_with_any_secret(&self) -> AppResult<Vec<User>> {
        let users = self.lock()?;
        Ok(users.iter().filter(|u| !u.secrets.is_empty()).cloned().collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.lock()?.len() as u64)
    }
}
