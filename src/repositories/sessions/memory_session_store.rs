//! 프로세스 내 메모리 세션 저장소
//!
//! 각 항목은 만료 시각을 함께 보관합니다. 만료된 항목은 조회 시 제거되고,
//! 새 세션을 저장할 때마다 전체에서 한 번 더 정리됩니다.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};
use async_trait::async_trait;
use crate::core::{AppError, AppResult};
use crate::domain::entities::sessions::SessionRecord;
use crate::repositories::sessions::SessionStore;

#[derive(Default)]
pub struct InMemorySessionStore {
    entries: Mutex<HashMap<String, (SessionRecord, Instant)>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, HashMap<String, (SessionRecord, Instant)>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::SessionStoreError("in-memory session store lock poisoned".to_string()))
    }

    /// 저장된 (만료되지 않은) 세션 수
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .lock()
            .map(|entries| entries.values().filter(|(_, expires_at)| *expires_at > now).count())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn put(&self, key: &str, record: &SessionRecord, ttl_seconds: u64) -> AppResult<()> {
        let now = Instant::now();
        let mut entries = self.lock()?;

        // 다시 조회되지 않는 만료 세션도 여기서 정리
        entries.retain(|_, (_, expires_at)| *expires_at > now);
        entries.insert(key.to_string(), (record.clone(), now + Duration::from_secs(ttl_seconds)));
        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<Option<SessionRecord>> {
        let mut entries = self.lock()?;
        let now = Instant::now();
        let live = entries
            .get(key)
            .filter(|(_, expires_at)| *expires_at > now)
            .map(|(record, _)| record.clone());

        if live.is_none() {
            entries.remove(key);
        }
        Ok(live)
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
