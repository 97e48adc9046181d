//! MongoDB 기반 사용자 저장소
//!
//! `users` 컬렉션 하나에 모든 사용자 레코드를 저장합니다.
//! 각 연산은 단일 문서 연산이며, 저장소 호출 타임아웃이 적용됩니다.

use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};
use crate::config::AuthProvider;
use crate::core::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::repositories::users::UserStore;
use crate::repositories::with_timeout;

const COLLECTION: &str = "users";
const DUPLICATE_KEY: i32 = 11000;

pub struct UserRepository {
    db: Arc<Database>,
    timeout: Duration,
}

fn store_error(e: mongodb::error::Error) -> AppError {
    AppError::StoreError(e.to_string())
}

/// 유니크 인덱스 위반 여부
fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY,
        _ => false,
    }
}

/// 프로바이더 식별자 필드 경로 (`provider_ids.google` 등)
fn provider_field(provider: AuthProvider) -> String {
    format!("provider_ids.{}", provider.as_str())
}

/// OAuth find-or-create upsert의 `(filter, update)` 문서 쌍
///
/// 필터의 등호 조건(`provider_ids.<provider>`)이 새 문서에 그대로 들어가므로
/// 식별자 필드는 `$setOnInsert`에 다시 쓰지 않습니다.
fn provider_upsert(provider: AuthProvider, subject_id: &str, now: DateTime) -> (Document, Document) {
    let mut filter = Document::new();
    filter.insert(provider_field(provider), subject_id);

    let update = doc! {
        "$setOnInsert": {
            "secrets": [],
            "created_at": now,
            "updated_at": now,
        }
    };

    (filter, update)
}

impl UserRepository {
    pub fn new(db: Arc<Database>, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION)
    }

    /// 문자열 ID를 ObjectId로 변환합니다. 형식이 잘못되면 None
    fn parse_id(id: &str) -> Option<ObjectId> {
        ObjectId::parse_str(id).ok()
    }

    /// 유니크 인덱스를 생성합니다.
    ///
    /// 모든 인덱스는 partial 인덱스입니다. 값이 없는 문서(OAuth 전용 계정의 username,
    /// 로컬 계정의 provider_ids 등)는 유일성 검사에서 제외됩니다.
    ///
    /// - `username_unique` - 로컬 로그인 키
    /// - `provider_ids_google_unique` - Google subject
    /// - `provider_ids_facebook_unique` - Facebook app-scoped ID
    pub async fn create_indexes(&self) -> AppResult<()> {
        let unique_string_index = |field: &str, name: &str| {
            let mut keys = Document::new();
            keys.insert(field, 1);
            let mut filter = Document::new();
            filter.insert(field, doc! { "$type": "string" });

            IndexModel::builder()
                .keys(keys)
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .partial_filter_expression(filter)
                        .name(name.to_string())
                        .build(),
                )
                .build()
        };

        let indexes = [
            unique_string_index("username", "username_unique"),
            unique_string_index(&provider_field(AuthProvider::Google), "provider_ids_google_unique"),
            unique_string_index(&provider_field(AuthProvider::Facebook), "provider_ids_facebook_unique"),
        ];

        with_timeout(self.timeout, "create_indexes", AppError::StoreError, async {
            self.collection()
                .create_indexes(indexes)
                .await
                .map_err(store_error)?;
            Ok(())
        })
        .await?;

        log::info!("✅ users 컬렉션 인덱스 준비 완료");
        Ok(())
    }

    /// `$push`/`$pull` 같은 단일 문서 갱신. 대상이 없으면 NotFound
    async fn update_secrets(&self, id: &str, operation: &str, update: Document) -> AppResult<()> {
        let object_id = Self::parse_id(id)
            .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;

        let result = with_timeout(self.timeout, operation, AppError::StoreError, async {
            self.collection()
                .update_one(doc! { "_id": object_id }, update)
                .await
                .map_err(store_error)
        })
        .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("user {}", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    fn backend_name(&self) -> &'static str {
        "mongodb"
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        with_timeout(self.timeout, "find_by_username", AppError::StoreError, async {
            self.collection()
                .find_one(doc! { "username": username })
                .await
                .map_err(store_error)
        })
        .await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Some(object_id) = Self::parse_id(id) else {
            log::debug!("잘못된 형식의 사용자 ID: {}", id);
            return Ok(None);
        };

        with_timeout(self.timeout, "find_by_id", AppError::StoreError, async {
            self.collection()
                .find_one(doc! { "_id": object_id })
                .await
                .map_err(store_error)
        })
        .await
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        if let Some(username) = &user.username {
            if self.find_by_username(username).await?.is_some() {
                return Err(AppError::UsernameTaken(username.clone()));
            }
        }

        let inserted = with_timeout(self.timeout, "create", AppError::StoreError, async {
            match self.collection().insert_one(&user).await {
                Ok(result) => Ok(result),
                // 사전 확인과 삽입 사이의 경합은 유니크 인덱스가 잡아냅니다
                Err(e) if is_duplicate_key(&e) => Err(AppError::UsernameTaken(
                    user.username.clone().unwrap_or_default(),
                )),
                Err(e) => Err(store_error(e)),
            }
        })
        .await?;

        let object_id = inserted
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::StoreError("inserted_id is not an ObjectId".to_string()))?;
        user.id = Some(object_id);

        Ok(user)
    }

    /// `$setOnInsert` + `upsert` 단일 연산으로 find-or-create를 수행합니다.
    ///
    /// 동시 upsert가 유니크 인덱스에 걸리면 이미 생성된 문서를 다시 읽습니다.
    async fn find_or_create_by_provider(&self, provider: AuthProvider, subject_id: &str) -> AppResult<User> {
        let (filter, update) = provider_upsert(provider, subject_id, DateTime::now());

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let upserted = with_timeout(self.timeout, "find_or_create_by_provider", AppError::StoreError, async {
            match self
                .collection()
                .find_one_and_update(filter.clone(), update)
                .with_options(options)
                .await
            {
                Ok(user) => Ok(user),
                Err(e) if is_duplicate_key(&e) => {
                    log::debug!("동시 upsert 감지, 기존 문서 재조회: {} {}", provider, subject_id);
                    self.collection().find_one(filter.clone()).await.map_err(store_error)
                }
                Err(e) => Err(store_error(e)),
            }
        })
        .await?;

        upserted.ok_or_else(|| {
            AppError::StoreError(format!("upsert returned no document for {} {}", provider, subject_id))
        })
    }

    async fn append_secret(&self, id: &str, text: &str) -> AppResult<()> {
        self.update_secrets(
            id,
            "append_secret",
            doc! {
                "$push": { "secrets": text },
                "$set": { "updated_at": DateTime::now() },
            },
        )
        .await
    }

    async fn remove_secret(&self, id: &str, text: &str) -> AppResult<()> {
        self.update_secrets(
            id,
            "remove_secret",
            doc! {
                "$pull": { "secrets": text },
                "$set": { "updated_at": DateTime::now() },
            },
        )
        .await
    }

    async fn list_with_any_secret(&self) -> AppResult<Vec<User>> {
        with_timeout(self.timeout, "list_with_any_secret", AppError::StoreError, async {
            let cursor = self
                .collection()
                .find(doc! { "secrets.0": { "$exists": true } })
                .await
                .map_err(store_error)?;

            cursor.try_collect::<Vec<User>>().await.map_err(store_error)
        })
        .await
    }

    async fn count(&self) -> AppResult<u64> {
        with_timeout(self.timeout, "count", AppError::StoreError, async {
            self.collection()
                .count_documents(doc! {})
                .await
                .map_err(store_error)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_field_paths() {
        assert_eq!(provider_field(AuthProvider::Google), "provider_ids.google");
        assert_eq!(provider_field(AuthProvider::Facebook), "provider_ids.facebook");
    }

    #[test]
    fn test_provider_upsert_filters_on_subject_and_only_seeds_new_documents() {
        let now = DateTime::now();
        let (filter, update) = provider_upsert(AuthProvider::Facebook, "fb-42", now);

        assert_eq!(filter, doc! { "provider_ids.facebook": "fb-42" });

        assert_eq!(update.len(), 1);
        let on_insert = update.get_document("$setOnInsert").unwrap();
        assert!(!on_insert.contains_key("provider_ids"));
        assert!(!on_insert.contains_key("provider_ids.facebook"));
        assert!(!on_insert.contains_key("username"));
        assert!(!on_insert.contains_key("password_hash"));
        assert_eq!(on_insert.get_array("secrets").unwrap().len(), 0);
        assert_eq!(on_insert.get_datetime("created_at").unwrap(), &now);
    }

    #[test]
    fn test_parse_id_rejects_malformed_ids() {
        assert!(UserRepository::parse_id("not-an-object-id").is_none());
        assert!(UserRepository::parse_id(&ObjectId::new().to_hex()).is_some());
    }
}
