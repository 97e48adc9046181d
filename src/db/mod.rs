//! # MongoDB 연결 관리
//!
//! 사용자 레코드가 저장되는 MongoDB 연결을 생성하고 보관합니다.
//! 연결은 `main.rs`에서 한 번 생성되어 [`UserRepository`](crate::repositories::users::UserRepository)에
//! 명시적으로 주입됩니다.
//!
//! ## 환경 변수
//!
//! | 변수 | 기본값 |
//! |------|--------|
//! | `MONGODB_URI` | `mongodb://localhost:27017` |
//! | `DATABASE_NAME` | `userDB` |

use std::time::Duration;
use log::info;
use mongodb::{options::ClientOptions, Client};
use crate::config::StoreConfig;
use crate::core::{AppError, AppResult};

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 설정을 읽어 MongoDB에 연결하고 `ping`으로 연결을 확인합니다.
    ///
    /// 서버 선택 타임아웃은 저장소 호출 타임아웃과 같게 맞춥니다.
    pub async fn new() -> AppResult<Self> {
        Self::connect(&StoreConfig::mongodb_uri(), &StoreConfig::database_name(), StoreConfig::call_timeout()).await
    }

    pub async fn connect(uri: &str, database_name: &str, timeout: Duration) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::StoreError(format!("MongoDB URI 파싱 실패: {}", e)))?;

        client_options.app_name = Some("secrets_service".to_string());
        client_options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::StoreError(e.to_string()))?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::StoreError(format!("MongoDB ping 실패: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
