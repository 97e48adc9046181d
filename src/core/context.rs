//! # Application Context
//!
//! 저장소와 서비스를 한 번 조립하여 `web::Data<AppContext>`로 공유합니다.
//! 모든 의존성은 생성 시점에 명시적으로 주입되며, 전역 싱글톤은 없습니다.
//!
//! ```text
//! AppContext
//! ├── users: Arc<dyn UserStore>          (MongoDB | memory)
//! ├── sessions: Arc<dyn SessionStore>    (Redis | memory)
//! ├── session_manager ── sessions, users
//! ├── identity ───────── users, PasswordHasher
//! ├── secrets ────────── users
//! ├── oauth ──────────── Google, Facebook (설정된 것만)
//! ├── state_signer
//! └── views: Arc<dyn ViewRenderer>
//! ```
//!
//! # 예제
//!
//! ```rust,ignore
//! // 운영: 환경 변수로 백엔드 선택
//! let ctx = AppContext::from_env().await?;
//!
//! // 테스트: 메모리 저장소 + 가짜 OAuth 클라이언트
//! let ctx = AppContext::builder(Arc::new(InMemoryUserStore::new()), Arc::new(InMemorySessionStore::new()))
//!     .password_hasher(PasswordHasher::new(4)?)
//!     .oauth_client(Arc::new(FakeGoogle))
//!     .build()?;
//! ```

use std::sync::Arc;
use crate::caching::redis::RedisClient;
use crate::config::{
    AuthProvider, FacebookOAuthConfig, GoogleOAuthConfig, OAuthConfig, PasswordConfig, SessionConfig,
    StoreBackend, StoreConfig,
};
use crate::core::{AppError, AppResult};
use crate::db::Database;
use crate::repositories::sessions::{InMemorySessionStore, RedisSessionStore, SessionStore};
use crate::repositories::users::{InMemoryUserStore, UserRepository, UserStore};
use crate::services::auth::oauth_client::optional_client;
use crate::services::auth::{
    FacebookAuthService, GoogleAuthService, IdentityResolver, OAuthClient, OAuthProviders, OAuthStateSigner,
    PasswordHasher, SessionManager,
};
use crate::services::secrets::SecretService;
use crate::utils::display_terminal::{
    print_boxed_title, print_context_summary, print_step_complete, print_step_start, print_sub_task,
};
use crate::views::{JsonViewRenderer, ViewRenderer};

#[derive(Clone)]
pub struct AppContext {
    pub users: Arc<dyn UserStore>,
    pub sessions: Arc<dyn SessionStore>,
    pub session_manager: Arc<SessionManager>,
    pub identity: Arc<IdentityResolver>,
    pub secrets: Arc<SecretService>,
    pub oauth: OAuthProviders,
    pub state_signer: Arc<OAuthStateSigner>,
    pub views: Arc<dyn ViewRenderer>,
}

impl AppContext {
    pub fn builder(users: Arc<dyn UserStore>, sessions: Arc<dyn SessionStore>) -> AppContextBuilder {
        AppContextBuilder {
            users,
            sessions,
            password_hasher: None,
            session_config: None,
            oauth: OAuthProviders::default(),
            state_signer: None,
            views: None,
        }
    }

    /// 환경 변수 설정에 따라 저장소에 연결하고 전체 컨텍스트를 조립합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::StoreError` - MongoDB 연결 또는 인덱스 생성 실패
    /// * `AppError::SessionStoreError` - Redis 연결 실패
    pub async fn from_env() -> AppResult<Self> {
        print_boxed_title("🔄 BUILDING APP CONTEXT");

        print_step_start(1, "Connecting user store");
        let users: Arc<dyn UserStore> = match StoreConfig::user_backend() {
            StoreBackend::External => {
                let database = Arc::new(Database::new().await?);
                print_sub_task("MongoDB", database.database_name());
                let repository = UserRepository::new(database, StoreConfig::call_timeout());
                repository.create_indexes().await?;
                print_sub_task("Indexes", "✓ Created");
                Arc::new(repository)
            }
            StoreBackend::Memory => {
                log::warn!("메모리 사용자 저장소 사용 중 - 재시작 시 데이터가 사라집니다");
                Arc::new(InMemoryUserStore::new())
            }
        };
        print_step_complete(1, "User store ready", users.backend_name());

        print_step_start(2, "Connecting session store");
        let sessions: Arc<dyn SessionStore> = match StoreConfig::session_backend() {
            StoreBackend::External => {
                let redis = RedisClient::new(&StoreConfig::redis_url())
                    .await
                    .map_err(|e| AppError::SessionStoreError(format!("Redis 연결 실패: {}", e)))?;
                Arc::new(RedisSessionStore::new(Arc::new(redis), StoreConfig::call_timeout()))
            }
            StoreBackend::Memory => {
                log::warn!("메모리 세션 저장소 사용 중 - 재시작 시 모든 세션이 만료됩니다");
                Arc::new(InMemorySessionStore::new())
            }
        };
        print_step_complete(2, "Session store ready", sessions.backend_name());

        print_step_start(3, "Configuring OAuth providers");
        let mut builder = Self::builder(users, sessions)
            .password_hasher(PasswordHasher::new(PasswordConfig::bcrypt_cost())?)
            .session_config(SessionConfig::from_env())
            .state_signer(OAuthStateSigner::new(
                OAuthConfig::state_secret()?,
                OAuthConfig::state_ttl_seconds(),
            ));

        let clients = [
            optional_client(AuthProvider::Google, GoogleOAuthConfig::settings(), GoogleAuthService::new),
            optional_client(AuthProvider::Facebook, FacebookOAuthConfig::settings(), FacebookAuthService::new),
        ];
        for client in clients.into_iter().flatten() {
            print_sub_task(client.provider().as_str(), "enabled");
            builder = builder.oauth_client(client);
        }
        let context = builder.build()?;
        print_step_complete(3, "OAuth providers configured", &context.oauth.configured().len().to_string());

        let providers: Vec<String> = context
            .oauth
            .configured()
            .iter()
            .map(|p| p.as_str().to_string())
            .collect();
        print_context_summary(context.users.backend_name(), context.sessions.backend_name(), &providers);

        Ok(context)
    }
}

pub struct AppContextBuilder {
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
    password_hasher: Option<PasswordHasher>,
    session_config: Option<SessionConfig>,
    oauth: OAuthProviders,
    state_signer: Option<OAuthStateSigner>,
    views: Option<Arc<dyn ViewRenderer>>,
}

impl AppContextBuilder {
    pub fn password_hasher(mut self, hasher: PasswordHasher) -> Self {
        self.password_hasher = Some(hasher);
        self
    }

    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = Some(config);
        self
    }

    pub fn oauth_client(mut self, client: Arc<dyn OAuthClient>) -> Self {
        self.oauth = self.oauth.with(client);
        self
    }

    pub fn state_signer(mut self, signer: OAuthStateSigner) -> Self {
        self.state_signer = Some(signer);
        self
    }

    pub fn views(mut self, views: Arc<dyn ViewRenderer>) -> Self {
        self.views = Some(views);
        self
    }

    pub fn build(self) -> AppResult<AppContext> {
        let password_hasher = match self.password_hasher {
            Some(hasher) => hasher,
            None => PasswordHasher::new(PasswordConfig::bcrypt_cost())?,
        };
        let state_signer = match self.state_signer {
            Some(signer) => signer,
            None => OAuthStateSigner::new(OAuthConfig::state_secret()?, OAuthConfig::state_ttl_seconds()),
        };

        let session_manager = SessionManager::new(
            self.sessions.clone(),
            self.users.clone(),
            self.session_config.unwrap_or_default(),
        );

        Ok(AppContext {
            identity: Arc::new(IdentityResolver::new(self.users.clone(), password_hasher)),
            secrets: Arc::new(SecretService::new(self.users.clone())),
            session_manager: Arc::new(session_manager),
            oauth: self.oauth,
            state_signer: Arc::new(state_signer),
            views: self.views.unwrap_or_else(|| Arc::new(JsonViewRenderer)),
            users: self.users,
            sessions: self.sessions,
        })
    }
}
