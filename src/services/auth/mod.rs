//! 인증 서비스 모듈
//!
//! 로컬 로그인, Google/Facebook OAuth, 서버 측 세션을 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - bcrypt 비밀번호 해싱 ([`PasswordHasher`])
//! - 로그인 증명 → 사용자 레코드 변환 ([`IdentityResolver`])
//! - 세션 발급/복원/무효화 ([`SessionManager`])
//! - OAuth state 서명 및 프로바이더 클라이언트
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::domain::models::auth::AuthProof;
//! use crate::services::auth::{IdentityResolver, SessionManager};
//!
//! let user = identity.resolve(AuthProof::Local { username, password }).await?;
//! let ticket = session_manager.establish(&user, AuthMethod::Local).await?;
//! ```

pub mod password;
pub mod identity_resolver;
pub mod session_manager;
pub mod oauth_state;
pub mod oauth_client;
pub mod google_auth_service;
pub mod facebook_auth_service;

pub use password::*;
pub use identity_resolver::*;
pub use session_manager::*;
pub use oauth_state::*;
pub use oauth_client::{OAuthClient, OAuthProviders, OAUTH_HTTP_TIMEOUT};
pub use google_auth_service::*;
pub use facebook_auth_service::*;
