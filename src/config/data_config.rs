//! 런타임 및 데이터 저장소 관련 설정
//!
//! 환경 변수를 읽어 실행 환경, 비밀번호 해싱 비용, 서버 바인딩,
//! 저장소 백엔드, 세션 쿠키 설정을 제공합니다.
//! 모든 값은 환경 변수가 없을 때 안전한 기본값을 사용합니다.

use std::env;
use std::time::Duration;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수로부터 현재 실행 환경을 판별합니다.
    ///
    /// 값이 없거나 알 수 없는 값이면 `Production`으로 간주합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt 해싱 비용을 반환합니다.
    ///
    /// `BCRYPT_COST`가 4..=15 범위의 값이면 그대로 사용하고,
    /// 아니면 실행 환경별 기본값을 사용합니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let hash = bcrypt::hash(password, PasswordConfig::bcrypt_cost())?;
    /// ```
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
            log::warn!("BCRYPT_COST 값이 유효하지 않습니다: {}", cost_str);
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or(4)
    }
}

/// 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreBackend {
    /// 사용자는 MongoDB, 세션은 Redis
    External,
    /// 프로세스 내 메모리 저장소 (로컬 개발 및 테스트용)
    Memory,
}

impl StoreBackend {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "mem" | "in-memory" => StoreBackend::Memory,
            _ => StoreBackend::External,
        }
    }
}

/// 저장소 연결 설정
pub struct StoreConfig;

impl StoreConfig {
    /// 사용자 저장소 백엔드 (`USER_STORE=mongo|memory`)
    pub fn user_backend() -> StoreBackend {
        StoreBackend::from_str(&env::var("USER_STORE").unwrap_or_else(|_| "mongo".to_string()))
    }

    /// 세션 저장소 백엔드 (`SESSION_STORE=redis|memory`)
    pub fn session_backend() -> StoreBackend {
        StoreBackend::from_str(&env::var("SESSION_STORE").unwrap_or_else(|_| "redis".to_string()))
    }

    /// 저장소 호출 하나에 허용되는 최대 시간
    ///
    /// 초과하면 `AppError::StoreError`로 변환됩니다.
    pub fn call_timeout() -> Duration {
        let millis = env::var("STORE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(5000);
        Duration::from_millis(millis)
    }

    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "userDB".to_string())
    }

    pub fn redis_url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }
}

/// 세션 쿠키 설정
///
/// 세션 참조값은 쿠키로 전달되며, 서버는 Redis(또는 메모리)에
/// 세션 레코드를 보관합니다.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub ttl_seconds: u64,
    pub secure_cookie: bool,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            cookie_name: env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "secrets.sid".to_string()),
            ttl_seconds: env::var("SESSION_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ttl: &u64| *ttl >= 60)
                .unwrap_or(7 * 24 * 60 * 60),
            secure_cookie: Environment::current().is_production(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "secrets.sid".to_string(),
            ttl_seconds: 7 * 24 * 60 * 60,
            secure_cookie: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 3000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_store_backend_from_string() {
        assert_eq!(StoreBackend::from_str("memory"), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_str("MEMORY"), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_str("mongo"), StoreBackend::External);
        assert_eq!(StoreBackend::from_str("redis"), StoreBackend::External);
    }

    #[test]
    fn test_session_config_default() {
        let config = SessionConfig::default();
        assert_eq!(config.cookie_name, "secrets.sid");
        assert_eq!(config.ttl_seconds, 604_800);
        assert!(!config.secure_cookie);
    }
}
