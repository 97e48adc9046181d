//! # OAuth State 서명
//!
//! OAuth 2.0 `state` 매개변수로 CSRF 공격을 방지합니다.
//!
//! ```text
//! state = "{발급시각}.{nonce}.{HMAC-SHA256(secret, "{발급시각}.{nonce}")}"
//! ```
//!
//! 인가 요청 시 같은 값을 `oauth_state` 쿠키에도 저장하고, 콜백에서
//! `서명 확인 → 만료 확인 → 쿠키 일치 확인` 순서로 검증합니다.
//! 어느 단계든 실패하면 `AppError::OAuthFailure`입니다.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;
use crate::core::{AppError, AppResult};

type HmacSha256 = Hmac<Sha256>;

/// state 값을 보관하는 쿠키 이름
pub const OAUTH_STATE_COOKIE: &str = "oauth_state";

#[derive(Clone)]
pub struct OAuthStateSigner {
    secret: Vec<u8>,
    ttl_seconds: i64,
}

impl OAuthStateSigner {
    pub fn new(secret: impl Into<Vec<u8>>, ttl_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_seconds,
        }
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    fn mac(&self) -> AppResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| AppError::InternalError(format!("HMAC 키 초기화 실패: {}", e)))
    }

    /// 새 state를 발급합니다.
    pub fn issue(&self) -> AppResult<String> {
        self.issue_at(Utc::now().timestamp())
    }

    pub fn issue_at(&self, issued_at: i64) -> AppResult<String> {
        let payload = format!("{}.{}", issued_at, Uuid::new_v4().simple());
        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{}.{}", payload, signature))
    }

    /// 콜백으로 돌아온 state를 검증합니다.
    ///
    /// # 인자
    ///
    /// * `state` - 프로바이더가 쿼리로 돌려준 값
    /// * `cookie_state` - 인가 요청 시 심어둔 `oauth_state` 쿠키 값
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let cookie = req.cookie(OAUTH_STATE_COOKIE).map(|c| c.value().to_string());
    /// signer.verify(query.state.as_deref().unwrap_or(""), cookie.as_deref())?;
    /// ```
    pub fn verify(&self, state: &str, cookie_state: Option<&str>) -> AppResult<()> {
        self.verify_at(state, cookie_state, Utc::now().timestamp())
    }

    pub fn verify_at(&self, state: &str, cookie_state: Option<&str>, now: i64) -> AppResult<()> {
        let invalid = |reason: &str| AppError::OAuthFailure(format!("invalid state: {}", reason));

        let (payload, signature) = state.rsplit_once('.').ok_or_else(|| invalid("malformed"))?;
        let (issued_at, nonce) = payload.split_once('.').ok_or_else(|| invalid("malformed"))?;
        if nonce.is_empty() {
            return Err(invalid("malformed"));
        }

        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| invalid("malformed signature"))?;
        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| invalid("signature mismatch"))?;

        let issued_at: i64 = issued_at.parse().map_err(|_| invalid("malformed timestamp"))?;
        if now < issued_at || now - issued_at > self.ttl_seconds {
            return Err(invalid("expired"));
        }

        match cookie_state {
            Some(cookie) if cookie == state => Ok(()),
            _ => Err(invalid("cookie mismatch")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> OAuthStateSigner {
        OAuthStateSigner::new("test-secret", 600)
    }

    #[test]
    fn test_issued_state_verifies_with_matching_cookie() {
        let signer = signer();
        let state = signer.issue().unwrap();

        assert!(signer.verify(&state, Some(&state)).is_ok());
    }

    #[test]
    fn test_missing_or_different_cookie_is_rejected() {
        let signer = signer();
        let state = signer.issue().unwrap();
        let other = signer.issue().unwrap();

        assert!(matches!(signer.verify(&state, None), Err(AppError::OAuthFailure(_))));
        assert!(matches!(signer.verify(&state, Some(&other)), Err(AppError::OAuthFailure(_))));
    }

    #[test]
    fn test_tampered_state_is_rejected() {
        let signer = signer();
        let state = signer.issue_at(1_000).unwrap();
        let tampered = state.replacen("1000", "2000", 1);

        assert!(signer.verify_at(&tampered, Some(&tampered), 2_000).is_err());
        assert!(signer.verify_at("garbage", Some("garbage"), 2_000).is_err());
        assert!(signer.verify_at("", Some(""), 2_000).is_err());
    }

    #[test]
    fn test_state_from_other_secret_is_rejected() {
        let state = OAuthStateSigner::new("another-secret", 600).issue().unwrap();

        assert!(signer().verify(&state, Some(&state)).is_err());
    }

    #[test]
    fn test_expired_state_is_rejected() {
        let signer = signer();
        let state = signer.issue_at(1_000).unwrap();

        assert!(signer.verify_at(&state, Some(&state), 1_600).is_ok());
        assert!(signer.verify_at(&state, Some(&state), 1_601).is_err());
        assert!(signer.verify_at(&state, Some(&state), 999).is_err());
    }
}
