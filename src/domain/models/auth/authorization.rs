//! 인가 게이트 정책
//!
//! 게이트는 현재 요청의 세션 상태만 보고 결정을 내리는 순수 함수입니다.
//! 저장소나 외부 자원에 접근하지 않습니다.

use crate::domain::models::auth::SessionState;

/// 라우트별 게이트 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePolicy {
    /// 인증 필수. 익명 요청은 `/login`으로 보냄 (제출, 삭제, 프로필)
    Required,
    /// 인증 선택. 익명 요청은 공개 화면으로 진행 (목록, 정보 페이지)
    Optional,
}

/// 게이트 결정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    RedirectToLogin,
}

/// 세션 상태와 정책으로 요청 진행 여부를 결정합니다.
///
/// # 예제
///
/// ```rust,ignore
/// assert_eq!(authorize(&SessionState::Anonymous, GatePolicy::Required), GateDecision::RedirectToLogin);
/// assert_eq!(authorize(&SessionState::Anonymous, GatePolicy::Optional), GateDecision::Proceed);
/// ```
pub fn authorize(state: &SessionState, policy: GatePolicy) -> GateDecision {
    match (policy, state.is_authenticated()) {
        (GatePolicy::Required, false) => GateDecision::RedirectToLogin,
        _ => GateDecision::Proceed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::sessions::AuthMethod;
    use crate::domain::entities::users::User;
    use crate::domain::models::auth::CurrentUser;

    fn authenticated() -> SessionState {
        SessionState::Authenticated(CurrentUser {
            user_id: "64b7f0c2a1b2c3d4e5f60718".to_string(),
            session_id: "sid".to_string(),
            auth_method: AuthMethod::Local,
            user: User::new_local("alice".to_string(), "hash".to_string()),
        })
    }

    #[test]
    fn test_required_policy() {
        assert_eq!(authorize(&SessionState::Anonymous, GatePolicy::Required), GateDecision::RedirectToLogin);
        assert_eq!(authorize(&authenticated(), GatePolicy::Required), GateDecision::Proceed);
    }

    #[test]
    fn test_optional_policy_always_proceeds() {
        assert_eq!(authorize(&SessionState::Anonymous, GatePolicy::Optional), GateDecision::Proceed);
        assert_eq!(authorize(&authenticated(), GatePolicy::Optional), GateDecision::Proceed);
    }
}
