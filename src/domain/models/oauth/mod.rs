//! # OAuth 프로바이더 응답 모델
//!
//! 토큰 교환 응답과 프로필 응답을 역직렬화하기 위한 구조체입니다.
//! 이 서비스가 실제로 사용하는 값은 프로바이더의 고유 사용자 식별자 하나뿐이며,
//! 나머지 필드는 로그 용도로만 읽습니다.

pub mod oauth_token;
pub mod google_user;
pub mod facebook_user;

pub use oauth_token::OAuthTokenResponse;
pub use google_user::GoogleUserInfo;
pub use facebook_user::FacebookUserInfo;
