//! 시크릿 도메인 DTO
//!
//! 요청 폼과 화면용 뷰 데이터를 함께 정의합니다.
//! 뷰 데이터 타입은 자격 증명과 프로바이더 ID 필드를 구조적으로 갖지 않습니다.

pub mod secret_request;
pub mod secret_view;

pub use secret_request::{RemoveSecretForm, SubmitSecretForm};
pub use secret_view::{ProfileView, PublicSecretsView, SecretHolderView, UserSecretsView};
