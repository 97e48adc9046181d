//! 인증/인가 모델

pub mod auth_proof;
pub mod authenticated_user;
pub mod authorization;

pub use auth_proof::AuthProof;
pub use authenticated_user::{CurrentUser, OptionalUser, SessionState};
pub use authorization::{authorize, GateDecision, GatePolicy};
