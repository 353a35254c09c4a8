//! 사용자 유스케이스 모델

pub mod user_update;

pub use user_update::{UpdateUserPayload, UserChangeSet};
