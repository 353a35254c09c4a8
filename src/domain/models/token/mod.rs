//! 토큰 모델

pub mod token;

pub use token::{IssuedToken, TokenClaims};
