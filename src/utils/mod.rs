//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 변환 유틸리티
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{validate_required_string, to_title_case};
//!
//! let clean_name = validate_required_string("  john doe  ", "name")?;
//! assert_eq!(to_title_case(&clean_name), "John Doe");
//! ```

pub mod string_utils;
