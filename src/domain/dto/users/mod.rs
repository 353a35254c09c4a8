//! # 사용자 DTO
//!
//! 회원가입, 로그인, 조회, 검색, 부분 수정 API의 요청과 응답 타입입니다.
//!
//! ## 보안 고려사항
//! - 응답 DTO에는 비밀번호 해시 필드가 존재하지 않습니다.
//! - 모든 요청 DTO는 `validator`로 형식을 검증한 뒤 유스케이스에 전달됩니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
