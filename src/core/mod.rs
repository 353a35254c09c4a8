//! # Core Module
//!
//! 애플리케이션 전역에서 쓰이는 기반 타입들입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 유스케이스 실패 종류를 모은 열거형
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorContext**: 외부 에러를 `InternalError`로 감싸는 확장 트레이트
//!
//! ### [`app_state`] - 의존성 조립
//! - **AppState**: 저장소, 해셔, 토큰 서비스를 생성자로 엮은 결과
//! - `web::Data` 핸들을 통해 핸들러와 미들웨어에 전달
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 모듈 |
//! |--------|---------|
//! | `@ExceptionHandler` | `AppError::error_response()` |
//! | `@Configuration` + `@Bean` | `AppState::new` |
//! | `ApplicationContext` 조회 | `web::Data<T>` 추출자 |

pub mod errors;
pub mod app_state;

pub use errors::*;
pub use app_state::AppState;
