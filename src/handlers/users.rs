//! # User Management HTTP Handlers
//!
//! 사용자 조회, 검색, 부분 수정, 삭제 엔드포인트입니다.
//!
//! ## 관리자 엔드포인트 (`ADMIN`, `SUPER`)
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users?page=&limit=` | 사용자 목록 (최신순) | 200 OK |
//! | `GET` | `/users/search?q=&page=&limit=` | 이름/이메일 부분 일치 검색 | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 OK |
//! | `PATCH` | `/users/{id}` | 부분 수정 | 200 OK |
//! | `DELETE` | `/users/{id}` | soft delete | 200 OK |
//!
//! ## 본인 엔드포인트 (로그인 사용자)
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/me` | 내 정보 |
//! | `PATCH` | `/me` | 내 정보 수정 (`role`, `active` 제외) |
//!
//! ## 목록 응답
//!
//! ```json
//! {
//!   "users": [ { "id": "...", "name": "Alice", "email": "alice@example.com", ... } ],
//!   "count": 25,
//!   "current_page": 1,
//!   "total_page": 3
//! }
//! ```

use actix_web::{delete, get, patch, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::config::Role;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{ListUsersQuery, SearchUsersQuery, UpdateUserRequest};
use crate::domain::dto::users::response::{CreateUserResponse, UserListResponse, UserResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::users::UserService;
use crate::utils::string_utils::{clean_optional_string, is_valid_string};

/// 본문 검증. 이름이 공백뿐이면 길이 검사를 통과해도 거부합니다.
fn validate_update(payload: &UpdateUserRequest) -> Result<(), AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    if payload.name.as_deref().is_some_and(|name| !is_valid_string(name)) {
        return Err(AppError::ValidationError("name은(는) 필수입니다".to_string()));
    }

    Ok(())
}

/// 관리자는 자기 역할 이하의 계정만 수정/삭제하고, 자기 역할 이하로만 부여할 수 있습니다.
async fn ensure_manageable(
    service: &UserService,
    caller: &AuthenticatedUser,
    user_id: &str,
    requested_role: Option<Role>,
) -> Result<(), AppError> {
    if let Some(role) = requested_role {
        if !caller.can_manage(role) {
            log::warn!("권한 상승 시도: 요청자 {} ({}) -> {}",
                caller.user_id, caller.role.as_str(), role.as_str());
            return Err(AppError::AuthorizationError(format!(
                "{} 역할을 부여할 권한이 없습니다",
                role.as_str()
            )));
        }
    }

    let target = service.read_by_id(user_id).await?;
    if !caller.can_manage(target.role) {
        log::warn!("상위 역할 계정 변경 시도: 요청자 {} ({}) -> 대상 {} ({})",
            caller.user_id, caller.role.as_str(), user_id, target.role.as_str());
        return Err(AppError::AuthorizationError(format!(
            "{} 역할의 사용자를 변경할 권한이 없습니다",
            target.role.as_str()
        )));
    }

    Ok(())
}

/// 사용자 목록 조회 핸들러
///
/// `page`와 `limit`이 없거나 0이면 기본값(1, 10)을 사용하고, `limit`은 100으로 제한됩니다.
#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
    query: web::Query<ListUsersQuery>,
) -> Result<HttpResponse, AppError> {
    let request = query.page_request();
    let page = service.read(request).await?;

    Ok(HttpResponse::Ok().json(UserListResponse::new(page, request)))
}

/// 사용자 검색 핸들러
///
/// `q`가 비어 있으면 목록 조회와 같습니다.
#[get("/search")]
pub async fn search_users(
    service: web::Data<UserService>,
    query: web::Query<SearchUsersQuery>,
) -> Result<HttpResponse, AppError> {
    let request = query.page_request();
    let keyword = clean_optional_string(query.into_inner().q).unwrap_or_default();

    let page = service.search(request, &keyword).await?;

    Ok(HttpResponse::Ok().json(UserListResponse::new(page, request)))
}

/// 사용자 조회 핸들러
///
/// 삭제된 사용자나 형식이 잘못된 ID는 404입니다.
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.read_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 사용자 부분 수정 핸들러
///
/// 본문에 있는 필드만 변경됩니다. `{}`는 아무것도 바꾸지 않고 현재 값을 돌려줍니다.
/// 요청자보다 높은 역할의 계정이나 역할 부여는 403입니다.
///
/// ```bash
/// curl -X PATCH http://localhost:8080/api/v1/users/665f0c2b9d1e8a0012345678 \
///   -H "Authorization: Bearer {admin_token}" \
///   -H "Content-Type: application/json" \
///   -d '{"active": false}'
/// ```
#[patch("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    caller: AuthenticatedUser,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    validate_update(&payload)?;
    ensure_manageable(&service, &caller, &user_id, payload.role).await?;

    let user = service
        .update(payload.into_inner().into_payload(user_id.into_inner()))
        .await?;

    Ok(HttpResponse::Ok().json(CreateUserResponse::new(user, "User updated successfully")))
}

/// 사용자 삭제 핸들러
///
/// 레코드는 남고 `deleted_at`만 기록됩니다. 이후 모든 조회와 로그인에서 제외됩니다.
/// 요청자보다 높은 역할의 계정은 삭제할 수 없습니다.
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    caller: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    ensure_manageable(&service, &caller, &user_id, None).await?;

    service.soft_delete(&user_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "User deleted successfully"
    })))
}

/// 내 정보 조회
#[get("")]
pub async fn get_me(
    service: web::Data<UserService>,
    current: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = service.read_by_id(&current.user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 내 정보 수정
///
/// 이름, 이메일, 비밀번호만 바꿀 수 있습니다.
#[patch("")]
pub async fn update_me(
    service: web::Data<UserService>,
    current: AuthenticatedUser,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    validate_update(&payload)?;

    if payload.touches_privileges() {
        log::warn!("본인 권한 변경 시도: 사용자 ID {}", current.user_id);
        return Err(AppError::AuthorizationError(
            "role과 active는 직접 변경할 수 없습니다".to_string(),
        ));
    }

    let user = service
        .update(payload.into_inner().into_payload(current.user_id))
        .await?;

    Ok(HttpResponse::Ok().json(CreateUserResponse::new(user, "User updated successfully")))
}
