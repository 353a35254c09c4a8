use crate::config::Role;

/// 인증 모드를 정의하는 열거형
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 인증이 반드시 필요함
    Required,
    /// 인증이 선택사항임 (있으면 검증, 없어도 허용)
    Optional,
}

/// 요구되는 역할 정보
#[derive(Debug, Clone)]
pub enum RequiredRole {
    /// 특정 단일 역할이 필요
    Single(Role),
    /// 여러 역할 중 하나라도 있으면 허용 (OR 조건)
    Any(Vec<Role>),
}

impl RequiredRole {
    /// 사용자 역할이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, user_role: Role) -> bool {
        match self {
            RequiredRole::Single(required_role) => *required_role == user_role,
            RequiredRole::Any(required_roles) => required_roles.contains(&user_role),
        }
    }

    /// 에러 메시지용 역할 목록 문자열
    pub fn describe(&self) -> String {
        match self {
            RequiredRole::Single(role) => role.as_str().to_string(),
            RequiredRole::Any(roles) => roles
                .iter()
                .map(Role::as_str)
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_role_requires_exact_match() {
        let required = RequiredRole::Single(Role::Admin);
        assert!(required.is_satisfied(Role::Admin));
        assert!(!required.is_satisfied(Role::Super));
        assert!(!required.is_satisfied(Role::User));
    }

    #[test]
    fn test_any_role() {
        let required = RequiredRole::Any(vec![Role::Admin, Role::Super]);
        assert!(required.is_satisfied(Role::Super));
        assert!(!required.is_satisfied(Role::User));
        assert_eq!(required.describe(), "ADMIN | SUPER");
    }
}
