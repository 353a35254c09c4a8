use serde::Deserialize;

use crate::domain::models::page::PageRequest;

/// 목록 조회 쿼리 (`?page=&limit=`)
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl ListUsersQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(1), self.limit.unwrap_or(0))
    }
}

/// 검색 쿼리 (`?q=&page=&limit=`)
#[derive(Debug, Default, Deserialize)]
pub struct SearchUsersQuery {
    pub q: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl SearchUsersQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(1), self.limit.unwrap_or(0))
    }
}
