//! 페이지네이션 값 객체
//!
//! 목록/검색 요청의 페이지 번호 정규화와 결과 묶음을 담당합니다.

/// 한 페이지 기본 크기
pub const DEFAULT_PAGE_LIMIT: u64 = 10;

/// 한 페이지 최대 크기
pub const MAX_PAGE_LIMIT: u64 = 100;

const MAX_OFFSET: u64 = i64::MAX as u64;

/// 정규화된 페이지 요청
///
/// - `page`는 1부터 시작하며 0은 1로 취급합니다.
/// - `limit`이 0이면 [`DEFAULT_PAGE_LIMIT`], [`MAX_PAGE_LIMIT`]을 넘으면 최대값으로 맞춥니다.
///
/// ```rust,ignore
/// let page = PageRequest::new(0, 500);
/// assert_eq!((page.page, page.limit), (1, 100));
/// assert_eq!(page.offset(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    pub fn new(page: u64, limit: u64) -> Self {
        let page = page.max(1);
        let limit = match limit {
            0 => DEFAULT_PAGE_LIMIT,
            n => n.min(MAX_PAGE_LIMIT),
        };

        Self { page, limit }
    }

    /// 건너뛸 레코드 수
    ///
    /// MongoDB `skip`이 i64로 인코딩되므로 `i64::MAX`를 넘지 않습니다.
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.limit)
            .min(MAX_OFFSET)
    }

    /// 전체 건수에 대한 총 페이지 수 (올림)
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_LIMIT)
    }
}

/// 한 페이지 분량의 결과와 필터에 맞는 전체 건수
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }
}
