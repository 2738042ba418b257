//! List query parameters: 1-indexed paging plus an optional exact title match.

use crate::error::DomainError;

/// Message returned whenever `page`/`perPage` cannot be used.
pub const INVALID_PAGINATION_MESSAGE: &str =
    "page and perPage query parameters must be valid numbers";

/// One page of a listing. `page` starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    per_page: u64,
    skip: u64,
}

impl PageRequest {
    pub fn new(page: u64, per_page: u64) -> Result<Self, DomainError> {
        if page == 0 || per_page == 0 {
            return Err(DomainError::invalid_pagination(INVALID_PAGINATION_MESSAGE));
        }
        // The driver takes the limit as i64.
        if i64::try_from(per_page).is_err() {
            return Err(DomainError::invalid_pagination(INVALID_PAGINATION_MESSAGE));
        }
        // The driver sends skip as i64 too.
        let skip = (page - 1)
            .checked_mul(per_page)
            .filter(|skip| i64::try_from(*skip).is_ok())
            .ok_or_else(|| DomainError::invalid_pagination(INVALID_PAGINATION_MESSAGE))?;
        Ok(Self {
            page,
            per_page,
            skip,
        })
    }

    /// Parses raw query-string values. Both must be present positive integers.
    pub fn parse(page: Option<&str>, per_page: Option<&str>) -> Result<Self, DomainError> {
        let page = parse_positive(page)?;
        let per_page = parse_positive(per_page)?;
        Self::new(page, per_page)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Number of documents preceding this page.
    pub fn skip(&self) -> u64 {
        self.skip
    }

    pub fn limit(&self) -> u64 {
        self.per_page
    }
}

fn parse_positive(raw: Option<&str>) -> Result<u64, DomainError> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|n| *n > 0)
        .ok_or_else(|| DomainError::invalid_pagination(INVALID_PAGINATION_MESSAGE))
}

/// A validated list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieQuery {
    pub page: PageRequest,
    /// Exact match on `title`; `None` lists everything.
    pub title: Option<String>,
}

impl MovieQuery {
    pub fn new(page: PageRequest, title: Option<String>) -> Self {
        Self { page, title }
    }
}
