//! Pagination query parameters and the paginated response envelope.

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};

use crate::error::AppError;

const DEFAULT_PAGE_SIZE: u32 = 20;
const MAX_PAGE_SIZE: u32 = 100;

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

impl PaginationParams {
    /// Applies defaults and bounds.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `page_size`: 20
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `page` is 0 or `page_size` is
    /// outside 1..=100.
    pub fn resolve(&self) -> Result<PageRequest, AppError> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page == 0 {
            return Err(AppError::bad_request(
                "Page must be greater than 0",
                json!({ "page": page }),
            ));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(AppError::bad_request(
                format!("Page size must be between 1 and {MAX_PAGE_SIZE}"),
                json!({ "page_size": page_size }),
            ));
        }

        Ok(PageRequest { page, page_size })
    }
}

/// Paginated list response.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: i64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: i64) -> Self {
        Self {
            items,
            page: request.page,
            page_size: request.page_size,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<u32>, page_size: Option<u32>) -> PaginationParams {
        PaginationParams { page, page_size }
    }

    #[test]
    fn test_defaults() {
        let req = params(None, None).resolve().unwrap();
        assert_eq!(req.offset(), 0);
        assert_eq!(req.limit(), 20);
    }

    #[test]
    fn test_page_2_with_default_size() {
        let req = params(Some(2), None).resolve().unwrap();
        assert_eq!(req.offset(), 20);
        assert_eq!(req.limit(), 20);
    }

    #[test]
    fn test_custom_page_and_size() {
        let req = params(Some(3), Some(50)).resolve().unwrap();
        assert_eq!(req.offset(), 100);
        assert_eq!(req.limit(), 50);
    }

    #[test]
    fn test_page_zero_is_error() {
        assert!(params(Some(0), None).resolve().is_err());
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(params(None, Some(0)).resolve().is_err());
        assert!(params(None, Some(1)).resolve().is_ok());
        assert!(params(None, Some(100)).resolve().is_ok());
        assert!(params(None, Some(101)).resolve().is_err());
    }

    #[test]
    fn test_query_string_parsing() {
        let p: PaginationParams = serde_json::from_str(r#"{"page":"4","page_size":"10"}"#).unwrap();
        assert_eq!(p.page, Some(4));
        assert_eq!(p.page_size, Some(10));

        assert!(serde_json::from_str::<PaginationParams>(r#"{"page":"abc"}"#).is_err());
    }

    #[test]
    fn test_paginated_response_shape() {
        let req = params(Some(2), Some(5)).resolve().unwrap();
        let body = serde_json::to_value(PaginatedResponse::new(vec![1, 2], req, 7)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({"items": [1, 2], "page": 2, "page_size": 5, "total": 7})
        );
    }
}
