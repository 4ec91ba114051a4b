use serde::Deserialize;
use utoipa::IntoParams;

use crate::utils::errors::AppError;

/// Raw pagination query parameters. Both arrive as strings so that a
/// malformed value reaches [`PageQuery::parse`] instead of being rejected
/// by the query extractor with a different error shape.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Items per page. Required positive integer.
    pub per: Option<String>,
    /// 1-based page number. Required positive integer.
    pub page: Option<String>,
}

/// Validated pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub per: i64,
    pub page: i64,
}

impl PageQuery {
    /// Both parameters are required and must parse as integers >= 1;
    /// anything else is the shared field-validation failure.
    pub fn parse(&self) -> Result<Page, AppError> {
        let per = parse_positive(self.per.as_deref())?;
        let page = parse_positive(self.page.as_deref())?;

        Ok(Page { per, page })
    }
}

fn parse_positive(value: Option<&str>) -> Result<i64, AppError> {
    value
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|n| *n >= 1)
        .ok_or_else(|| AppError::bad_request("欄位未填寫正確"))
}

impl Page {
    pub fn limit(&self) -> i64 {
        self.per
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per)
    }
}
