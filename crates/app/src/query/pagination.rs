//! Pagination facet.

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// A 1-based page number and a page size within `1..=MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Clamp raw values: a zero page becomes the first page, a zero limit the
    /// default, and limits above the maximum are capped.
    #[must_use]
    pub fn new(page: u32, limit: u32) -> Self {
        let limit = match limit {
            0 => DEFAULT_LIMIT,
            limit => limit.min(MAX_LIMIT),
        };

        Self {
            page: page.max(1),
            limit,
        }
    }

    /// Parse query-string values; missing, non-numeric or non-positive values
    /// fall back to the defaults.
    #[must_use]
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(
            page.and_then(parse_positive).unwrap_or(DEFAULT_PAGE),
            limit.and_then(parse_positive).unwrap_or(DEFAULT_LIMIT),
        )
    }

    #[must_use]
    pub fn offset(self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    #[must_use]
    pub fn total_pages(self, total_count: u64) -> u64 {
        total_count.div_ceil(u64::from(self.limit.max(1)))
    }
}

fn parse_positive(raw: &str) -> Option<u32> {
    let value: u64 = raw.trim().parse().ok()?;

    match value {
        0 => None,
        value => Some(u32::try_from(value).unwrap_or(u32::MAX)),
    }
}
