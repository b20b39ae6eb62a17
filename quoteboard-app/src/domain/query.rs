use serde::{Deserialize, Serialize};

use super::quote::Quote;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Upvotes,
    Downvotes,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteFilter {
    /// Quotes anyone has upvoted (`upvotes > 0`).
    Voted,
    /// Quotes anyone has downvoted (`downvotes > 0`).
    NotVoted,
}

/// Normalized listing parameters. Raw query-string input is coerced here:
/// anything non-numeric, non-positive, or unrecognized falls back to its
/// default instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteQuery {
    pub page: u64,
    pub limit: u64,
    pub search: Option<String>,
    pub sort_by: SortKey,
    pub order: SortOrder,
    pub filter: Option<VoteFilter>,
}

impl QuoteQuery {
    pub fn from_raw(
        page: Option<&str>,
        limit: Option<&str>,
        search: Option<String>,
        sort_by: Option<&str>,
        order: Option<&str>,
        filter: Option<&str>,
    ) -> Self {
        Self {
            page: positive_or(page, DEFAULT_PAGE),
            limit: positive_or(limit, DEFAULT_LIMIT),
            search: search.filter(|s| !s.is_empty()),
            sort_by: match sort_by {
                Some("downvotes") => SortKey::Downvotes,
                Some("createdAt") => SortKey::CreatedAt,
                _ => SortKey::Upvotes,
            },
            order: match order {
                Some("asc") => SortOrder::Asc,
                _ => SortOrder::Desc,
            },
            filter: match filter {
                Some("voted") => Some(VoteFilter::Voted),
                Some("not_voted") => Some(VoteFilter::NotVoted),
                _ => None,
            },
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

impl Default for QuoteQuery {
    fn default() -> Self {
        Self::from_raw(None, None, None, None, None, None)
    }
}

fn positive_or(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

/// One page of listing results plus the pre-pagination total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePage {
    pub data: Vec<Quote>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl QuotePage {
    pub fn assemble(data: Vec<Quote>, total: u64, query: &QuoteQuery) -> Self {
        Self {
            data,
            page: query.page,
            limit: query.limit,
            total,
            total_pages: total.div_ceil(query.limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let query = QuoteQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert_eq!(query.sort_by, SortKey::Upvotes);
        assert_eq!(query.order, SortOrder::Desc);
        assert_eq!(query.filter, None);
    }

    #[test]
    fn invalid_numbers_coerce_to_defaults_instead_of_erroring() {
        let query = QuoteQuery::from_raw(Some("abc"), Some("0"), None, None, None, None);
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);

        let query = QuoteQuery::from_raw(Some("-2"), Some("25"), None, None, None, None);
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 25);
    }

    #[test]
    fn unknown_sort_and_order_fall_back() {
        let query = QuoteQuery::from_raw(None, None, None, Some("author"), Some("sideways"), None);
        assert_eq!(query.sort_by, SortKey::Upvotes);
        assert_eq!(query.order, SortOrder::Desc);

        let query = QuoteQuery::from_raw(None, None, None, Some("createdAt"), Some("asc"), None);
        assert_eq!(query.sort_by, SortKey::CreatedAt);
        assert_eq!(query.order, SortOrder::Asc);
    }

    #[test]
    fn voted_filter_parses_literally() {
        let query = QuoteQuery::from_raw(None, None, None, None, None, Some("voted"));
        assert_eq!(query.filter, Some(VoteFilter::Voted));
        let query = QuoteQuery::from_raw(None, None, None, None, None, Some("not_voted"));
        assert_eq!(query.filter, Some(VoteFilter::NotVoted));
        let query = QuoteQuery::from_raw(None, None, None, None, None, Some("mine"));
        assert_eq!(query.filter, None);
    }

    #[test]
    fn offset_skips_previous_pages() {
        let query = QuoteQuery::from_raw(Some("3"), Some("10"), None, None, None, None);
        assert_eq!(query.offset(), 20);
    }

    #[test]
    fn total_pages_rounds_up() {
        let query = QuoteQuery::default();
        assert_eq!(QuotePage::assemble(vec![], 25, &query).total_pages, 3);
        assert_eq!(QuotePage::assemble(vec![], 30, &query).total_pages, 3);
        assert_eq!(QuotePage::assemble(vec![], 0, &query).total_pages, 0);
    }
}
