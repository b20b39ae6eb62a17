mod query;
mod quote;
mod user;
mod vote;

pub use query::{QuotePage, QuoteQuery, SortKey, SortOrder, VoteFilter, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use quote::{Quote, DEFAULT_AUTHOR};
pub use user::{CallerIdentity, User};
pub use vote::{Vote, VoteDirection, VoteTransition};
