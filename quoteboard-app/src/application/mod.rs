mod accounts;
mod cast_vote;
mod quote_catalog;

pub use accounts::Accounts;
pub use cast_vote::CastVote;
pub use quote_catalog::QuoteCatalog;
