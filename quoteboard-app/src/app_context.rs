use crate::application::{Accounts, CastVote, QuoteCatalog};
use crate::infrastructure::auth::TokenIssuer;
use crate::infrastructure::db::{QuoteRepository, UserRepository};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub accounts: Arc<Accounts>,
    pub catalog: Arc<QuoteCatalog>,
    pub cast_vote: Arc<CastVote>,
    pub tokens: TokenIssuer,
}

impl AppContext {
    pub fn new(db: DatabaseConnection, token_secret: &str) -> Self {
        let tokens = TokenIssuer::new(token_secret);
        Self {
            accounts: Arc::new(Accounts::new(UserRepository::new(db.clone()), tokens.clone())),
            catalog: Arc::new(QuoteCatalog::new(QuoteRepository::new(db.clone()))),
            cast_vote: Arc::new(CastVote::new(db)),
            tokens,
        }
    }
}
