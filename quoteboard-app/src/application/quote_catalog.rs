use crate::domain::{Quote, QuotePage, QuoteQuery};
use crate::infrastructure::db::QuoteRepository;
use quoteboard_errors::AppError;
use uuid::Uuid;

/// Quote lifecycle: create, update, delete (with vote cascade), list.
/// Counter mutation is deliberately absent; that belongs to the vote
/// engine alone.
pub struct QuoteCatalog {
    quotes: QuoteRepository,
}

impl QuoteCatalog {
    pub fn new(quotes: QuoteRepository) -> Self {
        Self { quotes }
    }

    pub async fn create(&self, text: &str, author: Option<&str>) -> Result<Quote, AppError> {
        let quote = Quote::new(text, author)?;
        self.quotes.insert(&quote).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        text: Option<String>,
        author: Option<String>,
    ) -> Result<Quote, AppError> {
        if let Some(text) = &text {
            if text.trim().is_empty() {
                return Err(AppError::InvalidArgument(
                    "Quote text cannot be empty".to_string(),
                ));
            }
        }
        self.quotes.update_fields(id, text, author).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.quotes.delete(id).await
    }

    pub async fn list(&self, query: &QuoteQuery) -> Result<QuotePage, AppError> {
        self.quotes.list(query).await
    }
}
