use super::entities::{quote, Quote as QuoteEntity};
use super::vote_store;
use crate::domain::{Quote, QuotePage, QuoteQuery, SortKey, SortOrder, VoteFilter};
use quoteboard_errors::AppError;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{entity::*, query::*, DatabaseConnection, TransactionTrait};
use uuid::Uuid;

#[derive(Clone)]
pub struct QuoteRepository {
    db: DatabaseConnection,
}

impl QuoteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(&self, quote: &Quote) -> Result<Quote, AppError> {
        let active = quote::ActiveModel {
            id: Set(quote.id),
            text: Set(quote.text.clone()),
            author: Set(quote.author.clone()),
            upvotes: Set(quote.upvotes),
            downvotes: Set(quote.downvotes),
            created_at: Set(Some(chrono::Utc::now())),
        };
        let model = active.insert(&self.db).await?;
        Ok(model.into())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Quote>, AppError> {
        let model = QuoteEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    /// Partial update of text/author. Counters are off limits here; only
    /// the vote engine touches those.
    pub async fn update_fields(
        &self,
        id: Uuid,
        text: Option<String>,
        author: Option<String>,
    ) -> Result<Quote, AppError> {
        let model = QuoteEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Quote not found".to_string()))?;

        let mut active: quote::ActiveModel = model.into();
        if let Some(text) = text {
            active.text = Set(text);
        }
        if let Some(author) = author {
            active.author = Set(author);
        }
        let model = active.update(&self.db).await?;
        Ok(model.into())
    }

    /// Deletes the quote and all of its votes in one transaction.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let result = QuoteEntity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(
                "Quote not found or already deleted".to_string(),
            ));
        }
        vote_store::delete_for_quote(&txn, id).await?;

        txn.commit().await?;
        Ok(())
    }

    /// The listing query: optional case-insensitive text search, the
    /// literal voted/not_voted counter filters, sorting, and pagination.
    /// `total` counts matches before the page window is applied.
    pub async fn list(&self, query: &QuoteQuery) -> Result<QuotePage, AppError> {
        let mut select = QuoteEntity::find();

        if let Some(search) = &query.search {
            select = select.filter(Expr::col(quote::Column::Text).ilike(format!("%{search}%")));
        }

        match query.filter {
            Some(VoteFilter::Voted) => {
                select = select.filter(quote::Column::Upvotes.gt(0));
            }
            Some(VoteFilter::NotVoted) => {
                select = select.filter(quote::Column::Downvotes.gt(0));
            }
            None => {}
        }

        let sort_column = match query.sort_by {
            SortKey::Upvotes => quote::Column::Upvotes,
            SortKey::Downvotes => quote::Column::Downvotes,
            SortKey::CreatedAt => quote::Column::CreatedAt,
        };
        select = match query.order {
            SortOrder::Asc => select.order_by_asc(sort_column),
            SortOrder::Desc => select.order_by_desc(sort_column),
        };

        let total = select.clone().count(&self.db).await?;
        let models = select
            .offset(query.offset())
            .limit(query.limit)
            .all(&self.db)
            .await?;

        let data = models.into_iter().map(Into::into).collect();
        Ok(QuotePage::assemble(data, total, query))
    }
}
