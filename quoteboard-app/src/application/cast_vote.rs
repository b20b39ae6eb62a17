use crate::domain::{CallerIdentity, Quote, Vote, VoteDirection, VoteTransition};
use crate::infrastructure::db::entities::quote;
use crate::infrastructure::db::vote_store;
use dashmap::DashMap;
use quoteboard_errors::AppError;
use sea_orm::{entity::*, DatabaseConnection, TransactionTrait};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// The vote engine. Resolves a caller's requested direction against their
/// prior vote and applies the result to the vote record and the quote's
/// cached counters.
///
/// Mutations on one quote are serialized: a per-quote async mutex covers
/// the whole read-modify-write, and the vote write plus counter write
/// share one database transaction, so concurrent votes can neither lose
/// updates nor leave the counters and the vote records disagreeing.
pub struct CastVote {
    db: DatabaseConnection,
    locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl CastVote {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            locks: DashMap::new(),
        }
    }

    pub async fn execute(
        &self,
        quote_id: Uuid,
        caller: &CallerIdentity,
        direction: VoteDirection,
    ) -> Result<Quote, AppError> {
        let lock = self.lock_for(quote_id);
        let _guard = lock.lock().await;

        let txn = self.db.begin().await?;

        let quote_model = quote::Entity::find_by_id(quote_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Quote not found".to_string()))?;

        let existing = vote_store::find_by_user_and_quote(&txn, caller.user_id, quote_id).await?;
        let transition =
            VoteTransition::resolve(existing.as_ref().map(|v| v.vote_type), direction)?;

        // Vote record first, counters second; both or neither persist.
        match &existing {
            Some(prior) => vote_store::set_direction(&txn, prior.id, direction).await?,
            None => {
                vote_store::insert(&txn, &Vote::new(caller.user_id, quote_id, direction)).await?
            }
        }

        let mut updated: Quote = quote_model.clone().into();
        updated.apply_transition(&transition);

        let mut active: quote::ActiveModel = quote_model.into();
        active.upvotes = Set(updated.upvotes);
        active.downvotes = Set(updated.downvotes);
        let stored = active.update(&txn).await?;

        txn.commit().await?;

        tracing::debug!(
            quote_id = %quote_id,
            user_id = %caller.user_id,
            ?transition,
            "vote applied"
        );
        Ok(stored.into())
    }

    fn lock_for(&self, quote_id: Uuid) -> Arc<Mutex<()>> {
        self.locks
            .entry(quote_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_registry_hands_out_one_mutex_per_quote() {
        let engine = CastVote::new(DatabaseConnection::default());

        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert!(Arc::ptr_eq(&engine.lock_for(a), &engine.lock_for(a)));
        assert!(!Arc::ptr_eq(&engine.lock_for(a), &engine.lock_for(b)));
    }
}
