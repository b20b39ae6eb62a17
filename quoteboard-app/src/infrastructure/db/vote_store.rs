//! Vote record persistence, usable both on the pooled connection and
//! inside a transaction (the vote engine always goes through one).

use super::entities::vote;
use crate::domain::{Vote, VoteDirection};
use quoteboard_errors::AppError;
use sea_orm::{entity::*, query::*, ConnectionTrait};
use uuid::Uuid;

pub async fn find_by_user_and_quote<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    quote_id: Uuid,
) -> Result<Option<Vote>, AppError> {
    let model = vote::Entity::find()
        .filter(vote::Column::UserId.eq(user_id))
        .filter(vote::Column::QuoteId.eq(quote_id))
        .one(conn)
        .await?;
    model.map(Vote::try_from).transpose()
}

pub async fn insert<C: ConnectionTrait>(conn: &C, vote: &Vote) -> Result<(), AppError> {
    let active = vote::ActiveModel {
        id: Set(vote.id),
        user_id: Set(vote.user_id),
        quote_id: Set(vote.quote_id),
        vote_type: Set(vote.vote_type.as_str().to_string()),
        created_at: Set(Some(chrono::Utc::now())),
    };
    active.insert(conn).await?;
    Ok(())
}

/// Flips an existing vote record to `direction`.
pub async fn set_direction<C: ConnectionTrait>(
    conn: &C,
    vote_id: Uuid,
    direction: VoteDirection,
) -> Result<(), AppError> {
    let active = vote::ActiveModel {
        id: Set(vote_id),
        vote_type: Set(direction.as_str().to_string()),
        ..Default::default()
    };
    active.update(conn).await?;
    Ok(())
}

pub async fn delete_for_quote<C: ConnectionTrait>(
    conn: &C,
    quote_id: Uuid,
) -> Result<u64, AppError> {
    let result = vote::Entity::delete_many()
        .filter(vote::Column::QuoteId.eq(quote_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
