use axum::extract::{Path, Query, State};
use axum::routing::{get, patch};
use axum::{Json, Router};
use quoteboard_app::domain::{Quote, QuotePage, QuoteQuery, VoteDirection};
use quoteboard_app::AppContext;
use quoteboard_errors::AppError;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::extract::AuthUser;

/// Raw listing parameters. Numbers arrive as strings on purpose: invalid
/// values coerce to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListParams {
    page: Option<String>,
    limit: Option<String>,
    search: Option<String>,
    sort_by: Option<String>,
    order: Option<String>,
    filter: Option<String>,
}

#[derive(Deserialize)]
struct CreateQuote {
    text: String,
    author: Option<String>,
}

#[derive(Deserialize, Default)]
struct UpdateQuote {
    text: Option<String>,
    author: Option<String>,
}

pub fn router() -> Router<AppContext> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", patch(update).delete(remove))
        .route("/{id}/upvote", patch(upvote))
        .route("/{id}/downvote", patch(downvote))
}

async fn list(
    State(ctx): State<AppContext>,
    _caller: AuthUser,
    Query(params): Query<ListParams>,
) -> Result<Json<QuotePage>, AppError> {
    let query = QuoteQuery::from_raw(
        params.page.as_deref(),
        params.limit.as_deref(),
        params.search,
        params.sort_by.as_deref(),
        params.order.as_deref(),
        params.filter.as_deref(),
    );
    Ok(Json(ctx.catalog.list(&query).await?))
}

async fn create(
    State(ctx): State<AppContext>,
    _caller: AuthUser,
    Json(body): Json<CreateQuote>,
) -> Result<Json<Quote>, AppError> {
    let quote = ctx.catalog.create(&body.text, body.author.as_deref()).await?;
    Ok(Json(quote))
}

async fn update(
    State(ctx): State<AppContext>,
    _caller: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateQuote>,
) -> Result<Json<Quote>, AppError> {
    let quote = ctx.catalog.update(id, body.text, body.author).await?;
    Ok(Json(quote))
}

async fn remove(
    State(ctx): State<AppContext>,
    _caller: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    ctx.catalog.delete(id).await?;
    Ok(Json(json!({ "deleted": true })))
}

async fn upvote(
    State(ctx): State<AppContext>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Quote>, AppError> {
    let quote = ctx
        .cast_vote
        .execute(id, &caller, VoteDirection::Upvote)
        .await?;
    Ok(Json(quote))
}

async fn downvote(
    State(ctx): State<AppContext>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Quote>, AppError> {
    let quote = ctx
        .cast_vote
        .execute(id, &caller, VoteDirection::Downvote)
        .await?;
    Ok(Json(quote))
}
