use super::assets;
use super::error::ApiError;
use crate::commands;
use crate::model::{Expense, ExpenseFields, Stats};
use crate::Config;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::Serialize;

type ApiResult<T> = Result<T, ApiError>;

/// The body returned by update and delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl<T> From<commands::Out<T>> for MessageResponse
where
    T: Serialize + Clone + std::fmt::Debug,
{
    fn from(out: commands::Out<T>) -> Self {
        Self {
            message: out.message().to_string(),
        }
    }
}

pub(super) async fn list_expenses(State(config): State<Config>) -> ApiResult<Json<Vec<Expense>>> {
    let out = commands::list_expenses(&config).await?;
    Ok(Json(out.into_structure().unwrap_or_default()))
}

pub(super) async fn create_expense(
    State(config): State<Config>,
    body: Result<Json<ExpenseFields>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Expense>)> {
    let Json(fields) = body?;
    let out = commands::insert_expense(&config, fields).await?;
    let expense = out
        .into_structure()
        .ok_or_else(|| ApiError::Internal("Insert returned no expense".to_string()))?;
    Ok((StatusCode::CREATED, Json(expense)))
}

pub(super) async fn update_expense(
    State(config): State<Config>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<ExpenseFields>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    let Json(fields) = body?;
    let out = commands::update_expense(&config, id, fields).await?;
    Ok(Json(out.into()))
}

pub(super) async fn delete_expense(
    State(config): State<Config>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    let out = commands::delete_expense(&config, id).await?;
    Ok(Json(out.into()))
}

pub(super) async fn get_stats(State(config): State<Config>) -> ApiResult<Json<Stats>> {
    let out = commands::stats(&config).await?;
    Ok(Json(out.into_structure().unwrap_or_default()))
}

pub(super) async fn index() -> Html<&'static str> {
    Html(assets::INDEX_HTML)
}

pub(super) async fn style() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], assets::STYLE_CSS)
}

pub(super) async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        assets::SCRIPT_JS,
    )
}

/// Plain liveness check.
pub(super) async fn debug() -> &'static str {
    "Expense tracker is running"
}
