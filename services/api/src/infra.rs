use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::header;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use workforce_intel::error::{AppError, QueryError};
use workforce_intel::export::to_csv_string;
use workforce_intel::normalize::tokenize;
use workforce_intel::SnapshotStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) store: Arc<SnapshotStore>,
    pub(crate) data_dir: PathBuf,
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Response encoding picked with `?format=`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum OutputFormat {
    #[default]
    Json,
    Csv,
}

/// Render a result table as a JSON array or a CSV download.
pub(crate) fn table_response<T: Serialize>(
    rows: Vec<T>,
    format: OutputFormat,
) -> Result<Response, AppError> {
    match format {
        OutputFormat::Json => Ok(Json(rows).into_response()),
        OutputFormat::Csv => {
            let body = to_csv_string(&rows)?;
            Ok(([(header::CONTENT_TYPE, mime::TEXT_CSV_UTF_8.as_ref())], body).into_response())
        }
    }
}

/// Split a `skills=Python;AWS` style parameter into separate skills.
pub(crate) fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(tokenize)
        .unwrap_or_default()
        .into_iter()
        .map(|token| token.display)
        .collect()
}

/// Split every repeated `--skill` value the same way as the `skills=` parameter.
pub(crate) fn split_each(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|raw| split_list(Some(raw)))
        .collect()
}

/// `Path` whose rejection is reported as a 400 `{"error": ...}` body.
pub(crate) struct ApiPath<T>(pub(crate) T);

/// `Query` whose rejection is reported as a 400 `{"error": ...}` body.
pub(crate) struct ApiQuery<T>(pub(crate) T);

/// `Json` whose rejection is reported as a 400 `{"error": ...}` body.
pub(crate) struct ApiJson<T>(pub(crate) T);

fn rejected(field: &'static str, reason: String) -> AppError {
    AppError::Query(QueryError::Validation { field, reason })
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|rejection| rejected("path", rejection.body_text()))
    }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection| rejected("query", rejection.body_text()))
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(request, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(|rejection| rejected("body", rejection.body_text()))
    }
}
