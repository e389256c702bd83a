use dioxus::prelude::*;
use shared_types::{AppError, CaseExport};
use std::fmt;

use crate::config::ui_config;

/// Absolute URL of a backend path.
///
/// With no configured origin the page's own origin is used; the HTTP client
/// does not accept relative URLs in the browser.
pub async fn backend_url(path: &str) -> String {
    let backend = &ui_config().backend;
    if !backend.base_url.is_empty() {
        return backend.url(path);
    }
    let origin = document::eval("return window.location.origin;")
        .join::<String>()
        .await;
    with_origin(origin, path)
}

fn with_origin<E: fmt::Display>(origin: Result<String, E>, path: &str) -> String {
    match origin {
        Ok(origin) => format!("{origin}{path}"),
        Err(e) => {
            tracing::warn!(path, "could not read page origin, using relative path: {e}");
            path.to_string()
        }
    }
}

fn network_error(err: reqwest::Error) -> AppError {
    AppError::network(err.to_string())
}

/// Fetch the stored details of a past search from the backend's JSON export.
pub async fn fetch_case_export(query_id: i64) -> Result<CaseExport, AppError> {
    let url = backend_url(&format!("/export_case_json/{query_id}")).await;
    tracing::debug!(%url, "fetching case export");

    let response = reqwest::get(&url).await.map_err(network_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::from_status(
            status.as_u16(),
            format!("Case export failed with status {status}"),
        ));
    }

    // Failed queries are redirected to an HTML page, which lands here as a
    // decode error.
    response
        .json::<CaseExport>()
        .await
        .map_err(|e| AppError::internal(format!("Case data is not available: {e}")))
}
