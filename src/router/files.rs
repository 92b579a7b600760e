//! `/files/{name}` handlers.
//!
//! Paths are `directory.join(name)` with no normalisation. Nothing
//! coordinates concurrent access to the same file: two writers race and a
//! reader can see a partial write.

use std::path::PathBuf;

use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::router::RouteError;

const OCTET_STREAM: &str = "application/octet-stream";

fn resolve(request: &Request, name: &str) -> Result<PathBuf, RouteError> {
    let directory = request
        .directory
        .as_deref()
        .ok_or(RouteError::DirectoryNotConfigured)?;
    Ok(directory.join(name))
}

/// Returns the file's bytes, or 404 if no regular file exists at the path.
pub async fn read(request: &Request, name: &str) -> Result<Response, RouteError> {
    let path = resolve(request, name)?;

    let is_file = match tokio::fs::metadata(&path).await {
        Ok(meta) => meta.is_file(),
        Err(_) => false,
    };
    if !is_file {
        tracing::debug!(path = %path.display(), "File not found");
        return Ok(Response::not_found());
    }

    let contents = tokio::fs::read(&path).await?;

    Ok(ResponseBuilder::new(StatusCode::Ok)
        .content(OCTET_STREAM, contents)
        .build())
}

/// Creates or truncates the file and writes the request body to it.
pub async fn write(request: &Request, name: &str) -> Result<Response, RouteError> {
    let path = resolve(request, name)?;

    tokio::fs::write(&path, &request.body).await?;
    tracing::info!(path = %path.display(), bytes = request.body.len(), "File written");

    Ok(Response::status(StatusCode::Created))
}
