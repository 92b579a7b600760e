//! Request routing
//!
//! Maps a parsed [`Request`] to one of five fixed behaviours. Branches are
//! checked in table order and the first (method, pattern) match wins:
//!
//! | Method | Target           | Handler                              |
//! |--------|------------------|--------------------------------------|
//! | GET    | `/`              | 200, no body                         |
//! | GET    | `/user-agent`    | 200, echoes the `User-Agent` header  |
//! | GET    | `/echo/{text}`   | 200, echoes `{text}`, maybe gzipped  |
//! | GET    | `/files/{name}`  | file contents or 404                 |
//! | POST   | `/files/{name}`  | writes the body, 201                 |
//! | *      | *                | 404                                  |

pub mod encoding;
pub mod files;

use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};

const ECHO_PREFIX: &str = "/echo/";
const FILES_PREFIX: &str = "/files/";

/// Errors that abort handling of a request. No response is produced for
/// these; the connection is dropped.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("missing required header `{0}`")]
    MissingHeader(&'static str),
    #[error("no directory configured for file routes")]
    DirectoryNotConfigured,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Dispatches a request to its handler.
pub async fn route(request: &Request) -> Result<Response, RouteError> {
    let target = request.target.as_str();

    let response = match request.method {
        Method::GET if target == "/" => Response::status(StatusCode::Ok),
        Method::GET if target == "/user-agent" => user_agent(request)?,
        Method::GET if target.starts_with(ECHO_PREFIX) => {
            echo(request, &target[ECHO_PREFIX.len()..])?
        }
        Method::GET if target.starts_with(FILES_PREFIX) => {
            files::read(request, &target[FILES_PREFIX.len()..]).await?
        }
        Method::POST if target.starts_with(FILES_PREFIX) => {
            files::write(request, &target[FILES_PREFIX.len()..]).await?
        }
        _ => Response::not_found(),
    };

    tracing::debug!(
        method = request.method.as_str(),
        target = %request.target,
        status = response.status.as_u16(),
        "Request routed"
    );

    Ok(response)
}

fn user_agent(request: &Request) -> Result<Response, RouteError> {
    let agent = request
        .header("user-agent")
        .ok_or(RouteError::MissingHeader("user-agent"))?;

    Ok(Response::text(agent.as_bytes()))
}

fn echo(request: &Request, text: &str) -> Result<Response, RouteError> {
    let body = text.as_bytes().to_vec();

    if request.accepts_gzip() {
        let (body, encoding) = encoding::gzip(&body)?;
        return Ok(ResponseBuilder::new(StatusCode::Ok)
            .encoding(encoding)
            .content("text/plain", body)
            .build());
    }

    Ok(Response::text(body))
}
