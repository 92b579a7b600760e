use std::collections::HashMap;
use std::path::Path;

use crate::http::request::{Method, Request};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No `\r\n\r\n` separator in the buffer yet.
    #[error("request head is incomplete")]
    Incomplete,
    #[error("start line must be `METHOD /TARGET VERSION`")]
    InvalidStartLine,
    #[error("request head is not valid UTF-8")]
    InvalidEncoding,
}

const HEAD_SEPARATOR: &[u8] = b"\r\n\r\n";

/// Parses a raw request buffer.
///
/// The body is everything after the first blank line, taken verbatim with no
/// Content-Length check. `directory` is attached to the request for the file
/// routes.
pub fn parse_http_request(buf: &[u8], directory: Option<&Path>) -> Result<Request, ParseError> {
    // Look for header/body separator
    let head_end = find_head_end(buf).ok_or(ParseError::Incomplete)?;
    let head = std::str::from_utf8(&buf[..head_end]).map_err(|_| ParseError::InvalidEncoding)?;
    let body = buf[head_end + HEAD_SEPARATOR.len()..].to_vec();

    let mut lines = head.split("\r\n");

    // Start line
    let start_line = lines.next().ok_or(ParseError::InvalidStartLine)?;
    let tokens: Vec<&str> = start_line.split_whitespace().collect();
    let &[method, target, version] = tokens.as_slice() else {
        return Err(ParseError::InvalidStartLine);
    };
    if !target.starts_with('/') {
        return Err(ParseError::InvalidStartLine);
    }

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(": ").unwrap_or((line, ""));
        headers.insert(key.trim().to_ascii_lowercase(), value.trim().to_string());
    }

    if let Some(encoding) = headers.get_mut("accept-encoding") {
        if lists_gzip(encoding) {
            *encoding = "gzip".to_string();
        }
    }

    Ok(Request {
        method: Method::from_token(method),
        target: target.to_string(),
        version: version.to_string(),
        headers,
        body,
        directory: directory.map(Path::to_path_buf),
    })
}

/// Position of the first `\r\n\r\n`, if any.
pub fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.windows(HEAD_SEPARATOR.len())
        .position(|w| w == HEAD_SEPARATOR)
}

// `gzip` must be a distinct member of the list, not a substring of one.
fn lists_gzip(value: &str) -> bool {
    value
        .split(',')
        .map(str::trim)
        .any(|member| member.eq_ignore_ascii_case("gzip"))
}
