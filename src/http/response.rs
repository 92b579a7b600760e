/// HTTP status codes the server can emit.
///
/// The set is closed: anything the router cannot answer with one of these is
/// a fault on the connection, not a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use minihttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Content coding applied to a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Gzip,
}

impl ContentEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentEncoding::Gzip => "gzip",
        }
    }
}

/// A complete HTTP response.
///
/// Headers are an ordered list; the writer emits them in exactly this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Builder for responses.
///
/// Header order is fixed by `build`: Content-Encoding, Content-Type,
/// Content-Length. A response without `content` carries no headers at all.
///
/// # Example
///
/// ```
/// # use minihttp::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content("text/plain", b"abc".to_vec())
///     .build();
/// assert_eq!(response.header("Content-Length"), Some("3"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    encoding: Option<ContentEncoding>,
    content: Option<(&'static str, Vec<u8>)>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            encoding: None,
            content: None,
        }
    }

    /// Declares that the body has already been encoded with `encoding`.
    pub fn encoding(mut self, encoding: ContentEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Sets the body and its media type.
    pub fn content(mut self, content_type: &'static str, body: Vec<u8>) -> Self {
        self.content = Some((content_type, body));
        self
    }

    pub fn build(self) -> Response {
        let mut headers = Vec::new();

        let Some((content_type, body)) = self.content else {
            return Response {
                status: self.status,
                headers,
                body: Vec::new(),
            };
        };

        if let Some(encoding) = self.encoding {
            headers.push(("Content-Encoding".to_string(), encoding.as_str().to_string()));
        }
        headers.push(("Content-Type".to_string(), content_type.to_string()));
        // Length of the body as sent, i.e. after any encoding
        headers.push(("Content-Length".to_string(), body.len().to_string()));

        Response {
            status: self.status,
            headers,
            body,
        }
    }
}

impl Response {
    /// A bare status response with no headers and no body.
    pub fn status(status: StatusCode) -> Self {
        ResponseBuilder::new(status).build()
    }

    /// Creates a 200 OK `text/plain` response with the given body.
    pub fn text(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content("text/plain", body.into())
            .build()
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        Self::status(StatusCode::NotFound)
    }

    /// First header value with the given name, compared case-insensitively.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
