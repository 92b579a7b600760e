use std::collections::HashMap;
use std::path::PathBuf;

/// HTTP request methods.
///
/// Only GET and POST are routed; any other token is kept verbatim in
/// `Extension` so that the router can answer it with 404 instead of the
/// parser rejecting the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// Any other method token, routed to 404
    Extension(String),
}

/// A parsed HTTP request.
///
/// Header names are stored lowercased; a repeated header keeps its last value.
/// `directory` is the configured base path for file routes, attached by the
/// parser.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request target; the parser only accepts targets starting with `/`
    pub target: String,
    /// HTTP version as sent by the client (captured, not interpreted)
    pub version: String,
    /// Request headers keyed by lowercase name
    pub headers: HashMap<String, String>,
    /// Everything after the header block, verbatim
    pub body: Vec<u8>,
    /// Base directory for `/files/*`
    pub directory: Option<PathBuf>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<Method>,
    target: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
    body: Vec<u8>,
    directory: Option<PathBuf>,
}

impl Method {
    /// Parses a method token. Matching is case-sensitive, as in HTTP.
    ///
    /// # Example
    ///
    /// ```
    /// # use minihttp::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("get"), Method::Extension("get".into()));
    /// ```
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Extension(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Extension(token) => token,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            target: None,
            version: None,
            headers: HashMap::new(),
            body: Vec::new(),
            directory: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Adds a header; the name is lowercased like the parser does.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(key.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            target: self.target.ok_or("target missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
            body: self.body,
            directory: self.directory,
        })
    }
}

impl Request {
    /// Looks up a header by name, case-insensitively.
    ///
    /// Returns `None` when the header was not sent; each route decides
    /// whether that is an error.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(&key.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    /// Negotiated response encoding. The parser collapses an
    /// `Accept-Encoding` list containing `gzip` to exactly `gzip`.
    pub fn accepts_gzip(&self) -> bool {
        self.header("accept-encoding") == Some("gzip")
    }
}
