//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 layer: one request per connection, no
//! chunked encoding, no keep-alive.
//!
//! - **`connection`**: per-connection pipeline (read, parse, route, write)
//! - **`parser`**: turns a raw byte buffer into a [`request::Request`]
//! - **`request`**: request representation and header lookup
//! - **`response`**: response representation with fixed header order
//! - **`writer`**: serializes a response to its wire bytes
//!
//! # Connection lifecycle
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the header block
//!        └──────┬──────┘
//!               │ Request parsed
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route (may touch the file system)
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```
//!
//! Any error along the way ends the connection without a response.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
