//! minihttp - a minimal HTTP/1.1 server
//!
//! Health check, user-agent and path echo (with gzip negotiation), and
//! reading/writing files under a configured directory.

pub mod config;
pub mod http;
pub mod router;
pub mod server;
