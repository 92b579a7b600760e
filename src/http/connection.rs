use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::config::Config;
use crate::http::parser::{find_head_end, parse_http_request};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::router;

/// One accepted connection. Serves exactly one request, then closes.
pub struct Connection<S> {
    stream: S,
    config: Arc<Config>,
    buffer: BytesMut,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, config: Arc<Config>) -> Self {
        let capacity = config.read_buffer_size.max(1);
        Self {
            stream,
            config,
            buffer: BytesMut::with_capacity(capacity),
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await? {
                    Some(req) => {
                        self.state = ConnectionState::Processing(req);
                    }
                    None => {
                        self.state = ConnectionState::Closed;
                    }
                },

                ConnectionState::Processing(req) => {
                    let response = router::route(req).await?;
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    // No keep-alive: one request per connection
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the header separator has arrived, then parses whatever
    /// was received. Returns `None` if the peer closed without sending
    /// anything.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        let chunk_size = self.config.read_buffer_size.max(1);
        let limit = self.config.max_request_bytes().max(chunk_size);
        let mut chunk = vec![0u8; chunk_size];

        while find_head_end(&self.buffer).is_none() {
            if self.buffer.len() >= limit {
                anyhow::bail!("request head exceeds {} bytes", limit);
            }

            let n = self.stream.read(&mut chunk).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    // Client closed connection
                    return Ok(None);
                }
                break;
            }

            self.buffer.extend_from_slice(&chunk[..n]);
        }

        let request = parse_http_request(&self.buffer, self.config.directory.as_deref())
            .map_err(|e| anyhow::anyhow!("HTTP parse error: {}", e))?;
        self.buffer.clear();

        Ok(Some(request))
    }
}
