use std::io::Write;

use flate2::{write::GzEncoder, Compression};

use crate::http::response::ContentEncoding;

/// Compresses `data` into a gzip container.
pub fn gzip(data: &[u8]) -> std::io::Result<(Vec<u8>, ContentEncoding)> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    let compressed = encoder.finish()?;
    Ok((compressed, ContentEncoding::Gzip))
}
