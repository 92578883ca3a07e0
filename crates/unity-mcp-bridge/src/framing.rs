//! JSON framing for the editor socket.
//!
//! The editor bridge speaks bare JSON: one object per direction, no length
//! prefix and no delimiter. A response is complete once the bytes received
//! so far parse as a whole JSON value.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use unity_mcp_core::{Error, Result};

const READ_CHUNK_SIZE: usize = 8192;

/// Write a JSON message to the given writer.
pub async fn write_json<W, T>(writer: &mut W, msg: &T) -> Result<()>
where
    W: AsyncWrite + Unpin,
    T: Serialize,
{
    let json = serde_json::to_vec(msg)?;
    writer.write_all(&json).await?;
    writer.flush().await?;
    Ok(())
}

/// Read one JSON message, accumulating chunks until it parses.
///
/// Fails if the peer closes before a complete value arrived or if the
/// message grows past `max_bytes`.
pub async fn read_json<R, T>(reader: &mut R, max_bytes: usize) -> Result<T>
where
    R: AsyncRead + Unpin,
    T: DeserializeOwned,
{
    let mut buf = Vec::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            return Err(if buf.is_empty() {
                Error::Connection("editor closed the connection without responding".to_string())
            } else {
                Error::Protocol(format!(
                    "connection closed after {} bytes of an incomplete response",
                    buf.len()
                ))
            });
        }

        buf.extend_from_slice(&chunk[..n]);
        if buf.len() > max_bytes {
            return Err(Error::Protocol(format!(
                "response exceeds {max_bytes} bytes"
            )));
        }

        match serde_json::from_slice::<T>(&buf) {
            Ok(msg) => return Ok(msg),
            Err(e) if e.is_eof() => continue,
            Err(e) => return Err(e.into()),
        }
    }
}
