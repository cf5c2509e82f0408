//! Line-delimited JSON transport over stdin/stdout.
//!
//! Each JSON-RPC message is a single line terminated by `\n`.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{trace, warn};

use crate::error::TransportError;

/// Reads JSON-RPC messages from stdin, writes responses to stdout.
///
/// Uses line-delimited JSON: one complete JSON object per line.
/// This struct is generic over reader/writer for testability.
pub struct StdioTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
}

impl<R, W> StdioTransport<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new transport with the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
        }
    }

    /// Reads the next line from the input stream, trimmed.
    ///
    /// Returns `None` on EOF. Whitespace-only lines come back as
    /// `Some("")`. Invalid UTF-8 is replaced rather than rejected, so a
    /// bad line turns into a parse error downstream instead of ending
    /// the stream.
    pub async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        let mut buf = Vec::new();
        let bytes_read = self
            .reader
            .read_until(b'\n', &mut buf)
            .await
            .map_err(|e| TransportError::Read(e.to_string()))?;

        if bytes_read == 0 {
            return Ok(None);
        }

        let line = String::from_utf8(buf).unwrap_or_else(|e| {
            warn!(error = %e.utf8_error(), "input line is not valid UTF-8");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        });
        let trimmed = line.trim();
        trace!(len = trimmed.len(), "read message");
        Ok(Some(trimmed.to_string()))
    }

    /// Writes one response line and flushes it.
    pub async fn write_line(&mut self, message: &str) -> Result<(), TransportError> {
        trace!(len = message.len(), "writing message");

        self.writer
            .write_all(message.as_bytes())
            .await
            .map_err(|e| TransportError::Write(e.to_string()))?;

        self.writer
            .write_all(b"\n")
            .await
            .map_err(|e| TransportError::Write(e.to_string()))?;

        self.writer
            .flush()
            .await
            .map_err(|e| TransportError::Write(e.to_string()))?;

        Ok(())
    }

    /// Consumes the transport, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[tokio::test]
    async fn read_single_line() {
        let input = b"{\"jsonrpc\":\"2.0\"}\n";
        let mut transport = StdioTransport::new(Cursor::new(input.to_vec()), Vec::new());

        let line = transport.read_line().await.expect("read");
        assert_eq!(line, Some("{\"jsonrpc\":\"2.0\"}".to_string()));
    }

    #[tokio::test]
    async fn read_eof_returns_none() {
        let mut transport = StdioTransport::new(Cursor::new(Vec::<u8>::new()), Vec::new());

        let line = transport.read_line().await.expect("read");
        assert_eq!(line, None);
    }

    #[tokio::test]
    async fn read_last_line_without_newline() {
        let mut transport = StdioTransport::new(Cursor::new(b"tail".to_vec()), Vec::new());

        assert_eq!(transport.read_line().await.expect("r"), Some("tail".into()));
        assert_eq!(transport.read_line().await.expect("r"), None);
    }

    #[tokio::test]
    async fn whitespace_line_is_empty() {
        let mut transport = StdioTransport::new(Cursor::new(b"  \t \r\n".to_vec()), Vec::new());

        assert_eq!(transport.read_line().await.expect("r"), Some(String::new()));
    }

    #[tokio::test]
    async fn write_appends_newline() {
        let mut transport = StdioTransport::new(Cursor::new(Vec::<u8>::new()), Vec::new());

        transport.write_line("{\"ok\":true}").await.expect("write");

        let output = String::from_utf8(transport.into_writer()).expect("utf8");
        assert_eq!(output, "{\"ok\":true}\n");
    }

    #[tokio::test]
    async fn invalid_utf8_is_replaced() {
        let mut transport =
            StdioTransport::new(Cursor::new(vec![b'a', 0xff, b'b', b'\n']), Vec::new());

        let line = transport.read_line().await.expect("read");
        assert_eq!(line, Some("a\u{fffd}b".to_string()));
    }
}
