//! Line-based codec for tokio.
//!
//! This module provides a codec that reads/writes newline-terminated lines,
//! with optional encoding support.
//!
//! Decoding yields one `Result` per line: a line that is too long or cannot
//! be decoded is reported as an item, and the stream keeps going. Only I/O
//! failures end the stream.

#[cfg(feature = "encoding")]
use std::borrow::Cow;
#[cfg(feature = "encoding")]
use std::io;

use bytes::{Buf, BytesMut};
#[cfg(feature = "encoding")]
use encoding::Encoding;
use tokio_util::codec::{Decoder, Encoder};

use crate::error;

/// Default upper bound for inbound lines, terminator included.
pub const DEFAULT_MAX_LINE_LEN: usize = 8191;

/// One decoded line, or the reason it was dropped.
pub type LineResult = error::Result<String>;

/// Line-based codec that handles newline-terminated messages.
pub struct LineCodec {
    #[cfg(feature = "encoding")]
    encoding: &'static Encoding,
    /// Index of next byte to check for newline
    next_index: usize,
    /// Maximum line length
    max_len: usize,
    /// Bytes dropped so far from an overlong line, while skipping to its end
    discarding: Option<usize>,
}

impl LineCodec {
    /// Create a new codec with the specified encoding.
    ///
    /// # Arguments
    /// * `label` - Encoding label (e.g., "utf-8"). Only honoured with the
    ///   `encoding` feature; otherwise lines are UTF-8.
    pub fn new(label: &str) -> error::Result<Self> {
        Self::with_max_len(label, DEFAULT_MAX_LINE_LEN)
    }

    /// Create a new codec with custom max line length.
    pub fn with_max_len(_label: &str, max_len: usize) -> error::Result<Self> {
        Ok(Self {
            #[cfg(feature = "encoding")]
            encoding: match Encoding::for_label(_label.as_bytes()) {
                Some(enc) => enc,
                None => {
                    return Err(error::ProtocolError::Io(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("Unknown encoding: {}", _label),
                    )));
                }
            },
            next_index: 0,
            max_len,
            discarding: None,
        })
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    fn decode_line(&self, line: &[u8]) -> LineResult {
        let line = match line {
            [rest @ .., b'\r', b'\n'] | [rest @ .., b'\n'] => rest,
            other => other,
        };

        #[cfg(feature = "encoding")]
        {
            let (cow, _enc, _had_errors) = self.encoding.decode(line);
            Ok(cow.into_owned())
        }

        #[cfg(not(feature = "encoding"))]
        {
            String::from_utf8(line.to_vec()).map_err(error::ProtocolError::from)
        }
    }
}

impl Decoder for LineCodec {
    type Item = LineResult;
    type Error = error::ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> error::Result<Option<LineResult>> {
        loop {
            // Look for newline starting from where we left off
            let newline = src[self.next_index..]
                .iter()
                .position(|b| *b == b'\n')
                .map(|offset| self.next_index + offset);

            match (self.discarding, newline) {
                (Some(dropped), Some(end)) => {
                    src.advance(end + 1);
                    self.next_index = 0;
                    self.discarding = None;
                    return Ok(Some(Err(error::ProtocolError::MessageTooLong {
                        actual: dropped + end + 1,
                        limit: self.max_len,
                    })));
                }
                (Some(dropped), None) => {
                    self.discarding = Some(dropped + src.len());
                    src.clear();
                    self.next_index = 0;
                    return Ok(None);
                }
                (None, Some(end)) => {
                    let line = src.split_to(end + 1);
                    self.next_index = 0;

                    if line.len() > self.max_len {
                        return Ok(Some(Err(error::ProtocolError::MessageTooLong {
                            actual: line.len(),
                            limit: self.max_len,
                        })));
                    }

                    return Ok(Some(self.decode_line(&line)));
                }
                (None, None) => {
                    if src.len() > self.max_len {
                        // Skip to the end of this line before reporting it.
                        self.discarding = Some(0);
                        self.next_index = 0;
                        continue;
                    }

                    // No complete line yet - remember where we stopped
                    self.next_index = src.len();
                    return Ok(None);
                }
            }
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> error::Result<Option<LineResult>> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }

        if let Some(dropped) = self.discarding.take() {
            return Ok(Some(Err(error::ProtocolError::MessageTooLong {
                actual: dropped,
                limit: self.max_len,
            })));
        }

        if src.is_empty() {
            return Ok(None);
        }

        // Unterminated last line
        let line = src.split_to(src.len());
        self.next_index = 0;
        Ok(Some(self.decode_line(&line)))
    }
}

impl Encoder<String> for LineCodec {
    type Error = error::ProtocolError;

    fn encode(&mut self, msg: String, dst: &mut BytesMut) -> error::Result<()> {
        #[cfg(feature = "encoding")]
        {
            let (cow_bytes, _enc, _had_errors) = self.encoding.encode(&msg);
            match cow_bytes {
                Cow::Borrowed(b) => dst.extend_from_slice(b),
                Cow::Owned(v) => dst.extend_from_slice(&v),
            }
        }

        #[cfg(not(feature = "encoding"))]
        {
            dst.extend(msg.into_bytes());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_line(item: Option<LineResult>) -> String {
        item.expect("a line").expect("a valid line")
    }

    #[test]
    fn test_decode_complete_line() {
        let mut codec = LineCodec::new("utf-8").unwrap();
        let mut buf = BytesMut::from("PING :test\r\n");

        let result = codec.decode(&mut buf).unwrap();
        assert_eq!(ok_line(result), "PING :test");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_decode_partial_line() {
        let mut codec = LineCodec::new("utf-8").unwrap();
        let mut buf = BytesMut::from("PING :");

        assert!(codec.decode(&mut buf).unwrap().is_none());

        buf.extend_from_slice(b"abc\nNICK x\n");
        assert_eq!(ok_line(codec.decode(&mut buf).unwrap()), "PING :abc");
        assert_eq!(ok_line(codec.decode(&mut buf).unwrap()), "NICK x");
    }

    #[test]
    fn test_decode_too_long_is_skipped() {
        let mut codec = LineCodec::with_max_len("utf-8", 10).unwrap();
        let mut buf = BytesMut::from("this is way too long\nPING :x\n");

        let result = codec.decode(&mut buf).unwrap();
        assert!(matches!(
            result,
            Some(Err(error::ProtocolError::MessageTooLong { actual: 21, limit: 10 }))
        ));
        assert_eq!(ok_line(codec.decode(&mut buf).unwrap()), "PING :x");
    }

    #[test]
    fn test_decode_too_long_across_reads() {
        let mut codec = LineCodec::with_max_len("utf-8", 8).unwrap();
        let mut buf = BytesMut::from("0123456789");

        assert!(codec.decode(&mut buf).unwrap().is_none());
        assert!(buf.is_empty());

        buf.extend_from_slice(b"abc\nok\n");
        let result = codec.decode(&mut buf).unwrap();
        assert!(matches!(
            result,
            Some(Err(error::ProtocolError::MessageTooLong { actual: 14, .. }))
        ));
        assert_eq!(ok_line(codec.decode(&mut buf).unwrap()), "ok");
    }

    #[cfg(not(feature = "encoding"))]
    #[test]
    fn test_decode_invalid_utf8_continues() {
        let mut codec = LineCodec::new("utf-8").unwrap();
        let mut buf = BytesMut::from(&b"PRIVMSG #a :\xff\xfe\nPING :x\n"[..]);

        assert!(matches!(codec.decode(&mut buf).unwrap(), Some(Err(_))));
        assert_eq!(ok_line(codec.decode(&mut buf).unwrap()), "PING :x");
    }

    #[test]
    fn test_decode_eof_unterminated() {
        let mut codec = LineCodec::new("utf-8").unwrap();
        let mut buf = BytesMut::from("ERROR :bye");

        assert_eq!(ok_line(codec.decode_eof(&mut buf).unwrap()), "ERROR :bye");
        assert!(codec.decode_eof(&mut buf).unwrap().is_none());
    }

    #[test]
    fn test_encode() {
        let mut codec = LineCodec::new("utf-8").unwrap();
        let mut buf = BytesMut::new();

        codec.encode("PONG :test\r\n".to_string(), &mut buf).unwrap();
        assert_eq!(&buf[..], b"PONG :test\r\n");
    }
}
