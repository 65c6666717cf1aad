//! IRC message codec for tokio.
//!
//! This module provides a codec that encodes and decodes IRC [`Message`] types
//! using the tokio codec framework.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use crate::error;
use crate::line::LineCodec;
use crate::message::Message;

/// Tokio codec for encoding/decoding IRC messages.
///
/// Wraps [`LineCodec`] and parses lines into [`Message`] types. Like the
/// line codec, each decoded item carries its own `Result`, so one bad line
/// does not end the stream.
pub struct IrcCodec {
    inner: LineCodec,
}

impl IrcCodec {
    /// Create a new codec with the specified encoding.
    ///
    /// # Arguments
    /// * `label` - Encoding label (e.g., "utf-8", "iso-8859-1")
    pub fn new(label: &str) -> error::Result<Self> {
        LineCodec::new(label).map(|codec| Self { inner: codec })
    }

    /// Create a new codec with custom max line length.
    ///
    /// # Arguments
    /// * `label` - Encoding label
    /// * `max_len` - Maximum line length in bytes
    pub fn with_max_len(label: &str, max_len: usize) -> error::Result<Self> {
        LineCodec::with_max_len(label, max_len).map(|codec| Self { inner: codec })
    }

    /// Sanitize outgoing message data.
    ///
    /// Truncates at the first line ending, so a parameter carrying CR or LF
    /// cannot smuggle a second command onto the wire.
    pub fn sanitize(mut data: String) -> String {
        if let Some(pos) = data.find(['\r', '\n']) {
            data.truncate(pos);
        }
        data
    }
}

impl Decoder for IrcCodec {
    type Item = error::Result<Message>;
    type Error = error::ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> error::Result<Option<Self::Item>> {
        Ok(self
            .inner
            .decode(src)?
            .map(|line| line.and_then(|l| l.parse::<Message>())))
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> error::Result<Option<Self::Item>> {
        Ok(self
            .inner
            .decode_eof(src)?
            .map(|line| line.and_then(|l| l.parse::<Message>())))
    }
}

impl Encoder<Message> for IrcCodec {
    type Error = error::ProtocolError;

    fn encode(&mut self, msg: Message, dst: &mut BytesMut) -> error::Result<()> {
        let mut line = Self::sanitize(msg.to_string());
        line.push_str("\r\n");
        self.inner.encode(line, dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    #[test]
    fn test_sanitize_truncates_newline() {
        let result = IrcCodec::sanitize("PRIVMSG #test :hello\r\nQUIT".to_string());
        assert_eq!(result, "PRIVMSG #test :hello");
    }

    #[test]
    fn test_sanitize_clean() {
        let result = IrcCodec::sanitize("PRIVMSG #test :hello".to_string());
        assert_eq!(result, "PRIVMSG #test :hello");
    }

    #[test]
    fn test_encode_appends_crlf() {
        let mut codec = IrcCodec::new("utf-8").unwrap();
        let mut buf = BytesMut::new();
        codec.encode(Message::pong("abc"), &mut buf).unwrap();
        assert_eq!(&buf[..], b": PONG abc\r\n");
    }

    #[test]
    fn test_decode_messages_and_errors() {
        let mut codec = IrcCodec::new("utf-8").unwrap();
        let mut buf = BytesMut::from(":irc.example.com\r\nPING :abc\r\n");

        let first = codec.decode(&mut buf).unwrap().expect("an item");
        assert!(first.is_err());

        let second = codec.decode(&mut buf).unwrap().expect("an item").unwrap();
        assert_eq!(second.command, Command::PING);
        assert_eq!(second.params, vec!["abc"]);

        assert!(codec.decode(&mut buf).unwrap().is_none());
    }
}
