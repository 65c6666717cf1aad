//! Error types for the IRC client library.
//!
//! This module defines error types for protocol-level errors, message
//! parsing failures, advisory validation failures, locator parsing and
//! connection lifecycle errors.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level protocol errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// An inbound line exceeded the framing limit.
    #[error("line too long: {actual} bytes (limit {limit})")]
    MessageTooLong {
        /// Number of bytes seen before the line was dropped.
        actual: usize,
        /// Configured limit.
        limit: usize,
    },

    /// An inbound line was not valid UTF-8.
    #[error("invalid utf-8 in line: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Failed to parse an IRC message.
    #[error("invalid message: {string}")]
    InvalidMessage {
        /// The raw message string.
        string: String,
        /// The underlying parse error.
        #[source]
        cause: MessageParseError,
    },
}

/// Errors encountered when parsing or constructing IRC messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// Message was empty.
    #[error("empty message")]
    EmptyMessage,

    /// Nothing followed the prefix, or the command token was empty.
    #[error("missing command")]
    MissingCommand,

    /// Command token contains characters no IRC verb can have.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// A message was built with a nickname that fails the nickname grammar.
    #[error("invalid nickname: {0}")]
    InvalidNickname(String),

    /// A message was built with a channel name that fails the channel grammar.
    #[error("invalid channel name: '{0}'")]
    InvalidChannelName(String),

    /// Not enough parameters to project a typed body.
    #[error("not enough arguments: expected {expected}, got {got}")]
    NotEnoughArguments {
        /// Expected number of arguments.
        expected: usize,
        /// Actual number of arguments.
        got: usize,
    },

    /// A parameter could not be interpreted (e.g. a non-numeric USER mode).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The command has no typed body.
    #[error("no typed body for command {0}")]
    UnexpectedCommand(String),
}

/// Advisory failures reported by [`Message::validate`](crate::Message::validate).
///
/// These never block construction or transmission.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// Serialized length including CR-LF exceeds the maximum.
    #[error("message length is {length} bytes, which exceeds the allowed maximum of {max} bytes")]
    TooLong {
        /// Serialized length including the terminator.
        length: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// More parameters than the protocol allows.
    #[error("message has {count} parameters, which exceeds the allowed maximum of {max} parameters")]
    TooManyParams {
        /// Parameter count.
        count: usize,
        /// Maximum allowed count.
        max: usize,
    },
}

/// Errors encountered when parsing `irc://` and `ircs://` locators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UrlError {
    /// The string does not match `irc[s]://host[:port][/channel]`.
    #[error("invalid URL: {0}")]
    Invalid(String),

    /// The port is not a number in `1..=65535`.
    #[error("invalid port in URL: {0}")]
    InvalidPort(String),
}

/// Errors surfaced by a [`ClientConnection`](crate::connection::ClientConnection).
#[cfg(feature = "tokio")]
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConnectionError {
    /// `open` was called while a transport is live.
    #[error("connection has already been established")]
    AlreadyEstablished,

    /// Dialing the server failed.
    #[error("connection to IRC server {addr} failed: {source}")]
    Dial {
        /// `host:port` that was dialed.
        addr: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing the transport failed.
    #[error("transport error: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be framed or parsed.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A loop task ended abnormally.
    #[error("connection task failed: {0}")]
    Task(String),

    /// Queued output could not be flushed before the close deadline. The
    /// transport was dropped with the remainder unsent.
    #[error("close did not finish flushing within {0:?}")]
    CloseTimeout(std::time::Duration),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProtocolError::MessageTooLong {
            actual: 1024,
            limit: 512,
        };
        assert_eq!(format!("{}", err), "line too long: 1024 bytes (limit 512)");

        let err = MessageParseError::NotEnoughArguments {
            expected: 4,
            got: 1,
        };
        assert_eq!(
            format!("{}", err),
            "not enough arguments: expected 4, got 1"
        );
    }

    #[test]
    fn test_validation_display() {
        let err = ValidationError::TooManyParams { count: 16, max: 15 };
        assert_eq!(
            err.to_string(),
            "message has 16 parameters, which exceeds the allowed maximum of 15 parameters"
        );
    }

    #[test]
    fn test_protocol_error_chaining() {
        let parse_err = MessageParseError::MissingCommand;
        let protocol_err = ProtocolError::InvalidMessage {
            string: ":irc.example.com".to_string(),
            cause: parse_err.clone(),
        };

        let source = std::error::Error::source(&protocol_err);
        assert!(source.is_some());
        assert_eq!(source.unwrap().to_string(), parse_err.to_string());
    }

    #[test]
    fn test_error_conversion() {
        let io_err =
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let protocol_err: ProtocolError = io_err.into();

        match protocol_err {
            ProtocolError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[cfg(feature = "tokio")]
    #[test]
    fn test_connection_error_display() {
        assert_eq!(
            ConnectionError::AlreadyEstablished.to_string(),
            "connection has already been established"
        );
    }
}
