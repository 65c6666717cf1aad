use std::time::Duration;

use crate::line::DEFAULT_MAX_LINE_LEN;

/// Tuning for a [`ClientConnection`](super::ClientConnection).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConnectionConfig {
    /// Capacity of the inbound and outbound message channels.
    pub buffer_size: usize,
    /// Longest inbound line accepted, terminator included. Longer lines are
    /// dropped and reported on the error stream.
    pub max_line_len: usize,
    /// Encoding label for the wire. Labels other than UTF-8 require the
    /// `encoding` feature.
    pub encoding: String,
    /// TCP keepalive idle time for the default dialer. `None` disables it.
    pub keepalive: Option<Duration>,
    /// How long [`close`](super::ClientConnection::close) waits for queued
    /// output to flush before dropping the transport.
    pub close_timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            buffer_size: 64,
            max_line_len: DEFAULT_MAX_LINE_LEN,
            encoding: "utf-8".to_owned(),
            keepalive: Some(Duration::from_secs(120)),
            close_timeout: Duration::from_secs(5),
        }
    }
}
