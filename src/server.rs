//! Server descriptors.

use std::fmt;

use crate::url::ServerUrl;

/// Maximum length of a server name (RFC 2812 Section 1.1).
pub const SERVER_NAME_MAX_LEN: usize = 63;

/// Hostname and port of an IRC server.
///
/// Ordering is by hostname, then port.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerInfo {
    hostname: String,
    port: u16,
}

impl ServerInfo {
    pub fn new(hostname: impl Into<String>, port: u16) -> Self {
        Self {
            hostname: hostname.into(),
            port,
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl From<&ServerUrl> for ServerInfo {
    fn from(url: &ServerUrl) -> Self {
        ServerInfo::new(url.hostname(), url.port())
    }
}

impl From<ServerUrl> for ServerInfo {
    fn from(url: ServerUrl) -> Self {
        ServerInfo::from(&url)
    }
}

impl fmt::Display for ServerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hostname, self.port)
    }
}
