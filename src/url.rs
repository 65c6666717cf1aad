//! `irc://` and `ircs://` server locators.
//!
//! Grammar: `irc[s]://host[:port][/[channel]]`. Without an explicit port,
//! `irc` defaults to 6667 and `ircs` to 6697 (RFC 7194).

use std::fmt;
use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1},
    combinator::{opt, rest, value},
    sequence::preceded,
    IResult,
};

use crate::chan::is_valid_channel_name;
use crate::error::UrlError;
use crate::server::SERVER_NAME_MAX_LEN;

/// Default port for plaintext IRC connections.
pub const DEFAULT_PORT: u16 = 6667;

/// Default port for TLS IRC connections.
pub const DEFAULT_TLS_PORT: u16 = 6697;

/// Locator scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Protocol {
    /// `irc://`
    Irc,
    /// `ircs://`
    Ircs,
}

impl Protocol {
    /// Port used when the locator names none.
    pub fn default_port(self) -> u16 {
        match self {
            Protocol::Irc => DEFAULT_PORT,
            Protocol::Ircs => DEFAULT_TLS_PORT,
        }
    }

    pub fn is_secure(self) -> bool {
        self == Protocol::Ircs
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Protocol::Irc => "irc",
            Protocol::Ircs => "ircs",
        })
    }
}

/// A parsed server locator.
///
/// The input text is kept and is what [`Display`](fmt::Display) writes.
///
/// ```
/// use slirc_client::ServerUrl;
///
/// let url: ServerUrl = "ircs://irc.example.com/#channel".parse().unwrap();
/// assert_eq!(url.hostname(), "irc.example.com");
/// assert_eq!(url.port(), 6697);
/// assert_eq!(url.channel(), Some("#channel"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServerUrl {
    raw: String,
    protocol: Protocol,
    hostname: String,
    port: u16,
    channel: Option<String>,
}

struct RawParts<'a> {
    protocol: Protocol,
    host: &'a str,
    port: Option<&'a str>,
    path: Option<&'a str>,
}

fn scheme(input: &str) -> IResult<&str, Protocol> {
    alt((
        value(Protocol::Ircs, tag("ircs://")),
        value(Protocol::Irc, tag("irc://")),
    ))(input)
}

fn host(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '.' || c == '-')(input)
}

fn locator(input: &str) -> IResult<&str, RawParts<'_>> {
    let (input, protocol) = scheme(input)?;
    let (input, host) = host(input)?;
    let (input, port) = opt(preceded(char(':'), digit1))(input)?;
    let (input, path) = opt(preceded(char('/'), rest))(input)?;
    Ok((
        input,
        RawParts {
            protocol,
            host,
            port,
            path,
        },
    ))
}

impl ServerUrl {
    /// Parse a locator string.
    ///
    /// Hostnames longer than [`SERVER_NAME_MAX_LEN`] are rejected.
    pub fn parse(s: &str) -> Result<Self, UrlError> {
        let invalid = || UrlError::Invalid(s.to_owned());

        let (remaining, parts) = locator(s).map_err(|_| invalid())?;
        if !remaining.is_empty() || parts.host.len() > SERVER_NAME_MAX_LEN {
            return Err(invalid());
        }

        let port = match parts.port {
            Some(digits) => match digits.parse::<u16>() {
                Ok(port) if port != 0 => port,
                _ => return Err(UrlError::InvalidPort(digits.to_owned())),
            },
            None => parts.protocol.default_port(),
        };

        let channel = match parts.path {
            None | Some("") => None,
            Some(name) if is_valid_channel_name(name) => Some(name.to_owned()),
            Some(_) => return Err(invalid()),
        };

        Ok(ServerUrl {
            raw: s.to_owned(),
            protocol: parts.protocol,
            hostname: parts.host.to_owned(),
            port,
            channel,
        })
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Explicit port, or the protocol default.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Channel named in the path, if any.
    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    /// Whether the locator asks for a TLS transport.
    pub fn is_secure(&self) -> bool {
        self.protocol.is_secure()
    }

    /// The text this locator was parsed from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for ServerUrl {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServerUrl::parse(s)
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
