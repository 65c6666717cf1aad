//! IRC message prefix types.
//!
//! An IRC message prefix identifies the origin of a message. It can be
//! absent, a server hostname, or a user's nick[!user]@host mask.
//!
//! # Reference
//! - RFC 2812 Section 2.3.1: Message format

use std::convert::Infallible;
use std::str::FromStr;

/// IRC message prefix - identifies the origin of a message.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prefix {
    /// No prefix. Renders as the empty string.
    #[default]
    Empty,
    /// Server origin (e.g., "irc.example.com")
    Hostname(String),
    /// Full user mask: `nickname!user@host`
    NicknameUserHost {
        nickname: String,
        user: String,
        host: String,
    },
    /// User mask without the user part: `nickname@host`
    NicknameHost { nickname: String, host: String },
}

impl Prefix {
    /// Decode a bare prefix token (without the leading `:`).
    ///
    /// This is a lenient decoder that does not validate the components:
    /// - empty input is [`Prefix::Empty`]
    /// - with `@`, the token is split at the *last* `@` into mask and host,
    ///   and the mask at its *first* `!` into nickname and user
    /// - without `@`, the whole token is the hostname
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            return Prefix::Empty;
        }

        match s.rsplit_once('@') {
            Some((mask, host)) => match mask.split_once('!') {
                Some((nickname, user)) => Prefix::NicknameUserHost {
                    nickname: nickname.to_owned(),
                    user: user.to_owned(),
                    host: host.to_owned(),
                },
                None => Prefix::NicknameHost {
                    nickname: mask.to_owned(),
                    host: host.to_owned(),
                },
            },
            None => Prefix::Hostname(s.to_owned()),
        }
    }

    /// Create a new user prefix from nick, user, and host components.
    ///
    /// # Example
    ///
    /// ```
    /// use slirc_client::Prefix;
    ///
    /// let prefix = Prefix::new("nick", "user", "host.example.com");
    /// assert_eq!(prefix.nick(), Some("nick"));
    /// assert_eq!(prefix.user(), Some("user"));
    /// assert_eq!(prefix.host(), Some("host.example.com"));
    /// assert_eq!(prefix.to_string(), "nick!user@host.example.com");
    /// ```
    pub fn new(nick: impl Into<String>, user: impl Into<String>, host: impl Into<String>) -> Self {
        Prefix::NicknameUserHost {
            nickname: nick.into(),
            user: user.into(),
            host: host.into(),
        }
    }

    /// Create a server prefix.
    pub fn hostname(host: impl Into<String>) -> Self {
        Prefix::Hostname(host.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Prefix::Empty)
    }

    /// Get the nickname if this is a user prefix.
    pub fn nick(&self) -> Option<&str> {
        match self {
            Prefix::NicknameUserHost { nickname, .. } | Prefix::NicknameHost { nickname, .. } => {
                Some(nickname)
            }
            _ => None,
        }
    }

    /// Get the username if this prefix carries one.
    pub fn user(&self) -> Option<&str> {
        match self {
            Prefix::NicknameUserHost { user, .. } => Some(user),
            _ => None,
        }
    }

    /// Get the hostname.
    pub fn host(&self) -> Option<&str> {
        match self {
            Prefix::Empty => None,
            Prefix::Hostname(host)
            | Prefix::NicknameUserHost { host, .. }
            | Prefix::NicknameHost { host, .. } => Some(host),
        }
    }
}

impl FromStr for Prefix {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Prefix::parse(s))
    }
}

impl From<&str> for Prefix {
    fn from(s: &str) -> Self {
        Prefix::parse(s)
    }
}
