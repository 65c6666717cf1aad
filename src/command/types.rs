//! IRC command types.
//!
//! A [`Command`] is the protocol verb of a message. Parameters live on the
//! [`Message`](crate::Message) itself, so the verb is a small value type.
//!
//! # Reference
//! - RFC 2812: Internet Relay Chat: Client Protocol
//! - IRCv3 capability negotiation: <https://ircv3.net/specs/extensions/capability-negotiation>

use std::borrow::Cow;
use std::hash::{Hash, Hasher};

use crate::response::Response;

/// Keywords with their own variant, in wire spelling.
const KEYWORDS: [&str; 13] = [
    "PASS", "NICK", "USER", "OPER", "QUIT", "JOIN", "PART", "PRIVMSG", "NOTICE", "PING", "PONG",
    "ERROR", "CAP",
];

/// IRC command verb.
///
/// Known keywords get their own variant. Three-digit numerics become
/// [`Command::Response`] when the code is known and [`Command::Numeric`]
/// otherwise. Anything else is captured verbatim in [`Command::Raw`].
///
/// Equality and hashing follow what the command parses back to, so a value
/// spelled through a catch-all variant equals its canonical form:
/// `Raw("nick")` equals [`Command::NICK`] and `Numeric(1)` equals
/// `Response(RPL_WELCOME)`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Command {
    // === Connection Registration (RFC 2812 Section 3.1) ===
    /// `PASS password`
    PASS,
    /// `NICK nickname`
    NICK,
    /// `USER username mode * realname`
    USER,
    /// `OPER name password`
    OPER,
    /// `QUIT [message]`
    QUIT,

    // === Channel Operations (RFC 2812 Section 3.2) ===
    /// `JOIN channel`
    JOIN,
    /// `PART channel [message]`
    PART,

    // === Messaging (RFC 2812 Section 3.3) ===
    /// `PRIVMSG target text`
    PRIVMSG,
    /// `NOTICE target text`
    NOTICE,

    // === Miscellaneous (RFC 2812 Section 3.7) ===
    /// `PING server`
    PING,
    /// `PONG server`
    PONG,
    /// `ERROR message`
    ERROR,

    // === IRCv3 Extensions ===
    /// `CAP [target] subcommand [capabilities]`
    CAP,

    // === Numeric Response ===
    /// Known numeric response from server
    Response(Response),
    /// Three-digit numeric with no [`Response`] entry
    Numeric(u16),

    // === Unknown/Raw Commands ===
    /// Unknown command captured as raw
    Raw(String),
}

/// Identity of a command as it reads back off the wire.
#[derive(PartialEq, Eq, Hash)]
enum WireToken<'a> {
    Code(u16),
    Word(Cow<'a, str>),
}

impl Command {
    /// A numeric reply, as [`Command::Response`] when the code is known.
    pub fn numeric(code: u16) -> Command {
        match Response::from_code(code) {
            Some(resp) => Command::Response(resp),
            None => Command::Numeric(code),
        }
    }

    fn wire_token(&self) -> WireToken<'_> {
        match self {
            Command::Response(resp) => WireToken::Code(resp.code()),
            Command::Numeric(code) if *code < 1000 => WireToken::Code(*code),
            Command::Numeric(code) => WireToken::Word(Cow::Owned(code.to_string())),
            Command::Raw(raw) if raw.len() == 3 && raw.bytes().all(|b| b.is_ascii_digit()) => raw
                .parse()
                .map_or(WireToken::Word(Cow::Borrowed(raw.as_str())), WireToken::Code),
            Command::Raw(raw) => {
                let word = KEYWORDS
                    .iter()
                    .find(|kw| kw.eq_ignore_ascii_case(raw))
                    .map_or(raw.as_str(), |kw| *kw);
                WireToken::Word(Cow::Borrowed(word))
            }
            named => WireToken::Word(Cow::Borrowed(named.keyword().unwrap_or_default())),
        }
    }

    /// Whether this is a three-digit server reply.
    pub fn is_numeric_reply(&self) -> bool {
        matches!(self, Command::Response(_) | Command::Numeric(_))
    }

    /// The numeric code, for replies.
    pub fn code(&self) -> Option<u16> {
        match self {
            Command::Response(resp) => Some(resp.code()),
            Command::Numeric(code) => Some(*code),
            _ => None,
        }
    }
}

impl PartialEq for Command {
    fn eq(&self, other: &Self) -> bool {
        self.wire_token() == other.wire_token()
    }
}

impl Eq for Command {}

impl Hash for Command {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.wire_token().hash(state);
    }
}

impl From<Response> for Command {
    fn from(resp: Response) -> Self {
        Command::Response(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric_reply() {
        assert!(Command::Response(Response::RPL_WELCOME).is_numeric_reply());
        assert!(Command::Numeric(999).is_numeric_reply());
        assert!(!Command::JOIN.is_numeric_reply());
        assert!(!Command::Raw("FOO".to_string()).is_numeric_reply());
    }

    #[test]
    fn test_numeric_constructor_prefers_known_codes() {
        assert!(matches!(Command::numeric(1), Command::Response(Response::RPL_WELCOME)));
        assert!(matches!(Command::numeric(999), Command::Numeric(999)));
    }

    #[test]
    fn test_equality_follows_wire_form() {
        use std::collections::HashSet;

        assert_eq!(Command::Raw("nick".to_string()), Command::NICK);
        assert_eq!(Command::Raw("PING".to_string()), Command::PING);
        assert_eq!(Command::Numeric(1), Command::Response(Response::RPL_WELCOME));
        assert_eq!(Command::Raw("001".to_string()), Command::Numeric(1));
        assert_eq!(Command::Raw("1000".to_string()), Command::Numeric(1000));
        assert_ne!(Command::Raw("WALLOPS".to_string()), Command::Raw("wallops".to_string()));
        assert_ne!(Command::Numeric(42), Command::Numeric(43));

        let set: HashSet<Command> = [
            Command::NICK,
            Command::Raw("Nick".to_string()),
            Command::Numeric(1),
            Command::from(Response::RPL_WELCOME),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_code() {
        assert_eq!(Command::from(Response::RPL_USERHOST).code(), Some(302));
        assert_eq!(Command::Numeric(999).code(), Some(999));
        assert_eq!(Command::PING.code(), None);
    }
}
