//! Channel name utilities.
//!
//! This module provides the channel-name grammar check and the lightweight
//! [`Channel`] identity type.
//!
//! # Reference
//! - RFC 2812 Section 1.3: Channel names

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::casemap::{irc_eq, irc_to_lower};
use crate::error::MessageParseError;

/// Valid channel prefix characters.
const CHANNEL_PREFIXES: &[char] = &['#', '&', '+', '!'];

/// Maximum number of characters after the prefix.
pub const CHANNEL_NAME_MAX_BODY: usize = 49;

/// Check a channel name against the grammar
/// `[#&+!][#&+!A-Za-z0-9]{1,49}` (whole string).
pub fn is_valid_channel_name(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if CHANNEL_PREFIXES.contains(&c) => {}
        _ => return false,
    }

    let mut len = 0;
    for c in chars {
        if !(c.is_ascii_alphanumeric() || CHANNEL_PREFIXES.contains(&c)) {
            return false;
        }
        len += 1;
    }

    (1..=CHANNEL_NAME_MAX_BODY).contains(&len)
}

/// Extension trait for checking if a string is a valid IRC channel name.
pub trait ChannelExt {
    /// Check if this string is a valid IRC channel name.
    fn is_channel_name(&self) -> bool;
}

impl ChannelExt for &str {
    fn is_channel_name(&self) -> bool {
        is_valid_channel_name(self)
    }
}

impl ChannelExt for String {
    fn is_channel_name(&self) -> bool {
        is_valid_channel_name(self)
    }
}

/// A named group of users.
///
/// Equality and hashing are case-folded with the IRC case mapping, so
/// `#Test` and `#test` name the same channel.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel {
    name: String,
    topic: Option<String>,
}

impl Channel {
    /// Create a channel, rejecting names that fail [`is_valid_channel_name`].
    pub fn new(name: impl Into<String>) -> Result<Self, MessageParseError> {
        let name = name.into();
        if !is_valid_channel_name(&name) {
            return Err(MessageParseError::InvalidChannelName(name));
        }
        Ok(Self { name, topic: None })
    }

    /// The channel name as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The last known topic, if any.
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Return a copy of this channel carrying `topic`.
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        irc_eq(&self.name, &other.name)
    }
}

impl Eq for Channel {}

impl Hash for Channel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        irc_to_lower(&self.name).hash(state);
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl std::str::FromStr for Channel {
    type Err = MessageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_valid_channels() {
        for name in ["#test", "&seCrET", "##golang", "!haha", "+plusChan"] {
            assert!(name.is_channel_name(), "{} should be valid", name);
        }
    }

    #[test]
    fn test_invalid_channels() {
        assert!(!"@what?".is_channel_name());
        assert!(!"'yankeedoo'".is_channel_name());
        assert!(!"channel".is_channel_name()); // no prefix
        assert!(!"#".is_channel_name()); // no body
        assert!(!"#chan nel".is_channel_name());
        assert!(!"#chan,nel".is_channel_name());
        assert!(!"".is_channel_name());
    }

    #[test]
    fn test_length_limit() {
        let longest = format!("#{}", "a".repeat(49));
        let too_long = format!("#{}", "a".repeat(50));
        assert!(longest.is_channel_name());
        assert!(!too_long.is_channel_name());
    }

    #[test]
    fn test_new_channel() {
        let ch = Channel::new("#test").unwrap();
        assert_eq!(ch.name(), "#test");
        assert_eq!(ch.topic(), None);
        assert_eq!(ch.to_string(), "#test");

        let err = Channel::new("nope").unwrap_err();
        assert_eq!(err.to_string(), "invalid channel name: 'nope'");
    }

    #[test]
    fn test_channel_equality() {
        let cases = [
            ("#test", "#TEST", true),
            ("+chan", "+chan", true),
            ("#another", "+another", false),
            ("&SeCrEt", "&secret", true),
        ];
        for (a, b, equal) in cases {
            let ch1 = Channel::new(a).unwrap();
            let ch2 = Channel::new(b).unwrap();
            assert_eq!(ch1 == ch2, equal, "{} == {}", a, b);
        }
    }

    #[test]
    fn test_channel_hash_is_case_folded() {
        let mut set = HashSet::new();
        set.insert(Channel::new("#Rust").unwrap());
        assert!(set.contains(&Channel::new("#rust").unwrap()));
    }
}
