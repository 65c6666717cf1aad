//! Nickname validation utilities.
//!
//! This module provides the nickname grammar check and the [`UserInfo`]
//! identity type.
//!
//! # Reference
//! - RFC 2812 Section 2.3.1: Message format (nickname definition)

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::casemap::{irc_eq, irc_to_lower};
use crate::error::MessageParseError;

/// Special characters allowed anywhere in a nickname: ``_ [ ] \ ^ { } | ` ``
#[inline]
fn is_special(c: char) -> bool {
    matches!(c, '_' | '[' | ']' | '\\' | '^' | '{' | '}' | '|' | '`')
}

/// Check a nickname against the grammar: first character a letter or
/// special, then any number of letters, digits, specials or `-`.
///
/// Accepting `-` after the first character goes beyond the letter, special
/// and digit classes of the strict grammar; servers accept it and it is
/// common in real nicknames. A leading `-` is still rejected.
pub fn is_valid_nickname(nick: &str) -> bool {
    let mut chars = nick.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || is_special(c) => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || is_special(c) || c == '-')
}

/// Extension trait for checking if a string is a valid IRC nickname.
pub trait NickExt {
    /// Check if this string is a valid IRC nickname.
    ///
    /// # Examples
    ///
    /// ```
    /// use slirc_client::NickExt;
    ///
    /// assert!("nick".is_valid_nick());
    /// assert!("[away]".is_valid_nick());
    /// assert!(!"John Doe".is_valid_nick());
    /// assert!(!"1up".is_valid_nick());
    /// ```
    fn is_valid_nick(&self) -> bool;
}

impl NickExt for &str {
    fn is_valid_nick(&self) -> bool {
        is_valid_nickname(self)
    }
}

impl NickExt for String {
    fn is_valid_nick(&self) -> bool {
        is_valid_nickname(self)
    }
}

/// A user, distinguished from other users by a unique nickname.
///
/// Equality and hashing use the IRC case mapping on the nickname only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserInfo {
    nickname: String,
    operator: bool,
}

impl UserInfo {
    /// Create a user, rejecting nicknames that fail [`is_valid_nickname`].
    pub fn new(nickname: impl Into<String>, operator: bool) -> Result<Self, MessageParseError> {
        let nickname = nickname.into();
        if !is_valid_nickname(&nickname) {
            return Err(MessageParseError::InvalidNickname(nickname));
        }
        Ok(Self { nickname, operator })
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn is_operator(&self) -> bool {
        self.operator
    }
}

impl PartialEq for UserInfo {
    fn eq(&self, other: &Self) -> bool {
        irc_eq(&self.nickname, &other.nickname)
    }
}

impl Eq for UserInfo {}

impl Hash for UserInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        irc_to_lower(&self.nickname).hash(state);
    }
}

impl fmt::Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.nickname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_nicknames() {
        for nick in ["username", "John", "_bot", "[away]", "a-b", "x9", "`tick", "{x}|^"] {
            assert!(is_valid_nickname(nick), "{} should be valid", nick);
        }
    }

    #[test]
    fn test_invalid_nicknames() {
        for nick in ["", "John Doe", "9lives", "-dash", "nick!", "nick@host", "ünï"] {
            assert!(!is_valid_nickname(nick), "{} should be invalid", nick);
        }
    }

    #[test]
    fn test_new_user_info() {
        let user = UserInfo::new("username", false).unwrap();
        assert_eq!(user.nickname(), "username");
        assert!(!user.is_operator());

        assert_eq!(
            UserInfo::new("John Doe", false),
            Err(MessageParseError::InvalidNickname("John Doe".to_string()))
        );
    }

    #[test]
    fn test_user_equality_is_case_folded() {
        let a = UserInfo::new("Nick[a]", false).unwrap();
        let b = UserInfo::new("nick{A}", true).unwrap();
        assert_eq!(a, b);
    }
}
