//! IRC user modes.
//!
//! Only the subset needed by the `USER` registration message is modelled:
//! the mode letters themselves and the numeric bitmask that `USER` carries
//! in its second parameter.
//!
//! # Reference
//! - RFC 2812 Section 3.1.3 (USER) and 3.1.5 (user modes)

use std::fmt;

/// A single user mode letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum UserMode {
    /// `a` - user is flagged as away
    Away,
    /// `i` - invisible
    Invisible,
    /// `w` - receives WALLOPS
    ReceivesWallops,
    /// `r` - restricted connection
    RestrictedConnection,
    /// `o` - operator
    Operator,
    /// `O` - local operator
    LocalOperator,
    /// `s` - receives server notices
    ReceiptForServerNotices,
}

impl UserMode {
    /// Parse a mode letter.
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'a' => Self::Away,
            'i' => Self::Invisible,
            'w' => Self::ReceivesWallops,
            'r' => Self::RestrictedConnection,
            'o' => Self::Operator,
            'O' => Self::LocalOperator,
            's' => Self::ReceiptForServerNotices,
            _ => return None,
        })
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Away => 'a',
            Self::Invisible => 'i',
            Self::ReceivesWallops => 'w',
            Self::RestrictedConnection => 'r',
            Self::Operator => 'o',
            Self::LocalOperator => 'O',
            Self::ReceiptForServerNotices => 's',
        }
    }

    /// Bit used for this mode in the `USER` message.
    ///
    /// Only `w` (4) and `i` (8) have a numeric representation.
    pub fn numeric(self) -> Option<u8> {
        match self {
            Self::ReceivesWallops => Some(4),
            Self::Invisible => Some(8),
            _ => None,
        }
    }
}

impl fmt::Display for UserMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An ordered list of user modes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserModes(Vec<UserMode>);

impl UserModes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the `USER` mode bitmask. Unknown bits are ignored.
    pub fn from_bitmask(mask: u8) -> Self {
        let mut modes = Vec::new();
        if mask & 4 == 4 {
            modes.push(UserMode::ReceivesWallops);
        }
        if mask & 8 == 8 {
            modes.push(UserMode::Invisible);
        }
        Self(modes)
    }

    /// Encode as the `USER` mode bitmask.
    ///
    /// Modes without a numeric representation do not contribute.
    pub fn bitmask(&self) -> u8 {
        self.0
            .iter()
            .filter_map(|m| m.numeric())
            .fold(0, |acc, bit| acc | bit)
    }

    pub fn contains(&self, mode: UserMode) -> bool {
        self.0.contains(&mode)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserMode> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<UserMode>> for UserModes {
    fn from(modes: Vec<UserMode>) -> Self {
        Self(modes)
    }
}

impl FromIterator<UserMode> for UserModes {
    fn from_iter<I: IntoIterator<Item = UserMode>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmask() {
        let modes: UserModes = vec![UserMode::Invisible, UserMode::ReceivesWallops].into();
        assert_eq!(modes.bitmask(), 12);
        assert_eq!(UserModes::new().bitmask(), 0);

        // Away has no numeric form.
        let modes: UserModes = vec![UserMode::Away, UserMode::Invisible].into();
        assert_eq!(modes.bitmask(), 8);
    }

    #[test]
    fn test_from_bitmask() {
        let modes = UserModes::from_bitmask(12);
        assert!(modes.contains(UserMode::Invisible));
        assert!(modes.contains(UserMode::ReceivesWallops));
        assert!(UserModes::from_bitmask(0).is_empty());
    }

    #[test]
    fn test_chars() {
        for c in ['a', 'i', 'w', 'r', 'o', 'O', 's'] {
            assert_eq!(UserMode::from_char(c).map(UserMode::as_char), Some(c));
        }
        assert_eq!(UserMode::from_char('z'), None);
    }
}
