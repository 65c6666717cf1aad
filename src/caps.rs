//! IRCv3 capability bookkeeping.
//!
//! This module provides the set of known protocol capabilities, their wire
//! tokens, and [`CapabilitySet`], the per-connection record of which
//! capabilities the server has enabled.
//!
//! # Reference
//! - IRCv3 Capability Negotiation: <https://ircv3.net/specs/extensions/capability-negotiation>
//! - Individual capability specifications: <https://ircv3.net/irc/>

use std::collections::HashMap;
use std::str::FromStr;

/// Definition of a known IRCv3 capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityDef {
    /// The capability.
    pub capability: Capability,
    /// Minimum CAP version that advertises this capability (301 or 302)
    pub version: u32,
    /// Human-readable description
    pub description: &'static str,
}

/// Known IRCv3 capability types.
///
/// Unknown tokens are not modelled; [`Capability::from_str`] rejects them
/// and [`CapabilitySet`] skips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capability {
    /// Notify of account login/logout
    AccountNotify,
    /// Add account tag to messages
    AccountTag,
    /// Notify of away status changes
    AwayNotify,
    /// Message batching
    Batch,
    /// Notify of capability changes
    CapNotify,
    /// Notify of hostname changes
    ChgHost,
    /// Echo messages back to sender
    EchoMessage,
    /// Extended JOIN with account and realname
    ExtendedJoin,
    /// Notify of channel invites
    InviteNotify,
    /// User and channel metadata
    Metadata,
    /// MONITOR command for presence tracking
    Monitor,
    /// Show all user prefix modes in NAMES
    MultiPrefix,
    /// SASL authentication
    Sasl,
    /// Server-time message tags
    ServerTime,
    /// STARTTLS upgrade
    Tls,
    /// Full nick!user@host in NAMES
    UserhostInNames,
}

impl Capability {
    /// Every known capability, in wire-token order.
    pub const ALL: [Capability; 16] = [
        Self::AccountNotify,
        Self::AccountTag,
        Self::AwayNotify,
        Self::Batch,
        Self::CapNotify,
        Self::ChgHost,
        Self::EchoMessage,
        Self::ExtendedJoin,
        Self::InviteNotify,
        Self::Metadata,
        Self::Monitor,
        Self::MultiPrefix,
        Self::Sasl,
        Self::ServerTime,
        Self::Tls,
        Self::UserhostInNames,
    ];

    /// Look up a capability by its wire token. Any `=value` suffix is ignored.
    pub fn from_token(token: &str) -> Option<Self> {
        let name = token.split('=').next().unwrap_or(token);
        Some(match name {
            "account-notify" => Self::AccountNotify,
            "account-tag" => Self::AccountTag,
            "away-notify" => Self::AwayNotify,
            "batch" => Self::Batch,
            "cap-notify" => Self::CapNotify,
            "chghost" => Self::ChgHost,
            "echo-message" => Self::EchoMessage,
            "extended-join" => Self::ExtendedJoin,
            "invite-notify" => Self::InviteNotify,
            "metadata" => Self::Metadata,
            "monitor" => Self::Monitor,
            "multi-prefix" => Self::MultiPrefix,
            "sasl" => Self::Sasl,
            "server-time" => Self::ServerTime,
            "tls" => Self::Tls,
            "userhost-in-names" => Self::UserhostInNames,
            _ => return None,
        })
    }

    /// The registry entry for this capability.
    pub fn def(&self) -> &'static CapabilityDef {
        // CAPABILITIES is ordered like ALL.
        &CAPABILITIES[*self as usize]
    }
}

impl AsRef<str> for Capability {
    fn as_ref(&self) -> &str {
        match self {
            Self::AccountNotify => "account-notify",
            Self::AccountTag => "account-tag",
            Self::AwayNotify => "away-notify",
            Self::Batch => "batch",
            Self::CapNotify => "cap-notify",
            Self::ChgHost => "chghost",
            Self::EchoMessage => "echo-message",
            Self::ExtendedJoin => "extended-join",
            Self::InviteNotify => "invite-notify",
            Self::Metadata => "metadata",
            Self::Monitor => "monitor",
            Self::MultiPrefix => "multi-prefix",
            Self::Sasl => "sasl",
            Self::ServerTime => "server-time",
            Self::Tls => "tls",
            Self::UserhostInNames => "userhost-in-names",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// Error returned when a token names no known capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown capability: {0}")]
pub struct UnknownCapability(pub String);

impl FromStr for Capability {
    type Err = UnknownCapability;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::from_token(s).ok_or_else(|| UnknownCapability(s.to_owned()))
    }
}

/// Static registry of known capabilities, ordered like [`Capability::ALL`].
pub const CAPABILITIES: &[CapabilityDef] = &[
    CapabilityDef {
        capability: Capability::AccountNotify,
        version: 301,
        description: "ACCOUNT command on login/logout of other clients",
    },
    CapabilityDef {
        capability: Capability::AccountTag,
        version: 302,
        description: "Account tag on messages from logged-in users",
    },
    CapabilityDef {
        capability: Capability::AwayNotify,
        version: 301,
        description: "Instant AWAY status changes of other clients",
    },
    CapabilityDef {
        capability: Capability::Batch,
        version: 302,
        description: "Server marks related messages as a batch",
    },
    CapabilityDef {
        capability: Capability::CapNotify,
        version: 302,
        description: "CAP NEW/DEL when server capabilities change",
    },
    CapabilityDef {
        capability: Capability::ChgHost,
        version: 302,
        description: "CHGHOST when a user's hostname changes",
    },
    CapabilityDef {
        capability: Capability::EchoMessage,
        version: 302,
        description: "Copy of PRIVMSG/NOTICE echoed back to the sender",
    },
    CapabilityDef {
        capability: Capability::ExtendedJoin,
        version: 301,
        description: "JOIN includes account and realname",
    },
    CapabilityDef {
        capability: Capability::InviteNotify,
        version: 302,
        description: "Channel members are told about invites",
    },
    CapabilityDef {
        capability: Capability::Metadata,
        version: 302,
        description: "Key/value metadata on users and channels",
    },
    CapabilityDef {
        capability: Capability::Monitor,
        version: 301,
        description: "Online/offline status tracking",
    },
    CapabilityDef {
        capability: Capability::MultiPrefix,
        version: 301,
        description: "Show all user modes in NAMES (@+nick for op+voice)",
    },
    CapabilityDef {
        capability: Capability::Sasl,
        version: 301,
        description: "SASL authentication",
    },
    CapabilityDef {
        capability: Capability::ServerTime,
        version: 302,
        description: "Time tag on messages (ISO 8601)",
    },
    CapabilityDef {
        capability: Capability::Tls,
        version: 301,
        description: "STARTTLS upgrade of a plaintext connection",
    },
    CapabilityDef {
        capability: Capability::UserhostInNames,
        version: 301,
        description: "Include full nick!user@host in NAMES replies",
    },
];

/// Per-connection record of capabilities and whether each is enabled.
///
/// Entries may exist with `false` (offered by the server but not enabled,
/// or disabled later). Only enabled entries are ever reported as active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    entries: HashMap<Capability, bool>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `cap` with the given enabled flag.
    pub fn set(&mut self, cap: Capability, enabled: bool) {
        self.entries.insert(cap, enabled);
    }

    /// Whether `cap` is known and enabled.
    pub fn is_enabled(&self, cap: Capability) -> bool {
        self.entries.get(&cap).copied().unwrap_or(false)
    }

    /// Enabled capabilities, in no particular order.
    pub fn enabled(&self) -> Vec<Capability> {
        self.entries
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(cap, _)| *cap)
            .collect()
    }

    /// Capabilities the set knows about, enabled or not.
    pub fn known(&self) -> impl Iterator<Item = Capability> + '_ {
        self.entries.keys().copied()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Apply the capability list of a `CAP <target> <subcommand> :<list>`
    /// reply.
    ///
    /// - `LS` / `NEW`: record offered capabilities as known but disabled
    /// - `ACK`: enable, or disable for `-cap` entries
    /// - `DEL`: disable
    /// - `NAK` and anything else: no change
    ///
    /// Unknown tokens are skipped. Returns true if any entry changed.
    pub fn apply_reply(&mut self, subcommand: &str, list: &str) -> bool {
        let mut modified = false;

        for token in list.split_whitespace() {
            let (removal, name) = match token.strip_prefix('-') {
                Some(name) => (true, name),
                None => (false, token.trim_start_matches(['~', '='])),
            };
            let Some(cap) = Capability::from_token(name) else {
                continue;
            };

            let previous = self.entries.get(&cap).copied();
            let next = match subcommand.to_ascii_uppercase().as_str() {
                "LS" | "NEW" => previous.unwrap_or(false),
                "ACK" => !removal,
                "DEL" => false,
                _ => continue,
            };

            if previous != Some(next) {
                self.entries.insert(cap, next);
                modified = true;
            }
        }

        modified
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|cap| (cap, true)).collect(),
        }
    }
}
