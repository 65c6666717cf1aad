//! # slirc-client
//!
//! Client-side IRC wire protocol: message parsing and serialization,
//! identifier validation, `irc://` locators and an async connection that
//! keeps itself alive.
//!
//! ## Features
//!
//! - Line parsing into [`Message`] (prefix, command, parameters) and exact
//!   re-serialization
//! - Typed views of common commands through [`Body`]
//! - RFC 1459 case folding, channel and nickname validation
//! - IRCv3 capability registry and per-connection capability tracking
//! - Optional Tokio integration: framing codecs and [`ClientConnection`],
//!   which answers `PING` on its own and reports `READY` on the welcome reply

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Creating IRC Messages
//!
//! ```rust
//! use slirc_client::{Message, Prefix};
//!
//! let privmsg = Message::privmsg("#rust", "Hello, world!");
//! assert_eq!(privmsg.to_string(), ": PRIVMSG #rust :Hello, world!");
//!
//! let join = Message::join("#channel").expect("valid channel");
//! let relayed = Message::privmsg("#dev", "hi").with_prefix(Prefix::parse("bot!bot@example.com"));
//! println!("{} / {}", join, relayed);
//! ```
//!
//! ### Parsing IRC Messages
//!
//! ```rust
//! use slirc_client::{Command, Message};
//!
//! let raw = ":nick!user@host PRIVMSG #channel :Hello!";
//! let message: Message = raw.parse().expect("Valid IRC message");
//!
//! assert_eq!(message.command, Command::PRIVMSG);
//! assert_eq!(message.source_nickname(), Some("nick"));
//! assert_eq!(message.params, vec!["#channel", "Hello!"]);
//! ```

pub mod caps;
pub mod casemap;
pub mod chan;
pub mod command;
#[cfg(feature = "tokio")]
pub mod connection;
pub mod error;
#[cfg(feature = "tokio")]
pub mod irc;
#[cfg(feature = "tokio")]
pub mod line;
pub mod message;
pub mod mode;
pub mod nick;
pub mod prefix;
pub mod response;
pub mod server;
pub mod state;
#[cfg(feature = "tokio")]
pub mod transport;
pub mod url;

pub use self::caps::{Capability, CapabilitySet};
pub use self::casemap::{irc_eq, irc_to_lower, irc_to_upper};
pub use self::chan::{Channel, ChannelExt};
pub use self::command::Command;
#[cfg(feature = "tokio")]
pub use self::connection::{ClientConnection, ConnectionConfig, ConnectionEvents};
#[cfg(feature = "tokio")]
pub use self::error::ConnectionError;
pub use self::error::{MessageParseError, ProtocolError, UrlError, ValidationError};
#[cfg(feature = "tokio")]
pub use self::irc::IrcCodec;
#[cfg(feature = "tokio")]
pub use self::line::LineCodec;
pub use self::message::{Body, Message};
pub use self::mode::{UserMode, UserModes};
pub use self::nick::{NickExt, UserInfo};
pub use self::prefix::Prefix;
pub use self::response::Response;
pub use self::server::ServerInfo;
pub use self::state::ConnectionState;
#[cfg(feature = "tokio")]
pub use self::transport::{Dialer, TcpDialer};
pub use self::url::{Protocol, ServerUrl};
