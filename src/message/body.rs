//! Typed message bodies.
//!
//! [`Body`] names the parameters of the commands a client builds or
//! inspects most often. Converting to and from [`Message`] keeps the
//! positional wire layout, so both views serialize identically.

use crate::chan::is_valid_channel_name;
use crate::command::Command;
use crate::error::MessageParseError;
use crate::mode::UserModes;
use crate::nick::is_valid_nickname;
use crate::prefix::Prefix;

use super::types::Message;

/// A message body with named fields.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Body {
    /// `PASS <password>`
    Pass { password: String },
    /// `NICK <nickname>`
    Nick { nickname: String },
    /// `USER <username> <mode-bitmask> * <realname>`
    User {
        username: String,
        modes: UserModes,
        realname: String,
    },
    /// `OPER <name> <password>`
    Oper { name: String, password: String },
    /// `JOIN <channel>`
    Join { channel: String },
    /// `PING <server>`
    Ping { server: String },
    /// `PONG <server>`
    Pong { server: String },
    /// `QUIT [<reason>]`
    Quit { reason: Option<String> },
    /// `PRIVMSG <target> <text>`
    Privmsg { target: String, text: String },
    /// `NOTICE <target> <text>`
    Notice { target: String, text: String },
    /// `PART <channel> [<reason>]`
    Part {
        channel: String,
        reason: Option<String>,
    },
}

impl Body {
    /// The command verb this body is sent with.
    pub fn command(&self) -> Command {
        match self {
            Body::Pass { .. } => Command::PASS,
            Body::Nick { .. } => Command::NICK,
            Body::User { .. } => Command::USER,
            Body::Oper { .. } => Command::OPER,
            Body::Join { .. } => Command::JOIN,
            Body::Ping { .. } => Command::PING,
            Body::Pong { .. } => Command::PONG,
            Body::Quit { .. } => Command::QUIT,
            Body::Privmsg { .. } => Command::PRIVMSG,
            Body::Notice { .. } => Command::NOTICE,
            Body::Part { .. } => Command::PART,
        }
    }

    /// Lay the fields out as wire parameters.
    pub fn into_params(self) -> Vec<String> {
        match self {
            Body::Pass { password } => vec![password],
            Body::Nick { nickname } => vec![nickname],
            Body::User {
                username,
                modes,
                realname,
            } => vec![username, modes.bitmask().to_string(), "*".to_owned(), realname],
            Body::Oper { name, password } => vec![name, password],
            Body::Join { channel } => vec![channel],
            Body::Ping { server } | Body::Pong { server } => vec![server],
            Body::Quit { reason } => reason.into_iter().collect(),
            Body::Privmsg { target, text } | Body::Notice { target, text } => vec![target, text],
            Body::Part { channel, reason } => {
                let mut params = vec![channel];
                params.extend(reason);
                params
            }
        }
    }
}

fn require(params: &[String], expected: usize) -> Result<(), MessageParseError> {
    if params.len() < expected {
        return Err(MessageParseError::NotEnoughArguments {
            expected,
            got: params.len(),
        });
    }
    Ok(())
}

impl Message {
    /// Build a prefix-less message from a typed body.
    ///
    /// Applies the same checks as [`Message::nick`] and [`Message::join`]:
    /// an invalid nickname or channel name is rejected here rather than put
    /// on the wire.
    pub fn from_body(body: Body) -> Result<Message, MessageParseError> {
        Message::with_body(Prefix::Empty, body)
    }

    /// Build a message with `prefix` from a typed body.
    pub fn with_body(prefix: Prefix, body: Body) -> Result<Message, MessageParseError> {
        match &body {
            Body::Nick { nickname } if !is_valid_nickname(nickname) => {
                return Err(MessageParseError::InvalidNickname(nickname.clone()));
            }
            Body::Join { channel } if !is_valid_channel_name(channel) => {
                return Err(MessageParseError::InvalidChannelName(channel.clone()));
            }
            _ => {}
        }
        let command = body.command();
        Ok(Message::new(prefix, command, body.into_params()))
    }

    /// Project this message onto a typed body.
    ///
    /// Fields are read by position; extra parameters are ignored.
    pub fn body(&self) -> Result<Body, MessageParseError> {
        let p = &self.params;
        let owned = |i: usize| p[i].clone();
        let optional = |i: usize| p.get(i).cloned();

        // Catch-all spellings such as `Raw("nick")` project like the keyword.
        let command = match &self.command {
            Command::Raw(raw) => Command::new(raw).unwrap_or_else(|_| self.command.clone()),
            other => other.clone(),
        };

        Ok(match command {
            Command::PASS => {
                require(p, 1)?;
                Body::Pass { password: owned(0) }
            }
            Command::NICK => {
                require(p, 1)?;
                Body::Nick { nickname: owned(0) }
            }
            Command::USER => {
                require(p, 4)?;
                let mask: u8 = p[1]
                    .parse()
                    .map_err(|_| MessageParseError::InvalidArgument(p[1].clone()))?;
                Body::User {
                    username: owned(0),
                    modes: UserModes::from_bitmask(mask),
                    realname: owned(3),
                }
            }
            Command::OPER => {
                require(p, 2)?;
                Body::Oper {
                    name: owned(0),
                    password: owned(1),
                }
            }
            Command::JOIN => {
                require(p, 1)?;
                Body::Join { channel: owned(0) }
            }
            Command::PING => {
                require(p, 1)?;
                Body::Ping { server: owned(0) }
            }
            Command::PONG => {
                require(p, 1)?;
                Body::Pong { server: owned(0) }
            }
            Command::QUIT => Body::Quit {
                reason: optional(0),
            },
            Command::PRIVMSG => {
                require(p, 2)?;
                Body::Privmsg {
                    target: owned(0),
                    text: owned(1),
                }
            }
            Command::NOTICE => {
                require(p, 2)?;
                Body::Notice {
                    target: owned(0),
                    text: owned(1),
                }
            }
            Command::PART => {
                require(p, 1)?;
                Body::Part {
                    channel: owned(0),
                    reason: optional(1),
                }
            }
            ref other => return Err(MessageParseError::UnexpectedCommand(other.to_string())),
        })
    }
}

impl TryFrom<Body> for Message {
    type Error = MessageParseError;

    fn try_from(body: Body) -> Result<Self, Self::Error> {
        Message::from_body(body)
    }
}
