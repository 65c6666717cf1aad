use crate::chan::{is_valid_channel_name, ChannelExt};
use crate::command::Command;
use crate::error::MessageParseError;
use crate::mode::UserModes;
use crate::nick::is_valid_nickname;
use crate::prefix::Prefix;

/// Maximum length of a serialized message, including the CR-LF terminator.
pub const MAX_MESSAGE_LENGTH: usize = 512;

/// Maximum number of parameters a message may carry.
pub const MAX_PARAMS: usize = 15;

/// An owned IRC message.
///
/// A message is a prefix, a command verb, and an ordered list of
/// parameters. Construction never enforces the protocol limits; use
/// [`Message::validate`] to check them.
///
/// # Example
///
/// ```
/// use slirc_client::{Command, Message, Prefix};
///
/// // Parse a message
/// let msg: Message = ":nick!user@host PRIVMSG #channel :Hello!".parse().unwrap();
/// assert_eq!(msg.command, Command::PRIVMSG);
/// assert_eq!(msg.params, vec!["#channel", "Hello!"]);
///
/// // Construct a message
/// let msg = Message::privmsg("#channel", "Hello there");
/// assert_eq!(msg.to_string(), ": PRIVMSG #channel :Hello there");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Message prefix/source (e.g., `nick!user@host`).
    pub prefix: Prefix,
    /// The IRC command verb.
    pub command: Command,
    /// Command parameters, the trailing one included.
    pub params: Vec<String>,
}

impl Message {
    /// Create a new message from its parts.
    pub fn new<I, S>(prefix: Prefix, command: Command, params: I) -> Message
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Message {
            prefix,
            command,
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a new message with [`Prefix::Empty`].
    pub fn without_prefix<I, S>(command: Command, params: I) -> Message
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Message::new(Prefix::Empty, command, params)
    }

    /// Return this message with `prefix` replacing the current one.
    #[must_use]
    pub fn with_prefix(mut self, prefix: Prefix) -> Self {
        self.prefix = prefix;
        self
    }

    /// Get the parameter at `index`, if present.
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// Get the last parameter, if any.
    pub fn trailing(&self) -> Option<&str> {
        self.params.last().map(String::as_str)
    }

    /// Get the nickname from the message prefix, if present.
    pub fn source_nickname(&self) -> Option<&str> {
        self.prefix.nick()
    }

    /// Get the appropriate target for a response.
    ///
    /// For channel messages, returns the channel name.
    /// For private messages, returns the sender's nickname.
    pub fn response_target(&self) -> Option<&str> {
        match self.command {
            Command::PRIVMSG | Command::NOTICE => match self.param(0) {
                Some(target) if target.is_channel_name() => Some(target),
                _ => self.source_nickname(),
            },
            _ => self.source_nickname(),
        }
    }

    /// Create a PASS message
    #[must_use]
    pub fn pass(password: impl Into<String>) -> Self {
        Message::without_prefix(Command::PASS, [password.into()])
    }

    /// Create a NICK message.
    ///
    /// Fails if `nickname` does not satisfy the nickname grammar.
    pub fn nick(nickname: impl Into<String>) -> Result<Self, MessageParseError> {
        let nickname = nickname.into();
        if !is_valid_nickname(&nickname) {
            return Err(MessageParseError::InvalidNickname(nickname));
        }
        Ok(Message::without_prefix(Command::NICK, [nickname]))
    }

    /// Create a USER message: `USER <username> <mode-bitmask> * <realname>`
    #[must_use]
    pub fn user(username: impl Into<String>, realname: impl Into<String>, modes: UserModes) -> Self {
        Message::without_prefix(
            Command::USER,
            [
                username.into(),
                modes.bitmask().to_string(),
                "*".to_string(),
                realname.into(),
            ],
        )
    }

    /// Create an OPER message
    #[must_use]
    pub fn oper(name: impl Into<String>, password: impl Into<String>) -> Self {
        Message::without_prefix(Command::OPER, [name.into(), password.into()])
    }

    /// Create a JOIN message for a channel.
    ///
    /// Fails if `channel` does not satisfy the channel grammar.
    pub fn join(channel: impl Into<String>) -> Result<Self, MessageParseError> {
        let channel = channel.into();
        if !is_valid_channel_name(&channel) {
            return Err(MessageParseError::InvalidChannelName(channel));
        }
        Ok(Message::without_prefix(Command::JOIN, [channel]))
    }

    /// Create a PART message for a channel
    #[must_use]
    pub fn part(channel: impl Into<String>, reason: Option<String>) -> Self {
        let mut params = vec![channel.into()];
        params.extend(reason);
        Message::without_prefix(Command::PART, params)
    }

    /// Create a PING message
    #[must_use]
    pub fn ping(server: impl Into<String>) -> Self {
        Message::without_prefix(Command::PING, [server.into()])
    }

    /// Create a PONG message
    #[must_use]
    pub fn pong(server: impl Into<String>) -> Self {
        Message::without_prefix(Command::PONG, [server.into()])
    }

    /// Create a QUIT message with a reason
    #[must_use]
    pub fn quit(reason: impl Into<String>) -> Self {
        Message::without_prefix(Command::QUIT, [reason.into()])
    }

    /// Create a PRIVMSG message to a target with text
    #[must_use]
    pub fn privmsg<T, M>(target: T, text: M) -> Self
    where
        T: Into<String>,
        M: Into<String>,
    {
        Message::without_prefix(Command::PRIVMSG, [target.into(), text.into()])
    }

    /// Create a NOTICE message to a target with text
    #[must_use]
    pub fn notice<T, M>(target: T, text: M) -> Self
    where
        T: Into<String>,
        M: Into<String>,
    {
        Message::without_prefix(Command::NOTICE, [target.into(), text.into()])
    }

    /// Create a `CAP LS 302` message
    #[must_use]
    pub fn cap_ls() -> Self {
        Message::without_prefix(Command::CAP, ["LS", "302"])
    }

    /// Create a `CAP REQ` message for the given capability tokens
    #[must_use]
    pub fn cap_req<I, S>(caps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = caps
            .into_iter()
            .map(|c| c.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(" ");
        Message::without_prefix(Command::CAP, ["REQ".to_string(), list])
    }

    /// Create a `CAP END` message
    #[must_use]
    pub fn cap_end() -> Self {
        Message::without_prefix(Command::CAP, ["END"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caps::Capability;
    use crate::mode::UserMode;

    #[test]
    fn test_new_message() {
        let msg = Message::without_prefix(Command::NICK, ["john_doe"]);
        assert_eq!(msg.prefix, Prefix::Empty);
        assert_eq!(msg.command, Command::NICK);
        assert_eq!(msg.param(0), Some("john_doe"));
        assert_eq!(msg.param(1), None);
    }

    #[test]
    fn test_nick_validates() {
        assert!(Message::nick("username").is_ok());
        assert_eq!(
            Message::nick("John Doe"),
            Err(MessageParseError::InvalidNickname("John Doe".to_string()))
        );
    }

    #[test]
    fn test_join_validates() {
        assert_eq!(Message::join("#rust").unwrap().params, vec!["#rust"]);
        assert_eq!(
            Message::join("rust"),
            Err(MessageParseError::InvalidChannelName("rust".to_string()))
        );
    }

    #[test]
    fn test_user_params() {
        let modes: UserModes = vec![UserMode::Invisible].into();
        let msg = Message::user("jdoe", "John Doe", modes);
        assert_eq!(msg.params, vec!["jdoe", "8", "*", "John Doe"]);
    }

    #[test]
    fn test_cap_req_joins_tokens() {
        let msg = Message::cap_req([Capability::MultiPrefix, Capability::Sasl]);
        assert_eq!(msg.params, vec!["REQ", "multi-prefix sasl"]);
        assert_eq!(msg.to_string(), ": CAP REQ :multi-prefix sasl");
    }

    #[test]
    fn test_response_target() {
        let msg: Message = ":nick!user@host PRIVMSG #chan :hi".parse().unwrap();
        assert_eq!(msg.response_target(), Some("#chan"));

        let msg: Message = ":nick!user@host PRIVMSG me :hi".parse().unwrap();
        assert_eq!(msg.response_target(), Some("nick"));
    }
}
