use std::str::FromStr;

use super::types::Command;
use crate::error::MessageParseError;
use crate::response::Response;

impl Command {
    /// Classify a command token.
    ///
    /// Keywords match case-insensitively. A token of exactly three digits
    /// is a numeric reply. Any other token made of ASCII letters and digits
    /// is kept verbatim as [`Command::Raw`].
    pub fn new(cmd: &str) -> Result<Command, MessageParseError> {
        if cmd.is_empty() {
            return Err(MessageParseError::MissingCommand);
        }

        if cmd.len() == 3 && cmd.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(match cmd.parse::<Response>() {
                Ok(resp) => Command::Response(resp),
                Err(_) => {
                    let code = cmd
                        .parse()
                        .map_err(|_| MessageParseError::InvalidCommand(cmd.to_owned()))?;
                    Command::Numeric(code)
                }
            });
        }

        if !cmd.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(MessageParseError::InvalidCommand(cmd.to_owned()));
        }

        let cmd_upper = cmd.to_ascii_uppercase();
        Ok(match cmd_upper.as_str() {
            "PASS" => Command::PASS,
            "NICK" => Command::NICK,
            "USER" => Command::USER,
            "OPER" => Command::OPER,
            "QUIT" => Command::QUIT,
            "JOIN" => Command::JOIN,
            "PART" => Command::PART,
            "PRIVMSG" => Command::PRIVMSG,
            "NOTICE" => Command::NOTICE,
            "PING" => Command::PING,
            "PONG" => Command::PONG,
            "ERROR" => Command::ERROR,
            "CAP" => Command::CAP,
            _ => Command::Raw(cmd.to_owned()),
        })
    }
}

impl FromStr for Command {
    type Err = MessageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::new(s)
    }
}
