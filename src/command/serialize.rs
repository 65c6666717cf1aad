use std::fmt;

use super::types::Command;

impl Command {
    /// Wire keyword for named commands, or `None` for numerics.
    pub fn keyword(&self) -> Option<&str> {
        Some(match self {
            Command::PASS => "PASS",
            Command::NICK => "NICK",
            Command::USER => "USER",
            Command::OPER => "OPER",
            Command::QUIT => "QUIT",
            Command::JOIN => "JOIN",
            Command::PART => "PART",
            Command::PRIVMSG => "PRIVMSG",
            Command::NOTICE => "NOTICE",
            Command::PING => "PING",
            Command::PONG => "PONG",
            Command::ERROR => "ERROR",
            Command::CAP => "CAP",
            Command::Raw(raw) => raw,
            Command::Response(_) | Command::Numeric(_) => return None,
        })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Response(resp) => write!(f, "{}", resp),
            Command::Numeric(code) => write!(f, "{:03}", code),
            other => f.write_str(other.keyword().unwrap_or_default()),
        }
    }
}
