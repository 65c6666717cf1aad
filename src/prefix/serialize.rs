use std::fmt;

use super::types::Prefix;

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Prefix::Empty => Ok(()),
            Prefix::Hostname(host) => f.write_str(host),
            Prefix::NicknameUserHost {
                nickname,
                user,
                host,
            } => write!(f, "{}!{}@{}", nickname, user, host),
            Prefix::NicknameHost { nickname, host } => write!(f, "{}@{}", nickname, host),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for s in [
            "irc.example.net",
            "testuser!~john.doe@172.17.0.1",
            "nick@host",
            "WiZ!jto@tolsun.oulu.fi",
            "",
        ] {
            assert_eq!(Prefix::parse(s).to_string(), s);
        }
    }
}
