//! IRC numeric response codes.
//!
//! This module provides an enumeration of the server numerics a client
//! core reacts to or commonly reports. Response codes are three-digit
//! numbers sent by servers to indicate the result of commands or to
//! provide information. Codes not listed here are carried verbatim as
//! [`Command::Numeric`](crate::Command::Numeric).
//!
//! # Reference
//! - RFC 2812: Internet Relay Chat: Client Protocol
//! - Modern IRC documentation: <https://modern.ircdocs.horse/>

#![allow(non_camel_case_types)]

use std::str::FromStr;

/// IRC server response code.
///
/// Response codes are categorized as:
/// - 001-099: Connection/registration
/// - 200-399: Command replies
/// - 400-599: Error replies
/// - 900-999: SASL/account
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
#[non_exhaustive]
pub enum Response {
    // === Connection Registration (001-099) ===
    /// 001 - Welcome to the IRC network
    RPL_WELCOME = 1,
    /// 002 - Your host is running version
    RPL_YOURHOST = 2,
    /// 003 - Server creation date
    RPL_CREATED = 3,
    /// 004 - Server info (name, version, user modes, channel modes)
    RPL_MYINFO = 4,
    /// 005 - Server supported features (ISUPPORT)
    RPL_ISUPPORT = 5,

    // === Command Responses (200-399) ===
    /// 221 - User mode string
    RPL_UMODEIS = 221,
    /// 301 - User is away
    RPL_AWAY = 301,
    /// 302 - USERHOST reply
    RPL_USERHOST = 302,
    /// 331 - No topic is set
    RPL_NOTOPIC = 331,
    /// 332 - Channel topic
    RPL_TOPIC = 332,
    /// 353 - NAMES reply
    RPL_NAMREPLY = 353,
    /// 366 - End of NAMES
    RPL_ENDOFNAMES = 366,
    /// 372 - MOTD line
    RPL_MOTD = 372,
    /// 375 - MOTD start
    RPL_MOTDSTART = 375,
    /// 376 - End of MOTD
    RPL_ENDOFMOTD = 376,
    /// 381 - You are now an IRC operator
    RPL_YOUREOPER = 381,

    // === Error Replies (400-599) ===
    /// 401 - No such nick/channel
    ERR_NOSUCHNICK = 401,
    /// 403 - No such channel
    ERR_NOSUCHCHANNEL = 403,
    /// 404 - Cannot send to channel
    ERR_CANNOTSENDTOCHAN = 404,
    /// 410 - Invalid CAP subcommand
    ERR_INVALIDCAPCMD = 410,
    /// 421 - Unknown command
    ERR_UNKNOWNCOMMAND = 421,
    /// 422 - MOTD file is missing
    ERR_NOMOTD = 422,
    /// 431 - No nickname given
    ERR_NONICKNAMEGIVEN = 431,
    /// 432 - Erroneous nickname
    ERR_ERRONEUSNICKNAME = 432,
    /// 433 - Nickname is already in use
    ERR_NICKNAMEINUSE = 433,
    /// 436 - Nickname collision
    ERR_NICKCOLLISION = 436,
    /// 442 - You're not on that channel
    ERR_NOTONCHANNEL = 442,
    /// 451 - You have not registered
    ERR_NOTREGISTERED = 451,
    /// 461 - Not enough parameters
    ERR_NEEDMOREPARAMS = 461,
    /// 462 - You may not reregister
    ERR_ALREADYREGISTERED = 462,
    /// 464 - Password incorrect
    ERR_PASSWDMISMATCH = 464,
    /// 465 - You are banned from this server
    ERR_YOUREBANNEDCREEP = 465,
    /// 471 - Cannot join channel (+l)
    ERR_CHANNELISFULL = 471,
    /// 473 - Cannot join channel (+i)
    ERR_INVITEONLYCHAN = 473,
    /// 474 - Cannot join channel (+b)
    ERR_BANNEDFROMCHAN = 474,
    /// 475 - Cannot join channel (+k)
    ERR_BADCHANNELKEY = 475,
    /// 491 - No O-lines for your host
    ERR_NOOPERHOST = 491,

    // === SASL (900-908) ===
    /// 900 - You are now logged in
    RPL_LOGGEDIN = 900,
    /// 903 - SASL authentication successful
    RPL_SASLSUCCESS = 903,
    /// 904 - SASL authentication failed
    ERR_SASLFAIL = 904,
}

impl Response {
    /// Returns the numeric code as u16
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Creates a Response from a numeric code
    pub fn from_code(code: u16) -> Option<Response> {
        Some(match code {
            1 => Response::RPL_WELCOME,
            2 => Response::RPL_YOURHOST,
            3 => Response::RPL_CREATED,
            4 => Response::RPL_MYINFO,
            5 => Response::RPL_ISUPPORT,
            221 => Response::RPL_UMODEIS,
            301 => Response::RPL_AWAY,
            302 => Response::RPL_USERHOST,
            331 => Response::RPL_NOTOPIC,
            332 => Response::RPL_TOPIC,
            353 => Response::RPL_NAMREPLY,
            366 => Response::RPL_ENDOFNAMES,
            372 => Response::RPL_MOTD,
            375 => Response::RPL_MOTDSTART,
            376 => Response::RPL_ENDOFMOTD,
            381 => Response::RPL_YOUREOPER,
            401 => Response::ERR_NOSUCHNICK,
            403 => Response::ERR_NOSUCHCHANNEL,
            404 => Response::ERR_CANNOTSENDTOCHAN,
            410 => Response::ERR_INVALIDCAPCMD,
            421 => Response::ERR_UNKNOWNCOMMAND,
            422 => Response::ERR_NOMOTD,
            431 => Response::ERR_NONICKNAMEGIVEN,
            432 => Response::ERR_ERRONEUSNICKNAME,
            433 => Response::ERR_NICKNAMEINUSE,
            436 => Response::ERR_NICKCOLLISION,
            442 => Response::ERR_NOTONCHANNEL,
            451 => Response::ERR_NOTREGISTERED,
            461 => Response::ERR_NEEDMOREPARAMS,
            462 => Response::ERR_ALREADYREGISTERED,
            464 => Response::ERR_PASSWDMISMATCH,
            465 => Response::ERR_YOUREBANNEDCREEP,
            471 => Response::ERR_CHANNELISFULL,
            473 => Response::ERR_INVITEONLYCHAN,
            474 => Response::ERR_BANNEDFROMCHAN,
            475 => Response::ERR_BADCHANNELKEY,
            491 => Response::ERR_NOOPERHOST,
            900 => Response::RPL_LOGGEDIN,
            903 => Response::RPL_SASLSUCCESS,
            904 => Response::ERR_SASLFAIL,
            _ => return None,
        })
    }

    /// Check if this is an error response (4xx, 5xx, or SASL failure)
    #[inline]
    pub fn is_error(&self) -> bool {
        let code = self.code();
        (400..600).contains(&code) || code == 904
    }

    /// Check if this is a connection registration response (001-099)
    #[inline]
    pub fn is_registration(&self) -> bool {
        self.code() < 100
    }

    /// Check if this is a command reply (200-399)
    #[inline]
    pub fn is_reply(&self) -> bool {
        (200..400).contains(&self.code())
    }

    /// Returns the RFC 2812 category name for this response
    pub fn category(&self) -> &'static str {
        match self.code() {
            1..=99 => "Connection Registration",
            200..=399 => "Command Replies",
            400..=599 => "Error Replies",
            900..=999 => "SASL/Account",
            _ => "Unknown",
        }
    }
}

impl FromStr for Response {
    type Err = ParseResponseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseResponseError::InvalidFormat);
        }
        let code: u16 = s.parse().map_err(|_| ParseResponseError::InvalidFormat)?;
        Response::from_code(code).ok_or(ParseResponseError::UnknownCode(code))
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.code())
    }
}

/// Error when parsing a response code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseResponseError {
    /// The string was not three ASCII digits
    #[error("invalid response code format")]
    InvalidFormat,
    /// The numeric code is not a known response
    #[error("unknown response code: {0}")]
    UnknownCode(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_code() {
        assert_eq!(Response::RPL_WELCOME.code(), 1);
        assert_eq!(Response::RPL_USERHOST.code(), 302);
        assert_eq!(Response::ERR_NICKNAMEINUSE.code(), 433);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Response::from_code(1), Some(Response::RPL_WELCOME));
        assert_eq!(Response::from_code(5), Some(Response::RPL_ISUPPORT));
        assert_eq!(Response::from_code(999), None);
    }

    #[test]
    fn test_from_code_covers_every_variant() {
        for code in 0..1000 {
            if let Some(resp) = Response::from_code(code) {
                assert_eq!(resp.code(), code);
            }
        }
    }

    #[test]
    fn test_is_error() {
        assert!(!Response::RPL_WELCOME.is_error());
        assert!(Response::ERR_NICKNAMEINUSE.is_error());
        assert!(Response::ERR_SASLFAIL.is_error());
        assert!(!Response::RPL_SASLSUCCESS.is_error());
    }

    #[test]
    fn test_parse() {
        assert_eq!("001".parse::<Response>(), Ok(Response::RPL_WELCOME));
        assert_eq!("433".parse::<Response>(), Ok(Response::ERR_NICKNAMEINUSE));
        assert_eq!("abc".parse::<Response>(), Err(ParseResponseError::InvalidFormat));
        assert_eq!("1".parse::<Response>(), Err(ParseResponseError::InvalidFormat));
        assert_eq!("999".parse::<Response>(), Err(ParseResponseError::UnknownCode(999)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Response::RPL_WELCOME), "001");
        assert_eq!(format!("{}", Response::ERR_NICKNAMEINUSE), "433");
    }

    #[test]
    fn test_category() {
        assert_eq!(Response::RPL_WELCOME.category(), "Connection Registration");
        assert!(Response::RPL_MYINFO.is_registration());
        assert!(Response::RPL_TOPIC.is_reply());
        assert_eq!(Response::ERR_NOSUCHNICK.category(), "Error Replies");
        assert_eq!(Response::RPL_SASLSUCCESS.category(), "SASL/Account");
    }
}
