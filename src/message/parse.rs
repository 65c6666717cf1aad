//! Message parsing implementation.
//!
//! This module implements `FromStr` for `Message` using the nom-based parser.

use std::str::FromStr;

use crate::command::Command;
use crate::error::ProtocolError;
use crate::prefix::Prefix;

use super::nom_parser::ParsedMessage;
use super::types::Message;

impl FromStr for Message {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Message, Self::Err> {
        let invalid = |cause| ProtocolError::InvalidMessage {
            string: s.to_owned(),
            cause,
        };

        let parsed = ParsedMessage::parse(s).map_err(invalid)?;
        let command = Command::new(parsed.command).map_err(invalid)?;

        Ok(Message {
            prefix: parsed.prefix.map(Prefix::parse).unwrap_or_default(),
            command,
            params: parsed.params.into_iter().map(str::to_owned).collect(),
        })
    }
}
