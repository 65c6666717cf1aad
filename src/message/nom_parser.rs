//! Nom-based IRC message parser.
//!
//! Produces borrowed slices into the input line; [`Message`](super::Message)
//! owns them afterwards.

use nom::{
    bytes::complete::{take_till, take_till1},
    character::complete::{char, space0, space1},
    combinator::opt,
    sequence::{preceded, terminated},
    IResult,
};

use crate::error::MessageParseError;

/// Parse the message prefix: `:` then everything up to the first space.
///
/// The token may be empty (`": NICK x"`).
fn parse_prefix(input: &str) -> IResult<&str, &str> {
    terminated(preceded(char(':'), take_till(|c: char| c == ' ')), space1)(input)
}

/// Parse the command token.
fn parse_command(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c == ' ')(input)
}

/// Split the text after the command into parameters.
///
/// A parameter starting with `:` is the trailing parameter: the rest of
/// the line, verbatim. Runs of spaces between middle parameters are
/// skipped.
fn split_params(mut rest: &str) -> Vec<&str> {
    let mut params = Vec::new();

    loop {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            break;
        }

        if let Some(trailing) = rest.strip_prefix(':') {
            params.push(trailing);
            break;
        }

        let end = rest.find(' ').unwrap_or(rest.len());
        params.push(&rest[..end]);
        rest = &rest[end..];
    }

    params
}

/// A parsed IRC message with borrowed string slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedMessage<'a> {
    /// Raw prefix string (without the leading `:`), if present.
    pub prefix: Option<&'a str>,
    /// The command name.
    pub command: &'a str,
    /// Command parameters, including trailing.
    pub params: Vec<&'a str>,
}

impl<'a> ParsedMessage<'a> {
    /// Parse one line. Trailing CR and LF characters are ignored.
    pub fn parse(input: &'a str) -> Result<Self, MessageParseError> {
        let line = input.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            return Err(MessageParseError::EmptyMessage);
        }

        let prefix_result: IResult<&str, Option<&str>> = opt(parse_prefix)(line);
        let (rest, prefix) = prefix_result.map_err(|_| MessageParseError::MissingCommand)?;

        // A prefix with nothing after it
        if prefix.is_none() && line.starts_with(':') {
            return Err(MessageParseError::MissingCommand);
        }

        let (rest, _) = space0::<_, nom::error::Error<&str>>(rest)
            .map_err(|_| MessageParseError::MissingCommand)?;
        let (rest, command) =
            parse_command(rest).map_err(|_| MessageParseError::MissingCommand)?;

        Ok(ParsedMessage {
            prefix,
            command,
            params: split_params(rest),
        })
    }
}
