mod body;
mod nom_parser;
mod parse;
mod serialize;
mod types;
mod validate;

pub use self::body::Body;
pub use self::types::{Message, MAX_MESSAGE_LENGTH, MAX_PARAMS};
