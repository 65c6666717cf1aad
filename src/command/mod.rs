mod parse;
mod serialize;
mod types;

pub use types::Command;
