use std::fmt::{self, Display, Formatter, Write};

use super::types::Message;

impl Display for Message {
    /// Render the message without the CR-LF terminator.
    ///
    /// The prefix marker is always written, so a message with an empty
    /// prefix renders as `": COMMAND ..."`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, ":{} {}", self.prefix, self.command)?;

        let last = self.params.len().saturating_sub(1);
        for (i, param) in self.params.iter().enumerate() {
            f.write_char(' ')?;
            let needs_colon = param.contains(' ')
                || (i == last && (param.is_empty() || param.starts_with(':')));
            if needs_colon {
                f.write_char(':')?;
            }
            f.write_str(param)?;
        }

        Ok(())
    }
}
