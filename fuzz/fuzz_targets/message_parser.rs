//! Fuzz target for IRC message parsing
//!
//! Feeds arbitrary lines to the parser and checks that anything it accepts
//! serializes to a line it accepts again.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    // Only fuzz valid UTF-8 strings to focus on protocol-level issues
    if let Ok(input) = str::from_utf8(data) {
        if input.is_empty() || input.len() > 512 {
            return;
        }

        if let Ok(msg) = input.parse::<slirc_client::Message>() {
            let _ = msg.validate();
            let _ = msg.body();
            let _ = msg.to_string().parse::<slirc_client::Message>();
        }

        let _ = slirc_client::IrcCodec::sanitize(input.to_string());
    }
});
