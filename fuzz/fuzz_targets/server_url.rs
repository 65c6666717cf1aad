//! Fuzz target for `irc://` locator parsing

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(url) = input.parse::<slirc_client::ServerUrl>() {
            assert_ne!(url.port(), 0);
            assert_eq!(url.to_string(), input);
        }
    }
});
