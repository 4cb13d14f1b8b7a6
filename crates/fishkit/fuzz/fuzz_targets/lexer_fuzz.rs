//! Fuzz target for the Fishkit lexer
//!
//! Tokenizes arbitrary input looking for panics and for a lexer that never
//! reaches EOF.
//!
//! Run with: cargo +nightly fuzz run lexer_fuzz -- -max_total_time=300

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Scripts are text
    if let Ok(input) = std::str::from_utf8(data) {
        let mut lexer = fishkit::Lexer::new(input);
        // Every token but EOF consumes at least one char, so this is a bound
        for _ in 0..=input.chars().count() {
            match lexer.next_token() {
                Ok(token) if token.is_eof() => return,
                Ok(_) => {}
                Err(_) => return,
            }
        }
        panic!("lexer did not reach EOF");
    }
});
