#![no_main]

use cmakedoc::render::{RenderConfig, render_markdown};
use cmakedoc::{analysis, lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tokens) = lexer::lex(s) {
            if let Ok(script) = parser::parse(&tokens) {
                // Analysis never fails; it must not panic on arbitrary scripts either
                let callables = analysis::analyze(&script.nodes);
                let _ = render_markdown(&callables, "fuzz.cmake", &RenderConfig::default());
            }
        }
    }
});
