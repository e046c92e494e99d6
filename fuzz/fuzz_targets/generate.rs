#![no_main]

use libfuzzer_sys::fuzz_target;
use typester::backend::TsCodegen;
use typester::diagnostics::format_errors;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors must render against the source they came from
        if let Err(err) = TsCodegen::new().try_generate(s) {
            let errors: Vec<_> = err.diagnostics().into_iter().cloned().collect();
            let _ = format_errors("fuzz.rs", s, &errors, false);
        }
    }
});
