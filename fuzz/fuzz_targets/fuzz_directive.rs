#![no_main]

use libfuzzer_sys::fuzz_target;

use jobprune::domain::services::references;
use jobprune::parse_directive;

fuzz_target!(|data: &[u8]| {
    // Job files are decoded permissively, so any bytes are valid input
    let content = String::from_utf8_lossy(data);
    for name in references(&content, "CALL JOB:") {
        assert!(!name.as_str().chars().any(char::is_whitespace));
    }
    for line in content.lines() {
        let _ = parse_directive(line, "");
    }
});
