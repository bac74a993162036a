#![no_main]

use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let Ok(parsed) = serde_json::from_slice::<Value>(data) else {
        return;
    };

    // Anything the loader accepts must survive a serialize/parse cycle.
    let Ok(rendered) = serde_json::to_string(&parsed) else {
        return;
    };
    let reparsed: Result<Value, _> = serde_json::from_str(&rendered);
    debug_assert!(matches!(reparsed, Ok(value) if value == parsed));
});
