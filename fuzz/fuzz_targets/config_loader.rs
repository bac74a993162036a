#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    let payload = if data.len() > 1_000_000 {
        &data[..1_000_000]
    } else {
        data
    };

    let Ok(dir) = tempfile::tempdir() else {
        return;
    };
    let path = dir.path().join("Appsetting.json");
    let Ok(mut file) = std::fs::File::create(&path) else {
        return;
    };
    if file.write_all(payload).is_err() {
        return;
    }
    drop(file);

    // The file exists, so the only admissible failures are a read error
    // (non-UTF-8 bytes) or a parse error; both must name the file.
    if let Err(err) = appsetting::fuzzing::load_config_input(dir.path(), None) {
        let message = err.to_string();
        debug_assert!(
            message.starts_with("Invalid JSON format in")
                || message.starts_with("Failed to read config")
        );
        debug_assert!(message.contains("Appsetting.json"));
    }
});
