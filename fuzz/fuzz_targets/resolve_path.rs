#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::{Component, Path};

fuzz_target!(|data: &str| {
    let resolved = appsetting::fuzzing::resolve_config_path_input(Path::new("/base"), Some(data));

    // With an absolute base the result stays absolute and fully normalized.
    debug_assert!(resolved.is_absolute());
    debug_assert!(!resolved.components().any(|component| matches!(
        component,
        Component::CurDir | Component::ParentDir
    )));
});
