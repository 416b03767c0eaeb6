#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let slug = drills::utils::url_slug(data);
    assert!(!slug.starts_with('-') && !slug.ends_with('-'));
    assert!(!slug.contains("--"));
});
