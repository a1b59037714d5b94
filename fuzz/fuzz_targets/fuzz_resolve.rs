#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let res = textfix::resolve_text(content);

        // Only whole lines are ever removed.
        assert!(res.content.len() <= content.len());

        let _ = textfix::find_markers(content);
        let _ = textfix::find_markers(&res.content);
    }
});
