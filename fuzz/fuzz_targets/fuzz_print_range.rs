#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (i64, i64, &[u8])| {
    let (start, end, data) = input;
    let mut reader = data;
    let mut out = Vec::new();
    let _ = textfix::print_range(&mut reader, textfix::LineRange::new(start, end), &mut out);
});
