//! Property tests for the line range printer.

use proptest::prelude::*;

use textfix::{print_range, LineRange};

fn lines() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(proptest::string::string_regex("[^\r\n]{0,16}").unwrap(), 0..25)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Output is exactly the numbered lines whose index is in range.
    #[test]
    fn property_output_matches_filter(
        lines in lines(),
        start in -5i64..30,
        end in -5i64..30,
    ) {
        let input: String = lines.iter().map(|l| format!("{l}\n")).collect();
        let mut out = Vec::new();
        let printed = print_range(&mut input.as_bytes(), LineRange::new(start, end), &mut out)
            .unwrap();

        let expected: String = lines
            .iter()
            .enumerate()
            .map(|(i, l)| (i as i64 + 1, l))
            .filter(|(n, _)| start <= *n && *n <= end)
            .map(|(n, l)| format!("{n}: {l}\n"))
            .collect();

        prop_assert_eq!(String::from_utf8(out).unwrap(), expected.clone());
        prop_assert_eq!(printed, expected.lines().count());
    }
}
