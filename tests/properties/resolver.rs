//! Property tests for the conflict resolver and marker inspector.

use proptest::prelude::*;

use textfix::{find_markers, resolve_text, split_lines, Marker};

/// A line that never starts with or contains a marker literal
fn plain_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 <=>._-]{0,24}")
        .unwrap()
        .prop_filter("no marker literal", |s| !Marker::appears_in(s))
}

fn plain_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(plain_line(), 0..20).prop_map(|lines| {
        lines
            .into_iter()
            .map(|l| l + "\n")
            .collect::<String>()
    })
}

/// Lines mixing plain text with all three markers
fn marker_soup() -> impl Strategy<Value = String> {
    let line = prop_oneof![
        3 => plain_line(),
        1 => Just("<<<<<<< HEAD".to_string()),
        1 => Just("=======".to_string()),
        1 => Just(">>>>>>> main".to_string()),
    ];
    proptest::collection::vec(line, 0..30).prop_map(|lines| {
        lines
            .into_iter()
            .map(|l| l + "\n")
            .collect::<String>()
    })
}

/// Lines with a marker literal planted at a known position, paired with the
/// 1-based numbers and trimmed text of the planted lines.
fn planted_markers() -> impl Strategy<Value = (String, Vec<(usize, String)>)> {
    let literal = prop_oneof![Just("<<<<<<<"), Just("======="), Just(">>>>>>>")];
    let marked = ("[ \t]{0,3}[a-z]{0,4}", literal, "[a-z ]{0,6}")
        .prop_map(|(pre, lit, post)| Some(format!("{pre}{lit}{post}")));
    let line = prop_oneof![3 => plain_line().prop_map(|_| None::<String>), 1 => marked];
    let ending = prop_oneof![Just("\n"), Just("\r\n"), Just("\r")];

    proptest::collection::vec((line, plain_line(), ending), 0..30).prop_map(|rows| {
        let mut text = String::new();
        let mut planted = Vec::new();
        for (idx, (marked, plain, ending)) in rows.into_iter().enumerate() {
            match marked {
                Some(line) => {
                    planted.push((idx + 1, line.trim().to_string()));
                    text.push_str(&line);
                }
                None => text.push_str(&plain),
            }
            text.push_str(ending);
        }
        (text, planted)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Text without markers passes through byte-for-byte.
    #[test]
    fn property_marker_free_text_is_unchanged(text in plain_text()) {
        let res = resolve_text(&text);
        prop_assert_eq!(&res.content, &text);
        prop_assert_eq!(res.dropped_lines, 0);
    }

    /// PROPERTY: A well-formed block always resolves to its local side.
    #[test]
    fn property_block_keeps_local_side(
        before in plain_text(),
        ours in plain_text(),
        theirs in plain_text(),
        after in plain_text(),
    ) {
        let text = format!(
            "{before}<<<<<<< HEAD\n{ours}=======\n{theirs}>>>>>>> topic\n{after}"
        );
        let res = resolve_text(&text);
        prop_assert_eq!(res.content, format!("{before}{ours}{after}"));
        prop_assert_eq!(res.blocks, 1);
        prop_assert!(!res.unterminated);
    }

    /// PROPERTY: Output is never longer than input, and is a subsequence
    /// of the input lines.
    #[test]
    fn property_output_is_subsequence_of_input(text in marker_soup()) {
        let res = resolve_text(&text);
        prop_assert!(res.content.len() <= text.len());

        let mut input = split_lines(&text);
        for kept in split_lines(&res.content) {
            prop_assert!(input.any(|l| l == kept));
        }
    }

    /// PROPERTY: Kept + dropped lines account for every input line.
    #[test]
    fn property_line_accounting(text in marker_soup()) {
        let res = resolve_text(&text);
        let total = split_lines(&text).count();
        let kept = split_lines(&res.content).count();
        prop_assert_eq!(kept + res.dropped_lines, total);
    }

    /// PROPERTY: Resolving never panics on arbitrary input.
    #[test]
    fn property_resolve_never_panics(s in "(?s).{0,512}") {
        let _ = resolve_text(&s);
        let _ = find_markers(&s);
    }

    /// PROPERTY: Once no markers remain, resolving again is a no-op.
    #[test]
    fn property_resolve_is_idempotent_when_clean(text in marker_soup()) {
        let once = resolve_text(&text).content;
        if find_markers(&once).is_empty() {
            prop_assert_eq!(resolve_text(&once).content, once);
        }
    }

    /// PROPERTY: Inspection reports exactly the planted marker lines,
    /// whatever the line endings.
    #[test]
    fn property_inspect_finds_planted_markers((text, planted) in planted_markers()) {
        let hits: Vec<(usize, String)> = find_markers(&text)
            .into_iter()
            .map(|h| (h.line, h.text))
            .collect();
        prop_assert_eq!(hits, planted);
    }

    /// PROPERTY: Bare `\r` endings resolve the same way as `\n` endings.
    #[test]
    fn property_cr_only_matches_lf(text in marker_soup()) {
        let as_cr = text.replace('\n', "\r");
        let resolved = resolve_text(&as_cr);
        prop_assert_eq!(resolved.content, resolve_text(&text).content.replace('\n', "\r"));
    }
}
