//! Property tests for journal line splitting and append/read.

use proptest::prelude::*;

use primer::{split_records, Journal};

fn plain_line() -> impl Strategy<Value = String> {
    // Lines never contain line-ending characters; those are added by the test.
    proptest::string::string_regex("[A-Za-z0-9 _:#\\-]{1,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: splitting never panics and never yields a line with CR or LF.
    #[test]
    fn property_split_never_leaks_line_endings(text in "[a-z\r\n ]{0,64}") {
        for line in split_records(&text) {
            prop_assert!(!line.contains('\r'));
            prop_assert!(!line.contains('\n'));
        }
    }

    /// PROPERTY: plain LF and CRLF files split into the same lines.
    #[test]
    fn property_crlf_matches_lf(lines in proptest::collection::vec(plain_line(), 0..=10)) {
        let lf = lines.join("\n");
        let crlf = lines.join("\r\n");
        prop_assert_eq!(split_records(&lf), lines.clone());
        prop_assert_eq!(split_records(&crlf), lines);
    }

    /// PROPERTY: after an append, the appended line is the last line read.
    #[test]
    fn property_append_is_last_line(
        existing in proptest::collection::vec(plain_line(), 0..=6),
        trailing_newline in any::<bool>(),
        appended in plain_line(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("read_and_write.txt");
        let mut content = existing.join("\n");
        if trailing_newline && !existing.is_empty() {
            content.push('\n');
        }
        std::fs::write(&path, &content).unwrap();

        let journal = Journal::new(&path);
        journal.append(&appended).unwrap();
        let lines = journal.read_lines().unwrap();

        prop_assert_eq!(lines.last(), Some(&appended));
        prop_assert_eq!(lines.len(), existing.len() + 1);
    }
}
