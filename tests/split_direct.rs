//! Direct library tests for command-line splitting and the compat helpers.

use argsplit::compat::{
    CompatError, DigestPolicy, ensure_bytes, get_md5, total_seconds, tzinfo_options, unquote_str,
};
use argsplit::shell::{Malformation, Platform, SplitError, join, shell_split, shell_split_for};

fn split(input: &str, platform: Platform) -> Vec<String> {
    shell_split(input, platform).unwrap_or_else(|e| panic!("{input:?}: {e}"))
}

fn check_cases(platform: Platform, cases: &[(&str, &[&str])]) {
    for (input, expected) in cases {
        assert_eq!(split(input, platform), *expected, "input: {input:?}");
    }
}

mod windows {
    use super::*;

    const CASES: &[(&str, &[&str])] = &[
        (r"", &[]),
        (r"spam \\", &[r"spam", r"\\"]),
        (r"spam ", &[r"spam"]),
        (r" spam", &[r"spam"]),
        ("spam eggs", &["spam", "eggs"]),
        ("spam\teggs", &["spam", "eggs"]),
        ("spam\neggs", &["spam\neggs"]),
        (r#""""#, &[""]),
        (r#"" ""#, &[" "]),
        ("\"\t\"", &["\t"]),
        (r"\\", &[r"\\"]),
        ("\\\\ ", &[r"\\"]),
        ("\\\\\t", &[r"\\"]),
        (r#"\""#, &[r#"""#]),
        // Examples from the Microsoft argv documentation.
        (r#""abc" d e"#, &["abc", "d", "e"]),
        (r#"a\\b d"e f"g h"#, &[r"a\\b", "de fg", "h"]),
        (r#"a\\\"b c d"#, &[r#"a\"b"#, "c", "d"]),
        (r#"a\\\\"b c" d e"#, &[r"a\\b c", "d", "e"]),
        (r#""a\"b c""#, &[r#"a"b c"#]),
        (r#""a\\\"b" c"#, &[r#"a\"b"#, "c"]),
    ];

    #[test]
    fn test_reference_cases() {
        check_cases(Platform::Windows, CASES);
    }

    #[test]
    fn test_backslashes_at_end_inside_quotes() {
        for input in [r#""abc\"#, r#""abc\\"#, r#"x "abc\""#] {
            let err = shell_split(input, Platform::Windows).unwrap_err();
            assert_eq!(
                err.malformation(),
                Some(Malformation::UnterminatedQuote),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_win32_identifier() {
        assert_eq!(
            shell_split_for(r#"a\\\"b c d"#, "win32").unwrap(),
            vec![r#"a\"b"#, "c", "d"]
        );
    }

    #[test]
    fn test_newline_and_carriage_return_are_content() {
        assert_eq!(split("a\r\nb c", Platform::Windows), vec!["a\r\nb", "c"]);
    }

    #[test]
    fn test_quote_after_text_continues_token() {
        assert_eq!(
            split(r#"--path="C:\Program Files\x" next"#, Platform::Windows),
            vec![r"--path=C:\Program Files\x", "next"]
        );
    }
}

mod posix {
    use super::*;

    const CASES: &[(&str, &[&str])] = &[
        (r"", &[]),
        (r"spam \\", &[r"spam", r"\"]),
        (r"spam ", &[r"spam"]),
        (r" spam", &[r"spam"]),
        ("spam eggs", &["spam", "eggs"]),
        ("spam\teggs", &["spam", "eggs"]),
        ("spam\neggs", &["spam", "eggs"]),
        (r#""""#, &[""]),
        (r#"" ""#, &[" "]),
        ("\"\t\"", &["\t"]),
        (r"\\", &[r"\"]),
        ("\\\\ ", &[r"\"]),
        ("\\\\\t", &[r"\"]),
        (r#"\""#, &[r#"""#]),
        (r#""abc" d e"#, &["abc", "d", "e"]),
        (r#"a\\b d"e f"g h"#, &[r"a\b", "de fg", "h"]),
        (r#"a\\\"b c d"#, &[r#"a\"b"#, "c", "d"]),
        (r#"a\\\\"b c" d e"#, &[r"a\\b c", "d", "e"]),
    ];

    #[test]
    fn test_reference_cases() {
        check_cases(Platform::Posix, CASES);
    }

    #[test]
    fn test_unix_identifiers() {
        for ident in ["linux2", "darwin"] {
            assert_eq!(
                shell_split_for(r#"a\\b d"e f"g h"#, ident).unwrap(),
                vec![r"a\b", "de fg", "h"]
            );
        }
    }

    #[test]
    fn test_escaped_whitespace() {
        assert_eq!(
            split(r"cp my\ file.txt /tmp", Platform::Posix),
            vec!["cp", "my file.txt", "/tmp"]
        );
        assert_eq!(split("a\\\nb", Platform::Posix), vec!["a\nb"]);
    }

    #[test]
    fn test_in_quote_escape_scope() {
        assert_eq!(
            split(r#""\$HOME \` \" \\""#, Platform::Posix),
            vec![r#"\$HOME \` " \"#]
        );
    }

    #[test]
    fn test_single_quotes() {
        assert_eq!(
            split(r#"sh -c 'echo "$1"' x"#, Platform::Posix),
            vec!["sh", "-c", r#"echo "$1""#, "x"]
        );
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_lone_quote_fails_everywhere() {
        for platform in ["linux2", "darwin", "win32"] {
            let err = shell_split_for("\"", platform).unwrap_err();
            assert!(
                matches!(
                    err,
                    SplitError::MalformedCommandLine {
                        reason: Malformation::UnterminatedQuote,
                        ..
                    }
                ),
                "{platform}: {err}"
            );
        }
    }

    #[test]
    fn test_trailing_backslash_posix_only() {
        let err = shell_split("run \\", Platform::Posix).unwrap_err();
        assert_eq!(err.malformation(), Some(Malformation::TrailingEscape));
        assert_eq!(split("run \\", Platform::Windows), vec!["run", "\\"]);
    }

    #[test]
    fn test_error_keeps_command_line() {
        let err = shell_split("echo \"oops", Platform::Windows).unwrap_err();
        assert_eq!(
            err,
            SplitError::MalformedCommandLine {
                reason: Malformation::UnterminatedQuote,
                command_line: "echo \"oops".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_platform() {
        assert_eq!(
            shell_split_for("ls", "plan9").unwrap_err(),
            SplitError::UnknownPlatform("plan9".to_string())
        );
    }
}

mod round_trip {
    use super::*;

    const PLAIN_LISTS: &[&[&str]] = &[
        &[],
        &["ls"],
        &["git", "commit", "-m", "message"],
        &["cargo", "+nightly", "build", "--target=x86_64-pc-windows-msvc"],
        &["C:/tools/bin/run.exe", "/flag:value", "\u{2713}"],
    ];

    #[test]
    fn test_join_then_split_reproduces_tokens() {
        for platform in [Platform::Posix, Platform::Windows] {
            for tokens in PLAIN_LISTS {
                let joined = join(tokens);
                assert_eq!(split(&joined, platform), *tokens, "{platform}: {joined:?}");
            }
        }
    }

    #[test]
    fn test_splitting_is_deterministic() {
        let input = r#"a\\\\"b c" d e 'f g'"#;
        for platform in [Platform::Posix, Platform::Windows] {
            assert_eq!(split(input, platform), split(input, platform));
        }
    }

    #[test]
    fn test_plain_input_splits_on_delimiter_runs() {
        let input = "  alpha\tbeta  gamma\t\t";
        for platform in [Platform::Posix, Platform::Windows] {
            assert_eq!(split(input, platform), vec!["alpha", "beta", "gamma"]);
        }
    }
}

mod compat {
    use super::*;
    use md5::Digest;
    use serde_json::json;

    #[test]
    fn test_ensure_bytes() {
        assert_eq!(ensure_bytes(&json!("foo")).unwrap().as_ref(), b"foo");
        assert_eq!(ensure_bytes(&json!([98, 97, 114])).unwrap().as_ref(), b"bar");
        assert!(matches!(
            ensure_bytes(&json!(500)),
            Err(CompatError::UnsupportedCoercionType { .. })
        ));
    }

    #[test]
    fn test_unquote_str() {
        assert_eq!(unquote_str("%E2%9C%93"), "\u{2713}");
        assert_eq!(unquote_str("foo+bar"), "foo bar");
    }

    #[test]
    fn test_digest_policy() {
        let mut md5 = get_md5(DigestPolicy::permissive()).unwrap();
        md5.update(b"hello");
        assert_eq!(md5.finalize().len(), 16);

        for _ in 0..3 {
            assert_eq!(
                get_md5(DigestPolicy::restricted()).unwrap_err(),
                CompatError::DigestUnavailable { algorithm: "md5" }
            );
        }
    }

    #[test]
    fn test_tzinfo_options() {
        let naive = chrono::NaiveDate::from_ymd_opt(2021, 3, 10)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap();
        let options = tzinfo_options();
        assert!(!options.is_empty());
        for make in options {
            assert!(make().localize(naive).is_some());
        }
    }

    #[test]
    fn test_total_seconds() {
        let delta = chrono::TimeDelta::days(1) + chrono::TimeDelta::seconds(45);
        assert_eq!(total_seconds(delta), 86445.0);
    }
}
