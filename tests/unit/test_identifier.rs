use cobra_scaffold::normalize_command_name;

/// Test module for command name normalization
mod identifier_tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "serve",
        "Serve",
        "foo-bar",
        "foo_bar_baz",
        "foo--bar",
        "foo_-bar",
        "foo-",
        "-foo",
        "_",
        "add-user_role",
        "x-1-y",
        "HTTP-server",
    ];

    /// Normalizing twice gives the same result as normalizing once
    #[test]
    fn test_normalize_is_idempotent() {
        for sample in SAMPLES {
            let once = normalize_command_name(sample);
            assert_eq!(normalize_command_name(&once), once, "sample {sample:?}");
        }
    }

    /// Output never contains a separator
    #[test]
    fn test_output_has_no_separators() {
        for sample in SAMPLES {
            let output = normalize_command_name(sample);
            assert!(!output.contains(['-', '_']), "sample {sample:?} gave {output:?}");
        }
    }

    /// Names without separators come back unchanged
    #[test]
    fn test_identity_without_separators() {
        for sample in ["", "serve", "Serve", "fooBar", "v2", "ALLCAPS"] {
            assert_eq!(normalize_command_name(sample), sample);
        }
    }

    /// Documented examples
    #[test]
    fn test_known_outputs() {
        let cases = [
            ("foo-bar", "fooBar"),
            ("foo_bar-baz", "fooBarBaz"),
            ("foo_bar_baz", "fooBarBaz"),
            ("foo--bar", "fooBar"),
            ("foo-", "foo"),
            ("-foo", "Foo"),
            ("", ""),
        ];

        for (input, expected) in cases {
            assert_eq!(normalize_command_name(input), expected, "input {input:?}");
        }
    }
}
