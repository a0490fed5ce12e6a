//! Property tests for directive parsing.

use proptest::prelude::*;

use jobprune::domain::services::references;
use jobprune::parse_directive;

fn job_token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z0-9_\\-]{1,16}").unwrap()
}

fn padding() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ \t]{0,4}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(line in "(?s).{0,256}", prefix in ".{0,16}") {
        let _ = parse_directive(&line, &prefix);
        let _ = references(&line, &prefix).count();
    }

    /// PROPERTY: The name is the first token after the prefix, whatever the padding.
    #[test]
    fn property_first_token_wins(
        lead in padding(),
        gap in padding(),
        name in job_token(),
        rest in "( [a-z=0-9]{1,8}){0,3}",
        trail in padding(),
    ) {
        let line = format!("{}CALL JOB:{}{}{}{}", lead, gap, name, rest, trail);
        let parsed = parse_directive(&line, "CALL JOB:");
        prop_assert_eq!(parsed.as_ref().map(|n| n.as_str()), Some(name.as_str()));
    }

    /// PROPERTY: Lines without the prefix are never directives.
    #[test]
    fn property_other_lines_ignored(line in "[A-Z ]{0,32}") {
        prop_assume!(!line.trim_start().starts_with("CALL JOB:"));
        prop_assert!(parse_directive(&line, "CALL JOB:").is_none());
    }

    /// PROPERTY: One reference per directive line, in line order.
    #[test]
    fn property_references_follow_line_order(names in proptest::collection::vec(job_token(), 0..8)) {
        let content: String = names
            .iter()
            .map(|n| format!("NOP\nCALL JOB:{}\n", n))
            .collect();
        let found: Vec<String> = references(&content, "CALL JOB:")
            .map(|n| n.as_str().to_string())
            .collect();
        prop_assert_eq!(found, names);
    }
}
