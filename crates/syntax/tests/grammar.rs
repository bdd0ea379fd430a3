use whence_syntax::{match_tokens, tokenize, Expr, SyntaxError, TokenClass};

fn parse(text: &str) -> Result<Expr, SyntaxError> {
    match_tokens(&tokenize(text).unwrap())
}

#[test]
fn accepted_phrases() {
    let phrases = [
        "now",
        "today",
        "tomorrow",
        "yesterday",
        "3 days ago",
        "2 weeks from now",
        "in 45 minutes",
        "10 years later",
        "next monday",
        "last fri",
        "next december",
        "last jan",
        "next week",
        "last year",
        "3pm",
        "at 15:04",
        "tomorrow at 3pm",
        "next friday at 19:43",
        "yesterday 9:30am",
        "2022-12-04",
        "2022-12-04T20:00",
        "T20:00",
    ];
    for phrase in phrases {
        assert!(parse(phrase).is_ok(), "rejected {phrase:?}");
    }
}

#[test]
fn rejected_phrases() {
    let phrases = [
        "",
        "purple banana",
        "monday",       // bare weekday needs next/last
        "december",     // bare month needs next/last
        "3 days",       // missing direction
        "next",         // missing anchor
        "in 3",         // missing unit
        "3 purple ago", // unknown unit word
        "ago 3 days",   // direction cannot lead
        "tomorrow at",  // missing clock after at
        "3pm at 4pm",   // nested time clause
        "tomorrow next monday",
    ];
    for phrase in phrases {
        assert!(parse(phrase).is_err(), "accepted {phrase:?}");
    }
}

#[test]
fn expected_set_never_contains_unrecognized() {
    // TokenClass has no Unrecognized variant at all; assert the reported
    // sets are non-empty and positional info is exact.
    let err = parse("purple banana").unwrap_err();
    assert_eq!(err.position, 0);
    assert!(!err.expected.is_empty());

    let err = parse("3 days purple").unwrap_err();
    assert_eq!(err.position, 2);
    assert!(err.expected.contains(&TokenClass::Keyword(
        whence_syntax::Keyword::Ago
    )));
}

#[test]
fn error_positions_point_at_offending_token() {
    let cases = [
        ("tomorrow tomorrow", 1),
        ("next 3", 1),
        ("in tomorrow", 1),
        ("in 3 monday", 2),
    ];
    for (phrase, position) in cases {
        let err = parse(phrase).unwrap_err();
        assert_eq!(err.position, position, "wrong position for {phrase:?}");
    }
}

#[test]
fn messages_are_actionable() {
    let err = parse("tomorrow at").unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error at position 2: found end of input, expected a clock time"
    );
}
