//! Tokenizer for the date/time grammar.
//!
//! Greedy left-to-right scan over a case-normalized copy of the input.
//! Glued patterns (clock times, ISO fragments) are recognized with a
//! fixed-width lookahead before the generic number/word paths run, so no
//! backtracking is ever needed.

use whence_civil::Weekday;

use crate::error::LexError;
use crate::token::{Direction, Keyword, Meridiem, Token, TokenKind, Unit};

/// Splits `text` into an ordered token sequence.
///
/// The input is lowercased internally and whitespace between tokens is
/// skipped; the caller's string is never mutated. Unknown words become
/// [`TokenKind::Unrecognized`] rather than failing here, so the matcher
/// can report the token position.
///
/// # Errors
///
/// Returns [`LexError`] only for structurally unscannable input: a
/// character that cannot begin any token, or a numeric run that does not
/// fit in an `i64`.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    let normalized = text.to_lowercase();
    let chars: Vec<char> = normalized.chars().collect();
    let mut tokens: Vec<Token> = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
        } else if c.is_ascii_digit() {
            i = scan_numeric(&chars, i, &mut tokens)?;
        } else if c.is_alphabetic() {
            i = scan_word(&chars, i, &mut tokens);
        } else {
            return Err(LexError::UnexpectedChar { ch: c, offset: i });
        }
    }
    Ok(tokens)
}

/// Parses exactly `n` ASCII digits at `pos`, if present.
fn digits(chars: &[char], pos: usize, n: usize) -> Option<u32> {
    if pos + n > chars.len() {
        return None;
    }
    let mut value = 0u32;
    for &c in &chars[pos..pos + n] {
        value = value * 10 + c.to_digit(10)?;
    }
    Some(value)
}

fn char_at(chars: &[char], pos: usize) -> Option<char> {
    chars.get(pos).copied()
}

/// True if the character at `pos` does not continue a numeric run.
fn digit_boundary(chars: &[char], pos: usize) -> bool {
    !matches!(char_at(chars, pos), Some(c) if c.is_ascii_digit())
}

/// True if the character at `pos` does not continue a word run.
fn word_boundary(chars: &[char], pos: usize) -> bool {
    !matches!(char_at(chars, pos), Some(c) if c.is_alphanumeric())
}

/// Recognizes a glued `am`/`pm` at `pos`, respecting word boundaries.
fn glued_meridiem(chars: &[char], pos: usize) -> Option<Meridiem> {
    let meridiem = match char_at(chars, pos)? {
        'a' => Meridiem::Am,
        'p' => Meridiem::Pm,
        _ => return None,
    };
    if char_at(chars, pos + 1) == Some('m') && word_boundary(chars, pos + 2) {
        Some(meridiem)
    } else {
        None
    }
}

/// Recognizes `HH:MM(:SS)` with a two-digit hour at `pos`.
///
/// Returns the parsed fields and the position after the match.
fn glued_hhmm(chars: &[char], pos: usize) -> Option<(u8, u8, Option<u8>, usize)> {
    let hour = digits(chars, pos, 2)?;
    if char_at(chars, pos + 2) != Some(':') {
        return None;
    }
    let minute = digits(chars, pos + 3, 2)?;
    let mut end = pos + 5;
    let mut second = None;
    if char_at(chars, end) == Some(':') {
        if let Some(s) = digits(chars, end + 1, 2) {
            if digit_boundary(chars, end + 3) {
                second = Some(s as u8);
                end += 3;
            }
        }
    }
    if digit_boundary(chars, end) {
        Some((hour as u8, minute as u8, second, end))
    } else {
        None
    }
}

/// Scans a token starting with a digit: an ISO fragment, a clock time,
/// or a plain number. Returns the position after the token.
fn scan_numeric(
    chars: &[char],
    start: usize,
    tokens: &mut Vec<Token>,
) -> Result<usize, LexError> {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }
    let run_len = end - start;

    // ISO date YYYY-MM-DD, optionally glued to THH:MM(:SS).
    if run_len == 4
        && char_at(chars, end) == Some('-')
        && char_at(chars, end + 3) == Some('-')
        && digit_boundary(chars, end + 6)
    {
        if let (Some(month), Some(day)) = (digits(chars, end + 1, 2), digits(chars, end + 4, 2)) {
            let year = digits(chars, start, 4).expect("run is four ascii digits") as i32;
            let date_end = end + 6;
            if char_at(chars, date_end) == Some('t') {
                if let Some((hour, minute, second, time_end)) = glued_hhmm(chars, date_end + 1) {
                    tokens.push(Token {
                        kind: TokenKind::IsoDateTime {
                            year,
                            month: month as u8,
                            day: day as u8,
                            hour,
                            minute,
                            second,
                        },
                        pos: tokens.len(),
                    });
                    return Ok(time_end);
                }
            }
            tokens.push(Token {
                kind: TokenKind::IsoDate {
                    year,
                    month: month as u8,
                    day: day as u8,
                },
                pos: tokens.len(),
            });
            return Ok(date_end);
        }
    }

    // Clock time H(:MM)(:SS)(am|pm) with a one- or two-digit hour.
    if run_len <= 2 {
        if char_at(chars, end) == Some(':') {
            if let Some(minute) = digits(chars, end + 1, 2) {
                let mut clock_end = end + 3;
                let mut second = None;
                if char_at(chars, clock_end) == Some(':') {
                    if let Some(s) = digits(chars, clock_end + 1, 2) {
                        if digit_boundary(chars, clock_end + 3) {
                            second = Some(s as u8);
                            clock_end += 3;
                        }
                    }
                }
                if digit_boundary(chars, clock_end) {
                    let mut meridiem = None;
                    if let Some(m) = glued_meridiem(chars, clock_end) {
                        meridiem = Some(m);
                        clock_end += 2;
                    }
                    let hour = digits(chars, start, run_len).expect("run is ascii digits") as u8;
                    tokens.push(Token {
                        kind: TokenKind::Clock {
                            hour,
                            minute: minute as u8,
                            second,
                            meridiem,
                        },
                        pos: tokens.len(),
                    });
                    return Ok(clock_end);
                }
            }
        }
        // Bare hour glued to a meridiem: "3pm".
        if let Some(meridiem) = glued_meridiem(chars, end) {
            let hour = digits(chars, start, run_len).expect("run is ascii digits") as u8;
            tokens.push(Token {
                kind: TokenKind::Clock {
                    hour,
                    minute: 0,
                    second: None,
                    meridiem: Some(meridiem),
                },
                pos: tokens.len(),
            });
            return Ok(end + 2);
        }
    }

    // Plain number.
    let text: String = chars[start..end].iter().collect();
    let value: i64 = text
        .parse()
        .map_err(|_| LexError::NumberOutOfRange { offset: start })?;
    tokens.push(Token {
        kind: TokenKind::Number(value),
        pos: tokens.len(),
    });
    Ok(end)
}

/// Scans an alphabetic run: a vocabulary word, a standalone meridiem that
/// attaches to the previous token, an ISO time (`t` glued to `HH:MM`), or
/// an unrecognized word. Returns the position after the token.
fn scan_word(chars: &[char], start: usize, tokens: &mut Vec<Token>) -> usize {
    let mut end = start;
    while end < chars.len() && chars[end].is_alphabetic() {
        end += 1;
    }
    let word: String = chars[start..end].iter().collect();

    // ISO time fragment THH:MM(:SS).
    if word == "t" {
        if let Some((hour, minute, second, time_end)) = glued_hhmm(chars, end) {
            tokens.push(Token {
                kind: TokenKind::IsoTime {
                    hour,
                    minute,
                    second,
                },
                pos: tokens.len(),
            });
            return time_end;
        }
    }

    // Standalone "am"/"pm" folds into a preceding clock or bare hour.
    if let Some(meridiem) = standalone_meridiem(&word) {
        if let Some(last) = tokens.last_mut() {
            match last.kind {
                TokenKind::Clock {
                    hour,
                    minute,
                    second,
                    meridiem: None,
                } => {
                    last.kind = TokenKind::Clock {
                        hour,
                        minute,
                        second,
                        meridiem: Some(meridiem),
                    };
                    return end;
                }
                TokenKind::Number(n) if (0..=23).contains(&n) => {
                    last.kind = TokenKind::Clock {
                        hour: n as u8,
                        minute: 0,
                        second: None,
                        meridiem: Some(meridiem),
                    };
                    return end;
                }
                _ => {}
            }
        }
    }

    let kind = lookup(&word).unwrap_or(TokenKind::Unrecognized(word));
    tokens.push(Token {
        kind,
        pos: tokens.len(),
    });
    end
}

fn standalone_meridiem(word: &str) -> Option<Meridiem> {
    match word {
        "am" => Some(Meridiem::Am),
        "pm" => Some(Meridiem::Pm),
        _ => None,
    }
}

/// Fixed vocabulary tables: units, weekdays, months, keywords, directions.
/// All lookups are on the lowercased word.
fn lookup(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "second" | "seconds" | "sec" | "secs" => TokenKind::Unit(Unit::Second),
        "minute" | "minutes" | "min" | "mins" => TokenKind::Unit(Unit::Minute),
        "hour" | "hours" | "hr" | "hrs" => TokenKind::Unit(Unit::Hour),
        "day" | "days" => TokenKind::Unit(Unit::Day),
        "week" | "weeks" | "wk" | "wks" => TokenKind::Unit(Unit::Week),
        "month" | "months" => TokenKind::Unit(Unit::Month),
        "year" | "years" | "yr" | "yrs" => TokenKind::Unit(Unit::Year),

        "monday" | "mon" => TokenKind::Weekday(Weekday::Monday),
        "tuesday" | "tue" | "tues" => TokenKind::Weekday(Weekday::Tuesday),
        "wednesday" | "wed" => TokenKind::Weekday(Weekday::Wednesday),
        "thursday" | "thu" | "thur" | "thurs" => TokenKind::Weekday(Weekday::Thursday),
        "friday" | "fri" => TokenKind::Weekday(Weekday::Friday),
        "saturday" | "sat" => TokenKind::Weekday(Weekday::Saturday),
        "sunday" | "sun" => TokenKind::Weekday(Weekday::Sunday),

        "january" | "jan" => TokenKind::Month(1),
        "february" | "feb" => TokenKind::Month(2),
        "march" | "mar" => TokenKind::Month(3),
        "april" | "apr" => TokenKind::Month(4),
        "may" => TokenKind::Month(5),
        "june" | "jun" => TokenKind::Month(6),
        "july" | "jul" => TokenKind::Month(7),
        "august" | "aug" => TokenKind::Month(8),
        "september" | "sep" | "sept" => TokenKind::Month(9),
        "october" | "oct" => TokenKind::Month(10),
        "november" | "nov" => TokenKind::Month(11),
        "december" | "dec" => TokenKind::Month(12),

        "today" => TokenKind::Keyword(Keyword::Today),
        "tomorrow" => TokenKind::Keyword(Keyword::Tomorrow),
        "yesterday" => TokenKind::Keyword(Keyword::Yesterday),
        "now" => TokenKind::Keyword(Keyword::Now),
        "next" => TokenKind::Keyword(Keyword::Next),
        "last" => TokenKind::Keyword(Keyword::Last),
        "ago" => TokenKind::Keyword(Keyword::Ago),
        "from" => TokenKind::Keyword(Keyword::From),
        "at" => TokenKind::Keyword(Keyword::At),
        "in" => TokenKind::Keyword(Keyword::In),

        "later" | "ahead" | "hence" => TokenKind::Direction(Direction::Forward),
        "earlier" | "before" => TokenKind::Direction(Direction::Backward),

        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn relative_phrase() {
        assert_eq!(
            kinds("3 days ago"),
            vec![
                TokenKind::Number(3),
                TokenKind::Unit(Unit::Day),
                TokenKind::Keyword(Keyword::Ago),
            ]
        );
    }

    #[test]
    fn case_insensitive_and_whitespace_collapsed() {
        assert_eq!(kinds("  NeXt   MONDAY "), kinds("next monday"));
    }

    #[test]
    fn positions_are_token_indices() {
        let tokens = tokenize("2 weeks from now").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn unknown_words_are_deferred() {
        assert_eq!(
            kinds("purple banana"),
            vec![
                TokenKind::Unrecognized("purple".to_string()),
                TokenKind::Unrecognized("banana".to_string()),
            ]
        );
    }

    #[test]
    fn unscannable_symbol_is_lex_error() {
        assert_eq!(
            tokenize("3 days %").unwrap_err(),
            LexError::UnexpectedChar { ch: '%', offset: 7 }
        );
    }

    #[test]
    fn huge_number_is_lex_error() {
        assert!(matches!(
            tokenize("99999999999999999999 days ago").unwrap_err(),
            LexError::NumberOutOfRange { offset: 0 }
        ));
    }

    #[test]
    fn clock_glued_meridiem() {
        assert_eq!(
            kinds("3pm"),
            vec![TokenKind::Clock {
                hour: 3,
                minute: 0,
                second: None,
                meridiem: Some(Meridiem::Pm),
            }]
        );
    }

    #[test]
    fn clock_standalone_meridiem_after_number() {
        assert_eq!(kinds("3 pm"), kinds("3pm"));
    }

    #[test]
    fn clock_standalone_meridiem_after_clock() {
        assert_eq!(kinds("3:30 pm"), kinds("3:30pm"));
    }

    #[test]
    fn clock_with_minutes_and_seconds() {
        assert_eq!(
            kinds("15:04:05"),
            vec![TokenKind::Clock {
                hour: 15,
                minute: 4,
                second: Some(5),
                meridiem: None,
            }]
        );
    }

    #[test]
    fn meridiem_without_hour_is_unrecognized() {
        assert_eq!(
            kinds("at pm"),
            vec![
                TokenKind::Keyword(Keyword::At),
                TokenKind::Unrecognized("pm".to_string()),
            ]
        );
    }

    #[test]
    fn iso_date() {
        assert_eq!(
            kinds("2022-12-04"),
            vec![TokenKind::IsoDate {
                year: 2022,
                month: 12,
                day: 4,
            }]
        );
    }

    #[test]
    fn iso_date_out_of_range_fields_still_lex() {
        // Range validation happens at resolution, not here.
        assert_eq!(
            kinds("2022-13-40"),
            vec![TokenKind::IsoDate {
                year: 2022,
                month: 13,
                day: 40,
            }]
        );
    }

    #[test]
    fn iso_date_time_combined() {
        assert_eq!(
            kinds("2022-12-04T20:00"),
            vec![TokenKind::IsoDateTime {
                year: 2022,
                month: 12,
                day: 4,
                hour: 20,
                minute: 0,
                second: None,
            }]
        );
    }

    #[test]
    fn iso_date_time_with_seconds() {
        assert_eq!(
            kinds("2022-12-04t20:00:37"),
            vec![TokenKind::IsoDateTime {
                year: 2022,
                month: 12,
                day: 4,
                hour: 20,
                minute: 0,
                second: Some(37),
            }]
        );
    }

    #[test]
    fn iso_time_fragment() {
        assert_eq!(
            kinds("T20:00"),
            vec![TokenKind::IsoTime {
                hour: 20,
                minute: 0,
                second: None,
            }]
        );
    }

    #[test]
    fn bare_colon_time_is_clock_not_iso() {
        assert_eq!(
            kinds("20:00"),
            vec![TokenKind::Clock {
                hour: 20,
                minute: 0,
                second: None,
                meridiem: None,
            }]
        );
    }

    #[test]
    fn vocabulary_units_with_plurals() {
        for (text, unit) in [
            ("second", Unit::Second),
            ("seconds", Unit::Second),
            ("mins", Unit::Minute),
            ("hour", Unit::Hour),
            ("weeks", Unit::Week),
            ("months", Unit::Month),
            ("yrs", Unit::Year),
        ] {
            assert_eq!(kinds(text), vec![TokenKind::Unit(unit)], "word {text:?}");
        }
    }

    #[test]
    fn vocabulary_weekday_abbreviations() {
        assert_eq!(kinds("wed"), vec![TokenKind::Weekday(Weekday::Wednesday)]);
        assert_eq!(kinds("thurs"), vec![TokenKind::Weekday(Weekday::Thursday)]);
    }

    #[test]
    fn vocabulary_month_names() {
        assert_eq!(kinds("december"), vec![TokenKind::Month(12)]);
        assert_eq!(kinds("jan"), vec![TokenKind::Month(1)]);
        assert_eq!(kinds("may"), vec![TokenKind::Month(5)]);
    }

    #[test]
    fn direction_words() {
        assert_eq!(
            kinds("later"),
            vec![TokenKind::Direction(Direction::Forward)]
        );
        assert_eq!(
            kinds("earlier"),
            vec![TokenKind::Direction(Direction::Backward)]
        );
    }

    #[test]
    fn glued_number_and_unit() {
        // The word scanner picks up where the digit run ends.
        assert_eq!(
            kinds("3days"),
            vec![TokenKind::Number(3), TokenKind::Unit(Unit::Day)]
        );
    }

    #[test]
    fn empty_input_is_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
