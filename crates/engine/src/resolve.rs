//! Pure calendar-arithmetic resolution of expressions.

use whence_civil::{CivilError, Date, DateTime, Time};
use whence_syntax::{Absolute, ClockTime, Direction, Expr, Unit};

/// Resolves an expression against a reference instant.
///
/// Resolution is pure: identical `(expr, reference)` always produce the
/// identical instant, and the result carries the reference's offset
/// unchanged. See [`crate::parse`] for the full pipeline.
///
/// # Errors
///
/// Returns [`CivilError`] when the expression names an impossible
/// calendar value (month 13, hour 25) or when arithmetic leaves the
/// representable year range.
pub fn resolve(expr: &Expr, reference: DateTime) -> Result<DateTime, CivilError> {
    match *expr {
        Expr::Absolute(ref fields) => resolve_absolute(fields, reference),
        Expr::Relative {
            quantity,
            unit,
            direction,
        } => resolve_relative(quantity, unit, direction, reference),
        Expr::WeekdayAnchor {
            weekday,
            direction,
            inclusive,
        } => resolve_weekday(weekday, direction, inclusive, reference),
        Expr::MonthAnchor { month, direction } => resolve_month(month, direction, reference),
        Expr::Compound { ref base, time } => {
            let resolved = resolve(base, reference)?;
            resolve_time_override(time, resolved)
        }
    }
}

/// Explicit fields override, unset fields inherit from the reference.
fn resolve_absolute(fields: &Absolute, reference: DateTime) -> Result<DateTime, CivilError> {
    let date = Date::new(
        fields.year.unwrap_or(reference.year()),
        fields.month.unwrap_or(reference.month()),
        fields.day.unwrap_or(reference.day()),
    )?;
    let time = Time::new(
        fields.hour.unwrap_or(reference.time().hour()),
        fields.minute.unwrap_or(reference.time().minute()),
        fields.second.unwrap_or(reference.time().second()),
    )?;
    Ok(reference.with_date(date).with_time(time))
}

fn resolve_relative(
    quantity: i64,
    unit: Unit,
    direction: Direction,
    reference: DateTime,
) -> Result<DateTime, CivilError> {
    let signed = match direction {
        Direction::Forward => quantity,
        Direction::Backward => quantity.checked_neg().ok_or(CivilError::Overflow)?,
    };
    match unit {
        Unit::Second => reference.add_seconds(signed),
        Unit::Minute => {
            reference.add_seconds(signed.checked_mul(60).ok_or(CivilError::Overflow)?)
        }
        Unit::Hour => {
            reference.add_seconds(signed.checked_mul(3600).ok_or(CivilError::Overflow)?)
        }
        Unit::Day => reference.add_days(signed),
        Unit::Week => reference.add_days(signed.checked_mul(7).ok_or(CivilError::Overflow)?),
        Unit::Month => reference.add_months(signed),
        Unit::Year => reference.add_years(signed),
    }
}

/// Walks the calendar day-by-day until the weekday matches.
///
/// The walk starts at step 1 when `inclusive` is false, so a reference
/// that already falls on the named weekday is skipped: "next wednesday"
/// on a Wednesday is seven days out, never the reference day.
fn resolve_weekday(
    weekday: whence_civil::Weekday,
    direction: Direction,
    inclusive: bool,
    reference: DateTime,
) -> Result<DateTime, CivilError> {
    let sign: i64 = match direction {
        Direction::Forward => 1,
        Direction::Backward => -1,
    };
    let start = i64::from(!inclusive);
    for step in start..=7 {
        let date = reference.date().add_days(sign * step)?;
        if date.weekday() == weekday {
            return Ok(reference.with_date(date));
        }
    }
    // Safety: seven consecutive days cover every weekday.
    unreachable!("weekday walk is bounded to one full week")
}

/// Walks month-by-month, strictly excluding the reference month, with
/// the reference's day-of-month clamped to the target month's length.
fn resolve_month(
    month: u8,
    direction: Direction,
    reference: DateTime,
) -> Result<DateTime, CivilError> {
    if !(1..=12).contains(&month) {
        return Err(CivilError::InvalidMonth { month });
    }
    let sign: i64 = match direction {
        Direction::Forward => 1,
        Direction::Backward => -1,
    };
    for step in 1..=12 {
        let date = reference.date().add_months(sign * step)?;
        if date.month() == month {
            return Ok(reference.with_date(date));
        }
    }
    // Safety: twelve consecutive months cover every month.
    unreachable!("month walk is bounded to one full year")
}

/// Overwrites the time-of-day, leaving the resolved calendar date alone.
fn resolve_time_override(time: ClockTime, resolved: DateTime) -> Result<DateTime, CivilError> {
    let time = Time::new(time.hour, time.minute, time.second)?;
    Ok(resolved.with_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use whence_civil::Weekday;

    fn dt(text: &str) -> DateTime {
        DateTime::parse_rfc3339(text).unwrap()
    }

    const REF: &str = "2022-12-04T20:00:37+01:00";

    #[test]
    fn absolute_full_ignores_reference() {
        let expr = Expr::Absolute(Absolute {
            year: Some(1999),
            month: Some(6),
            day: Some(15),
            hour: Some(8),
            minute: Some(30),
            second: Some(0),
        });
        let got = resolve(&expr, dt(REF)).unwrap();
        assert_eq!(got, dt("1999-06-15T08:30:00+01:00"));
        // Any other reference with the same offset yields the same instant.
        let other = resolve(&expr, dt("1970-01-01T00:00:00+01:00")).unwrap();
        assert_eq!(other, got);
    }

    #[test]
    fn absolute_partial_inherits_reference() {
        let expr = Expr::Absolute(Absolute {
            day: Some(25),
            ..Absolute::default()
        });
        let got = resolve(&expr, dt(REF)).unwrap();
        assert_eq!(got, dt("2022-12-25T20:00:37+01:00"));
    }

    #[test]
    fn absolute_out_of_range_month_is_range_error() {
        let expr = Expr::Absolute(Absolute {
            month: Some(13),
            ..Absolute::default()
        });
        assert_eq!(
            resolve(&expr, dt(REF)).unwrap_err(),
            CivilError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn relative_days_symmetric() {
        let ago = Expr::Relative {
            quantity: 3,
            unit: Unit::Day,
            direction: Direction::Backward,
        };
        let hence = Expr::Relative {
            quantity: 3,
            unit: Unit::Day,
            direction: Direction::Forward,
        };
        let reference = dt(REF);
        let past = resolve(&ago, reference).unwrap();
        let future = resolve(&hence, reference).unwrap();
        assert_eq!(past, dt("2022-12-01T20:00:37+01:00"));
        assert_eq!(future, dt("2022-12-07T20:00:37+01:00"));
        // Mirror images around the reference.
        assert_eq!(
            reference.unix_timestamp() - past.unix_timestamp(),
            future.unix_timestamp() - reference.unix_timestamp()
        );
    }

    #[test]
    fn relative_seconds_and_minutes() {
        let expr = Expr::Relative {
            quantity: 90,
            unit: Unit::Minute,
            direction: Direction::Forward,
        };
        assert_eq!(
            resolve(&expr, dt(REF)).unwrap(),
            dt("2022-12-04T21:30:37+01:00")
        );
    }

    #[test]
    fn relative_month_clamps_end_of_month() {
        let expr = Expr::Relative {
            quantity: 1,
            unit: Unit::Month,
            direction: Direction::Forward,
        };
        assert_eq!(
            resolve(&expr, dt("2023-01-31T12:00:00Z")).unwrap(),
            dt("2023-02-28T12:00:00Z")
        );
        assert_eq!(
            resolve(&expr, dt("2024-01-31T12:00:00Z")).unwrap(),
            dt("2024-02-29T12:00:00Z")
        );
    }

    #[test]
    fn relative_week_is_seven_days() {
        let expr = Expr::Relative {
            quantity: 2,
            unit: Unit::Week,
            direction: Direction::Forward,
        };
        assert_eq!(
            resolve(&expr, dt(REF)).unwrap(),
            dt("2022-12-18T20:00:37+01:00")
        );
    }

    #[test]
    fn relative_huge_quantity_is_range_error() {
        let expr = Expr::Relative {
            quantity: i64::MAX,
            unit: Unit::Year,
            direction: Direction::Forward,
        };
        assert!(resolve(&expr, dt(REF)).is_err());
    }

    #[test]
    fn weekday_next_from_earlier_weekday() {
        // Reference is a Sunday; next friday is 5 days out.
        let expr = Expr::WeekdayAnchor {
            weekday: Weekday::Friday,
            direction: Direction::Forward,
            inclusive: false,
        };
        assert_eq!(
            resolve(&expr, dt(REF)).unwrap(),
            dt("2022-12-09T20:00:37+01:00")
        );
    }

    #[test]
    fn weekday_next_same_day_skips_to_next_week() {
        // Reference is a Sunday; "next sunday" is 7 days out, never today.
        let expr = Expr::WeekdayAnchor {
            weekday: Weekday::Sunday,
            direction: Direction::Forward,
            inclusive: false,
        };
        assert_eq!(
            resolve(&expr, dt(REF)).unwrap(),
            dt("2022-12-11T20:00:37+01:00")
        );
    }

    #[test]
    fn weekday_last_same_day_skips_to_previous_week() {
        let expr = Expr::WeekdayAnchor {
            weekday: Weekday::Sunday,
            direction: Direction::Backward,
            inclusive: false,
        };
        assert_eq!(
            resolve(&expr, dt(REF)).unwrap(),
            dt("2022-11-27T20:00:37+01:00")
        );
    }

    #[test]
    fn weekday_inclusive_matches_day_zero() {
        let expr = Expr::WeekdayAnchor {
            weekday: Weekday::Sunday,
            direction: Direction::Forward,
            inclusive: true,
        };
        assert_eq!(resolve(&expr, dt(REF)).unwrap(), dt(REF));
    }

    #[test]
    fn month_anchor_forward() {
        // Reference is December; "next december" is a year out.
        let expr = Expr::MonthAnchor {
            month: 12,
            direction: Direction::Forward,
        };
        assert_eq!(
            resolve(&expr, dt(REF)).unwrap(),
            dt("2023-12-04T20:00:37+01:00")
        );
    }

    #[test]
    fn month_anchor_backward_clamps_day() {
        // From March 31 back to February: day clamps to 28.
        let expr = Expr::MonthAnchor {
            month: 2,
            direction: Direction::Backward,
        };
        assert_eq!(
            resolve(&expr, dt("2023-03-31T09:00:00Z")).unwrap(),
            dt("2023-02-28T09:00:00Z")
        );
    }

    #[test]
    fn compound_overrides_time_zeroes_seconds() {
        let expr = Expr::Compound {
            base: Box::new(Expr::Relative {
                quantity: 1,
                unit: Unit::Day,
                direction: Direction::Forward,
            }),
            time: ClockTime {
                hour: 15,
                minute: 0,
                second: 0,
            },
        };
        assert_eq!(
            resolve(&expr, dt(REF)).unwrap(),
            dt("2022-12-05T15:00:00+01:00")
        );
    }

    #[test]
    fn compound_invalid_hour_is_range_error() {
        let expr = Expr::Compound {
            base: Box::new(Expr::Absolute(Absolute::default())),
            time: ClockTime {
                hour: 27,
                minute: 0,
                second: 0,
            },
        };
        assert_eq!(
            resolve(&expr, dt(REF)).unwrap_err(),
            CivilError::InvalidHour { hour: 27 }
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let expr = Expr::WeekdayAnchor {
            weekday: Weekday::Wednesday,
            direction: Direction::Forward,
            inclusive: false,
        };
        let reference = dt(REF);
        let first = resolve(&expr, reference).unwrap();
        for _ in 0..10 {
            assert_eq!(resolve(&expr, reference).unwrap(), first);
        }
    }
}
