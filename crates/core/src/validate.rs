//! Per-field constraint rules applied on every mutation.

use crate::value::Value;

/// A single constraint attached to a field descriptor.
///
/// Rules are checked in declaration order; the first violation wins.
/// A rule that does not apply to the value's kind (a digit pattern on an
/// integer, say) is skipped.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Only ASCII digits, between `min` and `max` of them.
    Digits { min: usize, max: usize },
    /// Character count between `min` and `max`.
    Length { min: usize, max: usize },
    /// Only ASCII letters and digits, between `min` and `max` of them.
    Alphanumeric { min: usize, max: usize },
    /// One of a fixed set of codes.
    OneOf(&'static [&'static str]),
    /// Integer value in `min..=max`.
    Range { min: i64, max: i64 },
    /// Arbitrary predicate; `expected` describes what passes.
    Custom {
        check: fn(&Value) -> bool,
        expected: &'static str,
    },
}

impl Rule {
    /// Exactly `n` digits.
    pub const fn digits(n: usize) -> Rule {
        Rule::Digits { min: n, max: n }
    }

    /// Checks `value`, returning a human-readable reason on violation.
    pub fn check(&self, value: &Value) -> Result<(), String> {
        match (self, value) {
            (Rule::Digits { min, max }, Value::Text(s)) => {
                let count = s.chars().count();
                if s.chars().all(|c| c.is_ascii_digit()) && (*min..=*max).contains(&count) {
                    Ok(())
                } else {
                    Err(expect_count("digits", *min, *max))
                }
            }
            (Rule::Length { min, max }, Value::Text(s)) => {
                let count = s.chars().count();
                if (*min..=*max).contains(&count) {
                    Ok(())
                } else {
                    Err(format!(
                        "length ({}) must be {}",
                        count,
                        span(*min, *max, "characters")
                    ))
                }
            }
            (Rule::Alphanumeric { min, max }, Value::Text(s)) => {
                let count = s.chars().count();
                if s.chars().all(|c| c.is_ascii_alphanumeric()) && (*min..=*max).contains(&count) {
                    Ok(())
                } else {
                    Err(expect_count("alphanumeric characters", *min, *max))
                }
            }
            (Rule::OneOf(allowed), Value::Text(s)) => {
                if allowed.iter().any(|code| *code == s.as_str()) {
                    Ok(())
                } else {
                    Err(format!("expected one of [{}]", allowed.join(", ")))
                }
            }
            (Rule::Range { min, max }, Value::Integer(n)) => {
                if (*min..=*max).contains(n) {
                    Ok(())
                } else {
                    Err(format!("expected a value between {} and {}", min, max))
                }
            }
            (Rule::Custom { check, expected }, v) => {
                if check(v) {
                    Ok(())
                } else {
                    Err(format!("expected {}", expected))
                }
            }
            _ => Ok(()),
        }
    }
}

fn span(min: usize, max: usize, unit: &str) -> String {
    if min == max {
        format!("exactly {} {}", min, unit)
    } else {
        format!("{} to {} {}", min, max, unit)
    }
}

fn expect_count(unit: &str, min: usize, max: usize) -> String {
    format!("expected {}", span(min, max, unit))
}

/// Runs `rules` against `value` in order.
pub fn check_all(rules: &[Rule], value: &Value) -> Result<(), String> {
    rules.iter().try_for_each(|rule| rule.check(value))
}
