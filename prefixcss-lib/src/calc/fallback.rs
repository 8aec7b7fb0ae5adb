//! Per-vendor rewriting of `calc(...);` declarations.
//!
//! Only expressions closed by `)` directly followed by `;` (whitespace
//! allowed) are considered, and the body ends at the first such `)`.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::evaluate;
use crate::diagnostics::Diagnostic;
use crate::style::lines::FALLBACK_MARKER;
use crate::style::vendor::{CalcStrategy, VendorProfile};

static CALC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bcalc\((?P<inner>.+?)\)\s*;").unwrap());

static PERCENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\d.]+%").unwrap());

static PIXELS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d)px\b").unwrap());

/// Outcome of running one vendor's `calc()` policy over a line.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcRewrite {
    /// No unprefixed `calc(...);` on the line.
    None,
    /// Insert `line` before the original.
    Insert {
        line: String,
        notes: Vec<Diagnostic>,
    },
    /// A fallback was needed but could not be computed; the line stays alone.
    Skipped { notes: Vec<Diagnostic> },
}

/// `calc(...);` occurrences that do not already carry a vendor prefix.
fn unprefixed_calcs(line: &str) -> Vec<Captures<'_>> {
    CALC.captures_iter(line)
        .filter(|caps| !line[..caps.get(0).map_or(0, |m| m.start())].ends_with('-'))
        .collect()
}

/// Applies `profile`'s calc strategy to `line`. Diagnostics carry line 0;
/// callers set the real line number.
pub fn rewrite(line: &str, profile: &VendorProfile) -> CalcRewrite {
    let calcs = unprefixed_calcs(line);
    if calcs.is_empty() {
        return CalcRewrite::None;
    }

    match profile.calc {
        CalcStrategy::Prefix => {
            let mut out = String::with_capacity(line.len() + calcs.len() * profile.prefix().len());
            let mut last = 0;
            for caps in &calcs {
                let start = caps.get(0).map_or(0, |m| m.start());
                out.push_str(&line[last..start]);
                out.push_str(profile.prefix());
                last = start;
            }
            out.push_str(&line[last..]);
            CalcRewrite::Insert {
                line: out,
                notes: Vec::new(),
            }
        }
        CalcStrategy::Fallback => fallback_line(line, &calcs),
    }
}

fn fallback_line(line: &str, calcs: &[Captures<'_>]) -> CalcRewrite {
    let mut out = String::with_capacity(line.len() + FALLBACK_MARKER.len() + 1);
    let mut notes = Vec::new();
    let mut last = 0;

    for caps in calcs {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.name("inner")) else {
            continue;
        };
        let value = match static_value(whole.as_str(), inner.as_str()) {
            Ok((value, note)) => {
                notes.extend(note);
                value
            }
            Err(note) => return CalcRewrite::Skipped { notes: vec![note] },
        };
        out.push_str(&line[last..whole.start()]);
        out.push_str(&value);
        last = whole.end();
    }
    out.push_str(&line[last..]);

    let line = format!("{} {}", out.trim_end(), FALLBACK_MARKER);
    CalcRewrite::Insert { line, notes }
}

/// Replacement text (with its `;`) for one `calc(...);` occurrence.
fn static_value(
    expression: &str,
    inner: &str,
) -> Result<(String, Option<Diagnostic>), Diagnostic> {
    if let Some(percent) = PERCENT.find(inner) {
        let value = percent.as_str().to_string();
        let note = Diagnostic::PercentHeuristic {
            line: 0,
            expression: expression.to_string(),
            value: value.clone(),
        };
        return Ok((format!("{value};"), Some(note)));
    }

    let bare = PIXELS.replace_all(inner, "${1}");
    let exact = evaluate(&bare).map_err(|err| Diagnostic::Unevaluable {
        line: 0,
        expression: expression.to_string(),
        reason: err.to_string(),
    })?;

    let rounded = exact.round_ties_even();
    let note = (rounded != exact).then(|| Diagnostic::Rounded {
        line: 0,
        expression: expression.to_string(),
        exact,
        rounded: rounded as i64,
    });
    Ok((format!("{}px;", rounded as i64), note))
}
