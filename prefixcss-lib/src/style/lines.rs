//! Line classification and keyword rewriting.

use regex::{Match, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Trailing marker of a line inserted as a static `calc()` fallback.
pub const FALLBACK_MARKER: &str = "/* calc fallback */";

static PREFIXED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-(?:ms|moz|webkit|o)-").unwrap());

static PREFIXED_AT_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*@-(?:ms|moz|webkit|o)-").unwrap());

static PREFIXED_CALC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-(?:ms|moz|webkit|o)-calc\(").unwrap());

static VENDOR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-(?:ms|moz|webkit|o)-").unwrap());

static KEYFRAMES_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*@keyframes\b").unwrap());

/// A declaration that starts with a vendor prefix, e.g. `  -moz-transform: none;`.
pub fn is_prefixed_line(line: &str) -> bool {
    PREFIXED_LINE.is_match(line)
}

/// An at-rule header with a vendor prefix, e.g. `@-webkit-keyframes spin {`.
pub fn is_prefixed_at_rule(line: &str) -> bool {
    PREFIXED_AT_RULE.is_match(line)
}

pub fn has_prefixed_calc(line: &str) -> bool {
    PREFIXED_CALC.is_match(line)
}

pub fn has_fallback_marker(line: &str) -> bool {
    line.contains(FALLBACK_MARKER)
}

/// A line recognizable as generated without looking at its neighbours.
pub fn is_generated_line(line: &str) -> bool {
    is_prefixed_line(line) || has_prefixed_calc(line) || has_fallback_marker(line)
}

/// `line` with every vendor prefix removed; borrowed when there was none.
pub fn strip_vendor_prefixes(line: &str) -> Cow<'_, str> {
    VENDOR_PREFIX.replace_all(line, "")
}

/// Marks the lines a prefixing run could have produced.
///
/// Besides [`is_generated_line`], a line is generated when it carries a vendor
/// prefix and equals the next unmarked line once prefixes are stripped from
/// both: that is the shape of a keyword duplicate such as
/// `.a { -moz-transform: none; }` in front of `.a { transform: none; }`.
///
/// This also catches hand-written lines of the same shape, such as
/// `.a { -webkit-appearance: none; }` right above `.a { appearance: none; }`,
/// even though the prefix is not leading and the property is not a keyword.
/// Cleaning removes those as well.
pub fn generated_lines(lines: &[String]) -> Vec<bool> {
    let mut mask = vec![false; lines.len()];
    let mut anchor: Option<Cow<'_, str>> = None;

    for (index, line) in lines.iter().enumerate().rev() {
        if is_generated_line(line) {
            mask[index] = true;
            continue;
        }
        let stripped = strip_vendor_prefixes(line);
        let duplicate = matches!(stripped, Cow::Owned(_)) && anchor.as_deref() == Some(&*stripped);
        if duplicate {
            mask[index] = true;
        } else {
            anchor = Some(stripped);
        }
    }
    mask
}

/// An unprefixed `@keyframes` header.
pub fn is_keyframes_header(line: &str) -> bool {
    KEYFRAMES_HEADER.is_match(line)
}

/// Rewrites the first `@keyframes` of a header to `@<prefix>keyframes`.
pub fn prefix_keyframes_header(line: &str, prefix: &str) -> String {
    line.replacen("@keyframes", &format!("@{prefix}keyframes"), 1)
}

/// Finds whole-word property keywords that are not already prefixed.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    regex: Regex,
}

impl KeywordMatcher {
    pub fn new(keywords: &[&str]) -> Self {
        let alternatives: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
        let pattern = format!(r"\b(?:{})\b", alternatives.join("|"));
        KeywordMatcher {
            // Escaped literals joined by `|` always form a valid pattern.
            regex: Regex::new(&pattern).unwrap(),
        }
    }

    /// Matches not directly preceded by `-`, so `-webkit-transform` or
    /// `text-transform` never count as `transform`.
    fn unprefixed<'a>(&'a self, line: &'a str) -> impl Iterator<Item = Match<'a>> + 'a {
        self.regex
            .find_iter(line)
            .filter(move |m| !line[..m.start()].ends_with('-'))
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.unprefixed(line).next().is_some()
    }

    /// Prefixes every unprefixed keyword occurrence in `line`.
    pub fn prefix_all(&self, line: &str, prefix: &str) -> String {
        let mut out = String::with_capacity(line.len() + prefix.len());
        let mut last = 0;
        for m in self.unprefixed(line) {
            out.push_str(&line[last..m.start()]);
            out.push_str(prefix);
            out.push_str(m.as_str());
            last = m.end();
        }
        out.push_str(&line[last..]);
        out
    }
}
