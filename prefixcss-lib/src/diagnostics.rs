use std::fmt;

/// Advisory notes produced while prefixing. They never change control flow.
///
/// `line` is the 1-based line number in the buffer as the reporting pass saw it.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A `calc()` expression could not be reduced; no fallback was emitted.
    Unevaluable {
        line: usize,
        expression: String,
        reason: String,
    },
    /// The arithmetic fallback was not an integer and got rounded.
    Rounded {
        line: usize,
        expression: String,
        exact: f64,
        rounded: i64,
    },
    /// The fallback is the first percentage found in the expression rather than
    /// an evaluated result.
    PercentHeuristic {
        line: usize,
        expression: String,
        value: String,
    },
}

impl Diagnostic {
    pub fn line(&self) -> usize {
        match self {
            Diagnostic::Unevaluable { line, .. }
            | Diagnostic::Rounded { line, .. }
            | Diagnostic::PercentHeuristic { line, .. } => *line,
        }
    }

    /// Level the file layer logs this diagnostic at.
    pub fn level(&self) -> log::Level {
        match self {
            Diagnostic::Unevaluable { .. } | Diagnostic::Rounded { .. } => log::Level::Warn,
            Diagnostic::PercentHeuristic { .. } => log::Level::Info,
        }
    }

    pub(crate) fn at_line(mut self, number: usize) -> Self {
        match &mut self {
            Diagnostic::Unevaluable { line, .. }
            | Diagnostic::Rounded { line, .. }
            | Diagnostic::PercentHeuristic { line, .. } => *line = number,
        }
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Unevaluable {
                line,
                expression,
                reason,
            } => write!(f, "line {line}: could not compute '{expression}' ({reason})"),
            Diagnostic::Rounded {
                line,
                expression,
                exact,
                rounded,
            } => write!(
                f,
                "line {line}: '{expression}' resulted in odd value {exact}; rounding to {rounded}"
            ),
            Diagnostic::PercentHeuristic {
                line,
                expression,
                value,
            } => write!(
                f,
                "line {line}: '{expression}' mixes percentages; falling back to {value}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rounded() {
        let d = Diagnostic::Rounded {
            line: 4,
            expression: "calc(5px / 2);".to_string(),
            exact: 2.5,
            rounded: 2,
        };
        assert_eq!(
            d.to_string(),
            "line 4: 'calc(5px / 2);' resulted in odd value 2.5; rounding to 2"
        );
        assert_eq!(d.level(), log::Level::Warn);
    }

    #[test]
    fn test_at_line_overrides_line() {
        let d = Diagnostic::PercentHeuristic {
            line: 0,
            expression: "calc(50% + 1px);".to_string(),
            value: "50%".to_string(),
        }
        .at_line(12);
        assert_eq!(d.line(), 12);
        assert_eq!(d.level(), log::Level::Info);
    }
}
