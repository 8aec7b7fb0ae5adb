use std::fmt;

/// Line terminator used when a stylesheet is written back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Picks `CrLf` only when the first line break of `text` is one.
    fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(pos) if pos > 0 && text.as_bytes()[pos - 1] == b'\r' => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }
}

/// An ordered buffer of stylesheet lines.
///
/// Order is cascade order, so every pass keeps it intact apart from the lines
/// it deliberately inserts or removes. Passes replace the whole line vector
/// (see [`Stylesheet::take_lines`] and [`Stylesheet::set_lines`]) instead of
/// splicing in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stylesheet {
    lines: Vec<String>,
    line_ending: LineEnding,
}

impl Stylesheet {
    pub fn new(lines: Vec<String>) -> Self {
        Stylesheet {
            lines,
            line_ending: LineEnding::Lf,
        }
    }

    /// Splits `text` into lines. A leading byte order mark is dropped and the
    /// first line break decides the line ending used by [`Stylesheet::to_text`].
    pub fn from_text(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Stylesheet {
            lines: text.lines().map(str::to_owned).collect(),
            line_ending: LineEnding::detect(text),
        }
    }

    /// Joins the lines back together, terminating every line.
    pub fn to_text(&self) -> String {
        let eol = self.line_ending.as_str();
        let capacity = self.lines.iter().map(|l| l.len() + eol.len()).sum();
        let mut out = String::with_capacity(capacity);
        for line in &self.lines {
            out.push_str(line);
            out.push_str(eol);
        }
        out
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Moves the lines out, leaving the buffer empty until [`Stylesheet::set_lines`].
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_splits_lines() {
        let sheet = Stylesheet::from_text(".a {\n  color: red;\n}\n");
        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet.get(1), Some("  color: red;"));
        assert_eq!(sheet.line_ending(), LineEnding::Lf);
    }

    #[test]
    fn test_crlf_round_trips() {
        let text = ".a {\r\n  color: red;\r\n}\r\n";
        let sheet = Stylesheet::from_text(text);
        assert_eq!(sheet.line_ending(), LineEnding::CrLf);
        assert_eq!(sheet.get(0), Some(".a {"));
        assert_eq!(sheet.to_text(), text);
    }

    #[test]
    fn test_bom_is_dropped() {
        let sheet = Stylesheet::from_text("\u{feff}.a {}\n");
        assert_eq!(sheet.get(0), Some(".a {}"));
    }

    #[test]
    fn test_missing_final_newline_is_added() {
        let sheet = Stylesheet::from_text("a\nb");
        assert_eq!(sheet.to_text(), "a\nb\n");
    }

    #[test]
    fn test_empty_text() {
        let sheet = Stylesheet::from_text("");
        assert!(sheet.is_empty());
        assert_eq!(sheet.to_text(), "");
    }
}
