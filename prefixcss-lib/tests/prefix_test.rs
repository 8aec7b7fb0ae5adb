use prefixcss_lib::style::cleaner::clean;
use prefixcss_lib::style::prefixer::prefix;
use prefixcss_lib::{process, Diagnostic, Pipeline, PrefixError, Stylesheet, VendorProfile};

#[cfg(test)]
pub mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sheet(src: &[&str]) -> Stylesheet {
        Stylesheet::new(src.iter().map(|s| s.to_string()).collect())
    }

    fn lines(sheet: &Stylesheet) -> Vec<&str> {
        sheet.lines().iter().map(String::as_str).collect()
    }

    const SITE_CSS: &str = r#".card {
  box-sizing: border-box;
  width: calc(100% - 20px);
  height: calc(100px - 20px);
  transition: transform 0.3s ease;
}
.card:hover { transform: scale(1.5); }
.label {
  text-transform: uppercase;
  user-select: none;
}
@keyframes spin {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;

    #[test]
    fn test_scenario_keyword() {
        let mut s = sheet(&["  transform: scale(1.5);"]);
        prefix(&mut s, &VendorProfile::webkit(), &mut Vec::new()).unwrap();
        assert_eq!(
            lines(&s),
            vec!["  -webkit-transform: scale(1.5);", "  transform: scale(1.5);"]
        );
    }

    #[test]
    fn test_scenario_calc_arithmetic() {
        let mut s = sheet(&["  width: calc(100px - 20px);"]);
        prefix(&mut s, &VendorProfile::ms(), &mut Vec::new()).unwrap();
        assert_eq!(
            lines(&s),
            vec!["  width: 80px; /* calc fallback */", "  width: calc(100px - 20px);"]
        );

        let mut s = sheet(&["  width: calc(100px - 20px);"]);
        prefix(&mut s, &VendorProfile::moz(), &mut Vec::new()).unwrap();
        assert_eq!(
            lines(&s),
            vec!["  width: -moz-calc(100px - 20px);", "  width: calc(100px - 20px);"]
        );
    }

    #[test]
    fn test_scenario_calc_percent() {
        let mut s = sheet(&["  width: calc(100% - 20px);"]);
        prefix(&mut s, &VendorProfile::ms(), &mut Vec::new()).unwrap();
        assert_eq!(
            lines(&s),
            vec!["  width: 100%; /* calc fallback */", "  width: calc(100% - 20px);"]
        );
    }

    #[test]
    fn test_scenario_cleaning() {
        let mut s = sheet(&["  -ms-transform: scale(1.5);", "  transform: scale(1.5);"]);
        let report = clean(&mut s).unwrap();
        assert!(report.changed());
        assert_eq!(lines(&s), vec!["  transform: scale(1.5);"]);
    }

    #[test]
    fn test_scenario_unevaluable_calc() {
        let mut s = sheet(&["  width: calc(100px + foo);"]);
        let mut notes = Vec::new();
        let added = prefix(&mut s, &VendorProfile::ms(), &mut notes).unwrap();
        assert_eq!(added, 0);
        assert_eq!(lines(&s), vec!["  width: calc(100px + foo);"]);
        match notes.as_slice() {
            [Diagnostic::Unevaluable {
                line, expression, ..
            }] => {
                assert_eq!(*line, 1);
                assert_eq!(expression, "calc(100px + foo);");
            }
            other => panic!("unexpected diagnostics: {other:?}"),
        }
    }

    #[test]
    fn test_full_run_output() {
        let out = process(SITE_CSS, &Pipeline::standard()).unwrap();
        let expected = r#".card {
  -moz-box-sizing: border-box;
  -webkit-box-sizing: border-box;
  box-sizing: border-box;
  width: 100%; /* calc fallback */
  width: -moz-calc(100% - 20px);
  width: -webkit-calc(100% - 20px);
  width: calc(100% - 20px);
  height: 80px; /* calc fallback */
  height: -moz-calc(100px - 20px);
  height: -webkit-calc(100px - 20px);
  height: calc(100px - 20px);
  -moz-transition: -moz-transform 0.3s ease;
  -webkit-transition: -webkit-transform 0.3s ease;
  transition: transform 0.3s ease;
}
.card:hover { -moz-transform: scale(1.5); }
.card:hover { -webkit-transform: scale(1.5); }
.card:hover { transform: scale(1.5); }
.label {
  text-transform: uppercase;
  -ms-user-select: none;
  -moz-user-select: none;
  -webkit-user-select: none;
  user-select: none;
}
@-moz-keyframes spin {
  from { opacity: 0; }
  to { opacity: 1; }
}
@-webkit-keyframes spin {
  from { opacity: 0; }
  to { opacity: 1; }
}
@keyframes spin {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;
        assert_eq!(out.text, expected);
        assert!(!out.clean_changed());
        assert_eq!(out.added, 23);
        assert_eq!(out.diagnostics.len(), 1);
    }

    #[test]
    fn test_rerun_is_stable() {
        let first = process(SITE_CSS, &Pipeline::standard()).unwrap();
        let second = process(&first.text, &Pipeline::standard()).unwrap();
        assert_eq!(second.clean_text, SITE_CSS);
        assert_eq!(second.text, first.text);
        assert!(second.clean_changed());
    }

    #[test]
    fn test_cascade_order_keeps_originals() {
        let out = process(SITE_CSS, &Pipeline::standard()).unwrap();
        let before: Vec<&str> = SITE_CSS.lines().collect();
        let after: Vec<&str> = out.text.lines().collect();

        // Every original line survives in order, byte for byte.
        let mut cursor = 0;
        for line in &before {
            let found = after[cursor..]
                .iter()
                .position(|l| l == line)
                .unwrap_or_else(|| panic!("lost line {line:?}"));
            cursor += found + 1;
        }

        let prefixed = after
            .iter()
            .position(|l| *l == ".card:hover { -webkit-transform: scale(1.5); }");
        let original = after
            .iter()
            .position(|l| *l == ".card:hover { transform: scale(1.5); }");
        assert!(prefixed.unwrap() < original.unwrap());
    }

    #[test]
    fn test_vendor_accumulation_order() {
        let css = "@keyframes spin {\n  from { transform: rotate(0deg); }\n  to { transform: rotate(360deg); }\n}\n";
        let out = process(css, &Pipeline::standard()).unwrap();
        let headers: Vec<&str> = out
            .text
            .lines()
            .filter(|l| l.starts_with('@'))
            .collect();
        assert_eq!(
            headers,
            vec!["@-moz-keyframes spin {", "@-webkit-keyframes spin {", "@keyframes spin {"]
        );
        assert!(out.text.starts_with(
            "@-moz-keyframes spin {\n  from { -moz-transform: rotate(0deg); }\n  to { -moz-transform: rotate(360deg); }\n}\n@-webkit-keyframes spin {\n"
        ));
    }

    #[test]
    fn test_keyword_is_never_prefixed_twice() {
        let out = process(".a {\n  transition: transform 1s;\n}\n", &Pipeline::standard()).unwrap();
        for vendor in ["-ms-", "-moz-", "-webkit-"] {
            let doubled = format!("{vendor}{vendor}");
            assert!(!out.text.contains(&doubled), "{doubled} in {}", out.text);
        }
        assert_eq!(out.added, 2);
    }

    #[test]
    fn test_keyframes_named_after_keyword() {
        let css = "@keyframes transform-in {\n  from { opacity: 0; }\n  to { opacity: 1; }\n}\n";
        let out = process(css, &Pipeline::standard()).unwrap();
        let headers: Vec<&str> = out.text.lines().filter(|l| l.starts_with('@')).collect();
        assert_eq!(
            headers,
            vec![
                "@-moz-keyframes transform-in {",
                "@-webkit-keyframes transform-in {",
                "@keyframes transform-in {",
            ]
        );
        assert_eq!(out.added, 8);
        assert_eq!(process(&out.text, &Pipeline::standard()).unwrap().text, out.text);
    }

    #[test]
    fn test_one_line_keyframes() {
        let css = "@keyframes x { from { transform: none; } }\n";
        let out = process(css, &Pipeline::standard()).unwrap();
        assert_eq!(
            out.text,
            "@-moz-keyframes x { from { -moz-transform: none; } }\n\
             @-webkit-keyframes x { from { -webkit-transform: none; } }\n\
             @keyframes x { from { transform: none; } }\n"
        );
        assert_eq!(process(&out.text, &Pipeline::standard()).unwrap().text, out.text);
    }

    #[test]
    fn test_unterminated_keyframes_aborts() {
        let css = ".a { color: red; }\n@keyframes spin {\n  from { opacity: 0; }\n";
        assert_eq!(
            process(css, &Pipeline::standard()),
            Err(PrefixError::UnterminatedBlock { line: 2 })
        );
    }
}
