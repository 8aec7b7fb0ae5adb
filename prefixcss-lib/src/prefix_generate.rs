use crate::diagnostics::Diagnostic;
use crate::error::PrefixError;
use crate::sheet::Stylesheet;
use crate::style::vendor::Pipeline;
use crate::style::{cleaner, prefixer};

pub mod prefix_css {
    use super::*;

    /// Result of cleaning and prefixing one stylesheet.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Processed {
        /// The source with every generated vendor line and block removed.
        pub clean_text: String,
        /// `clean_text` after all vendor passes.
        pub text: String,
        /// Lines removed by the cleaner.
        pub removed: usize,
        /// Lines inserted by the vendor passes.
        pub added: usize,
        pub diagnostics: Vec<Diagnostic>,
    }

    impl Processed {
        pub fn clean_changed(&self) -> bool {
            self.removed > 0
        }

        pub fn prefix_changed(&self) -> bool {
            self.added > 0
        }
    }

    /// Cleans `source`, then runs every stage of `pipeline` in order.
    pub fn process(source: &str, pipeline: &Pipeline) -> Result<Processed, PrefixError> {
        let mut sheet = Stylesheet::from_text(source);

        let report = cleaner::clean(&mut sheet)?;
        let clean_text = sheet.to_text();

        let mut diagnostics = Vec::new();
        let mut added = 0;
        for stage in pipeline.stages() {
            let n = prefixer::prefix(&mut sheet, stage, &mut diagnostics)?;
            log::debug!("{} added {} lines", stage.vendor, n);
            added += n;
        }

        Ok(Processed {
            clean_text,
            text: sheet.to_text(),
            removed: report.removed_count(),
            added,
            diagnostics,
        })
    }
}
