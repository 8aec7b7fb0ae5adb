//! Removal of previously generated vendor material.

use crate::error::PrefixError;
use crate::scan::collect_block;
use crate::sheet::Stylesheet;
use crate::style::lines::{generated_lines, is_prefixed_at_rule};

/// What a cleaning pass removed, in removal order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub removed: Vec<String>,
}

impl CleanReport {
    pub fn changed(&self) -> bool {
        !self.removed.is_empty()
    }

    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// Strips vendor-prefixed at-rule blocks and generated single lines.
///
/// Applied to the output of a prefixing run this gives back the stylesheet
/// that was prefixed. On an unterminated prefixed block the buffer is left as
/// it was.
pub fn clean(sheet: &mut Stylesheet) -> Result<CleanReport, PrefixError> {
    let mut report = CleanReport::default();
    let input = sheet.take_lines();

    // Blocks go first: brace counting must see the block exactly as generated.
    let mut kept = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        if is_prefixed_at_rule(&input[i]) {
            let block = match collect_block(&input, i) {
                Ok(block) => block,
                Err(err) => {
                    sheet.set_lines(input);
                    return Err(err);
                }
            };
            log::debug!("Removed '{}' ({} lines)", input[i], block.len());
            report.removed.extend_from_slice(block.lines(&input));
            i = block.next();
        } else {
            kept.push(input[i].clone());
            i += 1;
        }
    }

    let mask = generated_lines(&kept);
    let mut out = Vec::with_capacity(kept.len());
    for (line, generated) in kept.into_iter().zip(mask) {
        if generated {
            log::debug!("Removed '{}'", line);
            report.removed.push(line);
        } else {
            out.push(line);
        }
    }

    sheet.set_lines(out);
    Ok(report)
}
