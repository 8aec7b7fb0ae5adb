//! One vendor pass: inserts prefixed duplicates before the lines and blocks
//! that need them.

use crate::calc::{self, CalcRewrite};
use crate::diagnostics::Diagnostic;
use crate::error::PrefixError;
use crate::scan::collect_block;
use crate::sheet::Stylesheet;
use crate::style::lines::{
    generated_lines, is_keyframes_header, is_prefixed_at_rule, prefix_keyframes_header,
    KeywordMatcher,
};
use crate::style::vendor::VendorProfile;

/// Runs `profile` over `sheet` and returns the number of inserted lines.
///
/// Scanning rules, first match wins:
/// 1. a vendor-prefixed at-rule block (from any vendor) is copied untouched;
/// 2. lines generated by an earlier pass (see [`generated_lines`]) are copied
///    untouched, so a duplicate is never mistaken for a block header;
/// 3. an `@keyframes` block gets a prefixed copy in front of it when the
///    vendor prefixes blocks;
/// 4. otherwise the line may get a `calc()` line and a keyword-prefixed line
///    in front of it, in that order. `@keyframes` headers never get a keyword
///    line: the animation name is not a property.
///
/// Originals are never modified. On an unterminated block the buffer is left
/// as it was.
pub fn prefix(
    sheet: &mut Stylesheet,
    profile: &VendorProfile,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<usize, PrefixError> {
    let input = sheet.take_lines();
    let generated = generated_lines(&input);
    let keywords = KeywordMatcher::new(profile.keywords);
    let prefix = profile.prefix();

    let mut out = Vec::with_capacity(input.len());
    let mut added = 0;
    let mut i = 0;

    while i < input.len() {
        let line = &input[i];

        let prefixed_block = is_prefixed_at_rule(line);
        if !prefixed_block && generated[i] {
            out.push(line.clone());
            i += 1;
            continue;
        }

        let keyframes = is_keyframes_header(line);
        if prefixed_block || (profile.prefixes_blocks && keyframes) {
            let block = match collect_block(&input, i) {
                Ok(block) => block,
                Err(err) => {
                    sheet.set_lines(input);
                    return Err(err);
                }
            };
            let original = block.lines(&input);
            if !prefixed_block {
                let copy = duplicate_block(
                    original,
                    &generated[block.start..=block.end],
                    prefix,
                    &keywords,
                );
                log::debug!("Added '{}' ({} lines)", copy[0], copy.len());
                added += copy.len();
                out.extend(copy);
            }
            out.extend_from_slice(original);
            i = block.next();
            continue;
        }

        match calc::rewrite(line, profile) {
            CalcRewrite::Insert { line: calc_line, notes } => {
                diagnostics.extend(notes.into_iter().map(|n| n.at_line(i + 1)));
                log::debug!("Added '{}'", calc_line);
                out.push(calc_line);
                added += 1;
            }
            CalcRewrite::Skipped { notes } => {
                diagnostics.extend(notes.into_iter().map(|n| n.at_line(i + 1)));
            }
            CalcRewrite::None => {}
        }

        if !keyframes && keywords.is_match(line) {
            let prefixed = keywords.prefix_all(line, prefix);
            log::debug!("Added '{}'", prefixed);
            out.push(prefixed);
            added += 1;
        }

        out.push(line.clone());
        i += 1;
    }

    sheet.set_lines(out);
    Ok(added)
}

/// Prefixed copy of an `@keyframes` block. Body lines left behind by earlier
/// passes are not copied.
///
/// On the header line only the text from the first `{` on is keyword-prefixed,
/// which covers one-line blocks and leaves the animation name alone.
fn duplicate_block(
    block: &[String],
    generated: &[bool],
    prefix: &str,
    keywords: &KeywordMatcher,
) -> Vec<String> {
    let header = &block[0];
    let (name, body) = header.split_at(header.find('{').unwrap_or(header.len()));

    let mut copy = Vec::with_capacity(block.len());
    copy.push(prefix_keyframes_header(name, prefix) + &keywords.prefix_all(body, prefix));
    copy.extend(
        block
            .iter()
            .zip(generated)
            .skip(1)
            .filter(|(_, generated)| !**generated)
            .map(|(line, _)| keywords.prefix_all(line, prefix)),
    );
    copy
}
