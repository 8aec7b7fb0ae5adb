//! Line-oriented vendor prefixing for stylesheets.
//!
//! The engine never parses CSS. It works on a [`Stylesheet`] of raw lines:
//! previously generated vendor material is stripped by the cleaner, then each
//! vendor of a [`Pipeline`] inserts prefixed duplicates in front of the lines
//! and `@keyframes` blocks that need them. Cleaning a prefixed stylesheet
//! gives back exactly what was prefixed, so runs can be repeated safely.

pub mod artifacts;
pub mod calc;
pub mod diagnostics;
pub mod error;
pub mod prefix_generate;
pub mod scan;
pub mod sheet;
pub mod style;

pub use diagnostics::Diagnostic;
pub use error::{ArtifactError, PrefixError};
pub use prefix_generate::prefix_css::{process, Processed};
pub use sheet::{LineEnding, Stylesheet};
pub use style::vendor::{CalcStrategy, Pipeline, Vendor, VendorProfile};
