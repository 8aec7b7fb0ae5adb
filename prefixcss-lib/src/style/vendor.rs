use std::fmt;

/// Rendering engines with a vendor prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    Ms,
    Moz,
    Webkit,
    /// Only ever stripped by the cleaner, never generated.
    Opera,
}

impl Vendor {
    /// Every prefix the cleaner recognizes.
    pub const ALL: [Vendor; 4] = [Vendor::Ms, Vendor::Moz, Vendor::Webkit, Vendor::Opera];

    pub fn prefix(self) -> &'static str {
        match self {
            Vendor::Ms => "-ms-",
            Vendor::Moz => "-moz-",
            Vendor::Webkit => "-webkit-",
            Vendor::Opera => "-o-",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// How a vendor deals with `calc()` expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcStrategy {
    /// Duplicate the line with `calc(` rewritten to `<prefix>calc(`.
    Prefix,
    /// The engine has no general `calc()`; insert a precomputed static value.
    Fallback,
}

/// Keyword set and capabilities of one vendor pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorProfile {
    pub vendor: Vendor,
    /// Property names that get a prefixed duplicate line.
    pub keywords: &'static [&'static str],
    /// Whether `@keyframes` blocks are duplicated for this vendor.
    pub prefixes_blocks: bool,
    pub calc: CalcStrategy,
}

const FULL_KEYWORDS: &[&str] = &[
    "transform",
    "transition",
    "animation",
    "user-select",
    "font-feature-settings",
    "box-sizing",
];

const MS_KEYWORDS: &[&str] = &["user-select", "font-feature-settings"];

impl VendorProfile {
    pub fn ms() -> Self {
        VendorProfile {
            vendor: Vendor::Ms,
            keywords: MS_KEYWORDS,
            prefixes_blocks: false,
            calc: CalcStrategy::Fallback,
        }
    }

    pub fn moz() -> Self {
        VendorProfile {
            vendor: Vendor::Moz,
            keywords: FULL_KEYWORDS,
            prefixes_blocks: true,
            calc: CalcStrategy::Prefix,
        }
    }

    pub fn webkit() -> Self {
        VendorProfile {
            vendor: Vendor::Webkit,
            keywords: FULL_KEYWORDS,
            prefixes_blocks: true,
            calc: CalcStrategy::Prefix,
        }
    }

    pub fn prefix(&self) -> &'static str {
        self.vendor.prefix()
    }
}

/// The ordered list of vendor passes run after cleaning.
///
/// Later passes rely on the output of earlier ones (a `@keyframes` block
/// duplicated by one pass is skipped by the next), so order is part of the
/// result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<VendorProfile>,
}

impl Pipeline {
    pub fn new(stages: Vec<VendorProfile>) -> Self {
        Pipeline { stages }
    }

    /// `-ms-`, `-moz-`, `-webkit-`.
    pub fn standard() -> Self {
        Pipeline::new(vec![
            VendorProfile::ms(),
            VendorProfile::moz(),
            VendorProfile::webkit(),
        ])
    }

    /// The standard pipeline restricted to `vendors`, keeping standard order.
    pub fn only(vendors: &[Vendor]) -> Self {
        let mut pipeline = Pipeline::standard();
        pipeline.stages.retain(|stage| vendors.contains(&stage.vendor));
        pipeline
    }

    pub fn stages(&self) -> &[VendorProfile] {
        &self.stages
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline::standard()
    }
}
