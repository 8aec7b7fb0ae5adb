use std::path::PathBuf;

/// Structural failures that abort processing of one stylesheet.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefixError {
    /// An at-rule block whose braces never balance before the end of the buffer.
    #[error("block opened at line {line} is never closed")]
    UnterminatedBlock { line: usize },
}

/// Failures of the file layer. Each one aborts a single file only.
#[derive(thiserror::Error, Debug)]
pub enum ArtifactError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot stat {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Prefix { path: PathBuf, source: PrefixError },
}
