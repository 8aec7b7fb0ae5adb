//! Files on disk: artifact naming, staleness and (parallel) batch processing.
//!
//! For a source `site.css` the artifacts are `site.css.clean.css` (written
//! only when the source held generated vendor material) and
//! `site.css.prefixed.css` (written only when prefixing added lines).

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::diagnostics::Diagnostic;
use crate::error::ArtifactError;
use crate::prefix_generate::prefix_css;
use crate::style::vendor::Pipeline;

const CLEAN_SUFFIX: &str = ".clean.css";
const PREFIXED_SUFFIX: &str = ".prefixed.css";

/// How files are processed.
#[derive(Debug, Clone)]
pub struct Options {
    /// Reprocess even when the prefixed artifact is newer than the source.
    pub force: bool,
    /// Write the clean artifact when the cleaner removed something.
    pub write_clean: bool,
    pub pipeline: Pipeline,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            force: false,
            write_clean: true,
            pipeline: Pipeline::standard(),
        }
    }
}

/// Output locations derived from one source path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub source: PathBuf,
    pub clean: PathBuf,
    pub prefixed: PathBuf,
}

impl ArtifactPaths {
    pub fn for_source(source: &Path) -> Self {
        let with_suffix = |suffix: &str| {
            let mut name = source.as_os_str().to_owned();
            name.push(suffix);
            PathBuf::from(name)
        };
        ArtifactPaths {
            source: source.to_path_buf(),
            clean: with_suffix(CLEAN_SUFFIX),
            prefixed: with_suffix(PREFIXED_SUFFIX),
        }
    }
}

/// Whether `path` names a file this crate generates.
pub fn is_artifact(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(CLEAN_SUFFIX) || n.ends_with(PREFIXED_SUFFIX))
}

/// Expands directories into their `*.css` files (not recursive, sorted,
/// artifacts left out). Other paths are passed through as given.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>, ArtifactError> {
    let mut inputs = Vec::new();
    for path in paths {
        if !path.is_dir() {
            inputs.push(path.clone());
            continue;
        }
        let entries = fs::read_dir(path).map_err(|source| ArtifactError::Read {
            path: path.clone(),
            source,
        })?;
        let mut found = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ArtifactError::Read {
                path: path.clone(),
                source,
            })?;
            let file = entry.path();
            let is_css = file.extension().is_some_and(|ext| ext == "css");
            if is_css && file.is_file() && !is_artifact(&file) {
                found.push(file);
            }
        }
        found.sort();
        inputs.extend(found);
    }
    Ok(inputs)
}

/// True when the prefixed artifact is missing or older than its source.
pub fn needs_processing(paths: &ArtifactPaths) -> Result<bool, ArtifactError> {
    let modified = |path: &Path| {
        fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|source| ArtifactError::Metadata {
                path: path.to_path_buf(),
                source,
            })
    };

    if !paths.prefixed.exists() {
        return Ok(true);
    }
    Ok(modified(&paths.source)? > modified(&paths.prefixed)?)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// The prefixed artifact is newer than the source; nothing was read.
    UpToDate,
    /// Processed, but neither artifact needed writing.
    Unchanged,
    Written {
        clean: Option<PathBuf>,
        prefixed: Option<PathBuf>,
    },
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub source: PathBuf,
    pub status: FileStatus,
    pub diagnostics: Vec<Diagnostic>,
}

/// Cleans and prefixes one file and writes whichever artifacts changed.
pub fn process_file(source: &Path, options: &Options) -> Result<FileReport, ArtifactError> {
    let paths = ArtifactPaths::for_source(source);

    if !options.force && !needs_processing(&paths)? {
        log::info!("{} is up to date", source.display());
        return Ok(FileReport {
            source: source.to_path_buf(),
            status: FileStatus::UpToDate,
            diagnostics: Vec::new(),
        });
    }

    let text = fs::read_to_string(source).map_err(|err| ArtifactError::Read {
        path: source.to_path_buf(),
        source: err,
    })?;
    let processed =
        prefix_css::process(&text, &options.pipeline).map_err(|err| ArtifactError::Prefix {
            path: source.to_path_buf(),
            source: err,
        })?;

    for diagnostic in &processed.diagnostics {
        log::log!(diagnostic.level(), "{}: {}", source.display(), diagnostic);
    }

    let mut clean = None;
    if options.write_clean && processed.clean_changed() {
        write(&paths.clean, &processed.clean_text)?;
        log::info!(
            "Removed {} prefixed lines; wrote {}",
            processed.removed,
            paths.clean.display()
        );
        clean = Some(paths.clean);
    }

    let mut prefixed = None;
    if processed.prefix_changed() {
        write(&paths.prefixed, &processed.text)?;
        log::info!(
            "Created {} from {} ({} lines added)",
            paths.prefixed.display(),
            source.display(),
            processed.added
        );
        prefixed = Some(paths.prefixed);
    } else {
        log::info!("No changes made in {}", source.display());
    }

    let status = if clean.is_none() && prefixed.is_none() {
        FileStatus::Unchanged
    } else {
        FileStatus::Written { clean, prefixed }
    };

    Ok(FileReport {
        source: source.to_path_buf(),
        status,
        diagnostics: processed.diagnostics,
    })
}

/// Processes every file in parallel. Results come back in input order and a
/// failing file does not stop the others.
pub fn process_files(
    sources: &[PathBuf],
    options: &Options,
) -> Vec<(PathBuf, Result<FileReport, ArtifactError>)> {
    sources
        .par_iter()
        .map(|source| (source.clone(), process_file(source, options)))
        .collect()
}

fn write(path: &Path, text: &str) -> Result<(), ArtifactError> {
    fs::write(path, text).map_err(|source| ArtifactError::Write {
        path: path.to_path_buf(),
        source,
    })
}
