// crates/clean_file_content/src/batch.rs

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};
use walkdir::WalkDir;

use crate::error::{CleanError, Result};
use crate::rewriter::{FileRewriter, RewriteOutcome};

/// Outcome for a single path of a batch.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: Result<RewriteOutcome>,
}

/// Per-file outcomes of a batch run, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|file| file.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.files.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &CleanError)> {
        self.files
            .iter()
            .filter_map(|file| file.result.as_ref().err().map(|err| (file.path.as_path(), err)))
    }

    pub fn blocks_removed(&self) -> usize {
        self.files
            .iter()
            .filter_map(|file| file.result.as_ref().ok())
            .map(|outcome| outcome.blocks_removed)
            .sum()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    /// Process exit status for this batch: 0 when every file succeeded.
    pub fn exit_code(&self) -> i32 {
        if self.all_succeeded() {
            0
        } else {
            1
        }
    }

    /// Prints the human-readable results summary.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "=== Results Summary ===")?;
        writeln!(out, "Successfully processed: {} files", self.succeeded())?;
        writeln!(out, "Failed to process: {} files", self.failed())?;
        if !self.all_succeeded() {
            writeln!(out)?;
            writeln!(out, "Failed files:")?;
            for (path, err) in self.failures() {
                writeln!(out, "  - {} ({})", path.display(), err.chain_message())?;
            }
        }
        Ok(())
    }
}

/// Runs `rewriter` over every path. A failing file never stops the rest.
pub fn clean_files<I, P>(rewriter: &dyn FileRewriter, paths: I) -> BatchReport
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut report = BatchReport::default();
    for path in paths {
        let path = path.as_ref();
        info!(path = %path.display(), "Processing file");
        let result = rewriter.rewrite(path);
        if let Err(err) = &result {
            error!(path = %path.display(), "{}", err.chain_message());
        }
        report.files.push(FileReport {
            path: path.to_path_buf(),
            result,
        });
    }
    report
}

/// How command-line paths are expanded into files to clean.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetOptions {
    /// Walk directory arguments instead of rejecting them.
    pub recursive: bool,
    /// Extensions (without the dot) to keep while walking; empty keeps all.
    pub extensions: Vec<String>,
    /// Files ending with this suffix are skipped while walking.
    pub skip_suffix: Option<String>,
}

impl TargetOptions {
    fn accepts(&self, path: &Path) -> bool {
        let name = path.file_name().map(|name| name.to_string_lossy());
        if let (Some(suffix), Some(name)) = (&self.skip_suffix, &name) {
            if !suffix.is_empty() && name.ends_with(suffix.as_str()) {
                return false;
            }
        }
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .map(|ext| ext.to_string_lossy())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|wanted| wanted.trim_start_matches('.') == ext)
            })
    }
}

/// Expands directories (when recursive) into the regular files below them.
///
/// Plain paths are passed through untouched, even if they do not exist, so
/// the rewriter can report them. Files under a directory come back sorted.
pub fn collect_targets(paths: &[PathBuf], options: &TargetOptions) -> Vec<PathBuf> {
    let mut targets = Vec::new();
    for path in paths {
        if !(options.recursive && path.is_dir()) {
            targets.push(path.clone());
            continue;
        }
        let before = targets.len();
        for entry in WalkDir::new(path).sort_by_file_name() {
            match entry {
                Ok(entry) if entry.file_type().is_file() && options.accepts(entry.path()) => {
                    targets.push(entry.into_path());
                }
                Ok(_) => {}
                Err(err) => warn!(path = %path.display(), "Skipping unreadable entry: {err}"),
            }
        }
        if targets.len() == before {
            warn!(path = %path.display(), "No matching files found in directory");
        }
    }
    targets
}
