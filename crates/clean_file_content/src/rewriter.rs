// crates/clean_file_content/src/rewriter.rs

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use import_failure_marker::BACKUP_SUFFIX;
use strip_marker_blocks::{BlockStripper, MarkerPair};
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{CleanError, Result};

/// Knobs for a single rewrite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Write `<file><backup_suffix>` with the original bytes before overwriting.
    pub backup: bool,
    pub backup_suffix: String,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            backup: true,
            backup_suffix: BACKUP_SUFFIX.to_string(),
        }
    }
}

/// What happened to one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub path: PathBuf,
    pub blocks_removed: usize,
    pub backup_path: Option<PathBuf>,
    /// False when the file was left exactly as it was.
    pub changed: bool,
}

impl RewriteOutcome {
    fn unchanged(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            blocks_removed: 0,
            backup_path: None,
            changed: false,
        }
    }
}

/// Trait that abstracts rewriting a file in place.
pub trait FileRewriter {
    fn rewrite(&self, path: &Path) -> Result<RewriteOutcome>;
}

/// Reads a file, strips its marked blocks, optionally backs it up and
/// replaces it atomically.
#[derive(Clone, Debug, Default)]
pub struct DefaultFileRewriter {
    stripper: BlockStripper,
    options: RewriteOptions,
}

impl DefaultFileRewriter {
    pub fn new(markers: MarkerPair, options: RewriteOptions) -> Self {
        Self {
            stripper: BlockStripper::new(markers),
            options,
        }
    }

    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    /// Sibling path the backup of `path` is written to.
    pub fn backup_path_for(&self, path: &Path) -> PathBuf {
        let mut name = OsString::from(path.as_os_str());
        name.push(&self.options.backup_suffix);
        PathBuf::from(name)
    }

    fn write_backup(&self, path: &Path, original: &[u8]) -> Result<PathBuf> {
        let backup_path = self.backup_path_for(path);
        info!(path = %backup_path.display(), "Creating backup");
        fs::write(&backup_path, original)
            .map_err(|err| CleanError::from_io(&backup_path, "write backup", err))?;
        Ok(backup_path)
    }
}

impl FileRewriter for DefaultFileRewriter {
    fn rewrite(&self, path: &Path) -> Result<RewriteOutcome> {
        // Symlinks are followed so the file they point at is the one rewritten.
        let target =
            fs::canonicalize(path).map_err(|err| CleanError::from_io(path, "resolve", err))?;
        let metadata = validate_file(&target)?;

        info!(path = %path.display(), "Reading file");
        let original =
            fs::read(&target).map_err(|err| CleanError::from_io(&target, "read", err))?;
        let content = std::str::from_utf8(&original).map_err(|source| CleanError::Encoding {
            path: path.to_path_buf(),
            source,
        })?;

        let block_count = self.stripper.count_blocks(content);
        if block_count == 0 {
            info!(path = %path.display(), "No marked blocks found in file");
            return Ok(RewriteOutcome::unchanged(path));
        }
        info!(path = %path.display(), "Found {block_count} marked block(s)");

        let stripped = self.stripper.strip_counted(content);

        let backup_path = if self.options.backup {
            Some(self.write_backup(path, &original)?)
        } else {
            None
        };

        info!(path = %path.display(), "Writing cleaned content");
        replace_contents(&target, stripped.text.as_bytes(), &metadata)?;
        info!(
            path = %path.display(),
            "Successfully cleaned {} marked block(s)",
            stripped.blocks_removed
        );

        Ok(RewriteOutcome {
            path: path.to_path_buf(),
            blocks_removed: stripped.blocks_removed,
            backup_path,
            changed: true,
        })
    }
}

/// Public API function to rewrite a file using a provided `FileRewriter` implementation.
pub fn rewrite_with<P: AsRef<Path>>(
    rewriter: &dyn FileRewriter,
    path: P,
) -> Result<RewriteOutcome> {
    rewriter.rewrite(path.as_ref())
}

/// The path must be an existing, writable, regular file.
fn validate_file(path: &Path) -> Result<fs::Metadata> {
    let metadata = fs::metadata(path).map_err(|err| CleanError::from_io(path, "inspect", err))?;
    if !metadata.is_file() {
        return Err(CleanError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    if metadata.permissions().readonly() {
        return Err(CleanError::PermissionDenied {
            path: path.to_path_buf(),
            operation: "write to read-only file",
            source: None,
        });
    }
    Ok(metadata)
}

/// Writes `contents` to a temp file beside `path` and renames it over `path`.
///
/// `path` must already be resolved; renaming over a symlink would replace the
/// link instead of the file. The directory has to be writable. The temp file
/// is removed on drop, so a failure at any step leaves the original untouched.
fn replace_contents(path: &Path, contents: &[u8], metadata: &fs::Metadata) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)
        .map_err(|err| CleanError::from_io(path, "create a temporary file next to", err))?;
    temp.write_all(contents)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|err| CleanError::from_io(path, "write", err))?;
    fs::set_permissions(temp.path(), metadata.permissions())
        .map_err(|err| CleanError::from_io(path, "copy permissions to", err))?;
    temp.persist(path)
        .map_err(|err| CleanError::from_io(path, "replace", err.error))?;
    Ok(())
}
