// crates/clean_file_content/src/config.rs

use std::path::PathBuf;

use clap::ArgMatches;
use import_failure_marker::{BACKUP_SUFFIX, IMPORT_FAILURES_END, IMPORT_FAILURES_START};
use strip_marker_blocks::MarkerPair;

use crate::batch::TargetOptions;
use crate::rewriter::{DefaultFileRewriter, RewriteOptions};

/// Runtime configuration resolved once from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub files: Vec<PathBuf>,
    pub backup: bool,
    pub backup_suffix: String,
    pub verbose: bool,
    pub recursive: bool,
    pub extensions: Vec<String>,
    pub markers: MarkerPair,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            backup: true,
            backup_suffix: BACKUP_SUFFIX.to_string(),
            verbose: false,
            recursive: false,
            extensions: Vec::new(),
            markers: MarkerPair::default(),
        }
    }
}

impl AppConfig {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let string_or = |id: &str, fallback: &str| {
            matches
                .get_one::<String>(id)
                .cloned()
                .unwrap_or_else(|| fallback.to_string())
        };

        Self {
            files: matches
                .get_many::<PathBuf>("files")
                .unwrap_or_default()
                .cloned()
                .collect(),
            backup: !matches.get_flag("no_backup"),
            backup_suffix: string_or("backup_suffix", BACKUP_SUFFIX),
            verbose: matches.get_flag("verbose"),
            recursive: matches.get_flag("recursive"),
            extensions: matches
                .get_many::<String>("ext")
                .unwrap_or_default()
                .cloned()
                .collect(),
            markers: MarkerPair::new(
                string_or("start_marker", IMPORT_FAILURES_START),
                string_or("end_marker", IMPORT_FAILURES_END),
            ),
        }
    }

    pub fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions {
            backup: self.backup,
            backup_suffix: self.backup_suffix.clone(),
        }
    }

    pub fn rewriter(&self) -> DefaultFileRewriter {
        DefaultFileRewriter::new(self.markers.clone(), self.rewrite_options())
    }

    pub fn target_options(&self) -> TargetOptions {
        TargetOptions {
            recursive: self.recursive,
            extensions: self.extensions.clone(),
            skip_suffix: Some(self.backup_suffix.clone()),
        }
    }
}
