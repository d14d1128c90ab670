// crates/clean_file_content/src/lib.rs

//! Rewrites files in place with their marked blocks (VectorCAST import
//! failure sections by default) removed.
//!
//! ```no_run
//! use clean_file_content::{rewrite_with, DefaultFileRewriter};
//!
//! let outcome = rewrite_with(&DefaultFileRewriter::default(), "unit_tests.tst")?;
//! println!("removed {} block(s)", outcome.blocks_removed);
//! # Ok::<(), clean_file_content::CleanError>(())
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod rewriter;

pub use batch::{clean_files, collect_targets, BatchReport, FileReport, TargetOptions};
pub use config::AppConfig;
pub use error::{CleanError, CleanErrorKind, Result};
pub use rewriter::{rewrite_with, DefaultFileRewriter, FileRewriter, RewriteOptions, RewriteOutcome};
pub use strip_marker_blocks::{BlockStripper, MarkerPair};
