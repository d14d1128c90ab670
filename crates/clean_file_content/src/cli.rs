// crates/clean_file_content/src/cli.rs

use clap::builder::NonEmptyStringValueParser;
use clap::{Arg, ArgAction, Command};
use import_failure_marker::{BACKUP_SUFFIX, IMPORT_FAILURES_END, IMPORT_FAILURES_START};

/// Command-line definition of the `clean_file_content` binary.
pub fn build_command() -> Command {
    Command::new("clean_file_content")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Cleans VectorCAST test files by removing import failure blocks")
        .after_help("Example: clean_file_content unit_tests.tst --no-backup")
        .arg(
            Arg::new("files")
                .value_name("FILES")
                .num_args(0..)
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .help("File(s) to clean. If not provided, will prompt for input"),
        )
        .arg(
            Arg::new("no_backup")
                .long("no-backup")
                .help("Don't create backup files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("recursive")
                .short('r')
                .long("recursive")
                .help("Clean every file below directory arguments")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ext")
                .long("ext")
                .value_name("EXT")
                .action(ArgAction::Append)
                .help("Only clean files with this extension when walking directories"),
        )
        .arg(
            Arg::new("start_marker")
                .long("start-marker")
                .value_name("TEXT")
                .default_value(IMPORT_FAILURES_START)
                .value_parser(NonEmptyStringValueParser::new())
                .help("Literal text that opens a block"),
        )
        .arg(
            Arg::new("end_marker")
                .long("end-marker")
                .value_name("TEXT")
                .default_value(IMPORT_FAILURES_END)
                .value_parser(NonEmptyStringValueParser::new())
                .help("Literal text that closes a block"),
        )
        .arg(
            Arg::new("backup_suffix")
                .long("backup-suffix")
                .value_name("SUFFIX")
                .default_value(BACKUP_SUFFIX)
                .value_parser(NonEmptyStringValueParser::new())
                .help("Suffix appended to the file name of backups"),
        )
}
