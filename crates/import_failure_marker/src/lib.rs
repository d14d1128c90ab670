// crates/import_failure_marker/src/lib.rs

//! Marker strings that delimit VectorCAST import-failure sections
//! in generated test scripts.

/// Opens an import-failure section. Matched case-sensitively, anywhere in the text.
pub const IMPORT_FAILURES_START: &str = "TEST.IMPORT_FAILURES:";

/// Closes an import-failure section.
pub const IMPORT_FAILURES_END: &str = "TEST.END_IMPORT_FAILURES:";

/// Suffix appended to a file name when a backup copy is written.
pub const BACKUP_SUFFIX: &str = ".bak";
