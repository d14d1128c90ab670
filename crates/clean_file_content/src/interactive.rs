// crates/clean_file_content/src/interactive.rs

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const CANCEL_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// Asks for a single file path.
///
/// Returns `None` when the user cancels (`q`, `quit`, `exit`) or gives no
/// path (an empty line or end of input).
pub fn prompt_for_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<PathBuf>> {
    writeln!(output)?;
    writeln!(output, "=== VectorCAST Test File Content Cleaner ===")?;
    writeln!(output, "This tool removes TEST.IMPORT_FAILURES blocks from test files")?;
    writeln!(output)?;
    write!(output, "Enter the path to the file to clean (or 'q' to quit): ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        writeln!(output, "No file path provided.")?;
        return Ok(None);
    }

    let answer = line.trim();
    if CANCEL_WORDS.contains(&answer.to_lowercase().as_str()) {
        writeln!(output, "Operation cancelled.")?;
        return Ok(None);
    }
    if answer.is_empty() {
        writeln!(output, "No file path provided.")?;
        return Ok(None);
    }
    Ok(Some(PathBuf::from(answer)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (Option<PathBuf>, String) {
        let mut output = Vec::new();
        let path = prompt_for_path(&mut input.as_bytes(), &mut output).unwrap();
        (path, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_path_is_trimmed() {
        let (path, output) = run("  tests/unit.tst \n");
        assert_eq!(path, Some(PathBuf::from("tests/unit.tst")));
        assert!(output.contains("Enter the path"));
    }

    #[test]
    fn test_cancel_words() {
        for word in ["q\n", "QUIT\n", "Exit\n"] {
            let (path, output) = run(word);
            assert_eq!(path, None);
            assert!(output.contains("Operation cancelled."));
        }
    }

    #[test]
    fn test_empty_answer() {
        let (path, output) = run("\n");
        assert_eq!(path, None);
        assert!(output.contains("No file path provided."));
    }

    #[test]
    fn test_end_of_input_is_no_path() {
        let (path, output) = run("");
        assert_eq!(path, None);
        assert!(output.contains("No file path provided."));
        assert!(!output.contains("Operation cancelled."));
    }
}
