use anyhow::{Context, Result};
use std::path::Path;

/// A line that didn't parse as an integer. `line_no` is 1-based.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SkippedLine {
    pub line_no: usize,
    pub text: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedInput {
    pub values: Vec<i64>,
    pub skipped: Vec<SkippedLine>,
}

/// Reads the whole file. Bytes that aren't valid UTF-8 become U+FFFD, so a bad line just fails
/// to parse later instead of failing the read.
pub fn load(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parses one integer per `\n`-separated line. Anything that isn't an integer (including the
/// empty line after a trailing newline) is left out of `values` and recorded in `skipped`.
pub fn parse(text: &str) -> ParsedInput {
    let mut parsed = ParsedInput::default();
    for (i, line) in text.split('\n').enumerate() {
        match line.parse::<i64>() {
            Ok(v) => parsed.values.push(v),
            Err(e) => {
                tracing::debug!(line_no = i + 1, text = line, error = %e, "skipping line");
                parsed.skipped.push(SkippedLine {
                    line_no: i + 1,
                    text: line.to_string(),
                });
            }
        }
    }
    parsed
}

pub fn read_values(path: &Path) -> Result<ParsedInput> {
    let text = load(path)?;
    Ok(parse(&text))
}
