//! Interactive choice of which remote files to document.

use std::io::{BufRead, Write};
use thiserror::Error;

/// Errors that can occur while prompting for a selection.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Failed to read selection: {0}")]
    Io(#[from] std::io::Error),
}

const RULE_WIDTH: usize = 60;

/// Renders files grouped by parent directory.
///
/// Groups appear in first-seen order and files without a directory fall
/// into an unlabelled root group. Each file carries its index in `files`,
/// which is what [`parse_selection`] expects back.
pub fn render_tree<S: AsRef<str>>(files: &[S]) -> Vec<String> {
    let mut groups: Vec<(&str, Vec<(usize, &str)>)> = Vec::new();

    for (index, file) in files.iter().enumerate() {
        let path = file.as_ref();
        let dir = path.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("");

        match groups.iter().position(|(d, _)| *d == dir) {
            Some(at) => groups[at].1.push((index, path)),
            None => groups.push((dir, vec![(index, path)])),
        }
    }

    let mut lines = vec![String::new(), "Repository Files:".to_string()];

    for (dir, members) in groups {
        if !dir.is_empty() {
            lines.push(String::new());
            lines.push(format!("{}/", dir));
        }
        for (index, path) in members {
            let name = path.rsplit('/').next().unwrap_or(path);
            lines.push(format!("  [{}] {} ({})", index, name, path));
        }
    }

    lines
}

/// Maps user input to the chosen paths.
///
/// `all` (any case) picks everything. Otherwise the input is a comma
/// separated list of indices; entries that are not numbers or are out of
/// range are dropped and the remaining order is kept.
pub fn parse_selection<S: AsRef<str>>(input: &str, files: &[S]) -> Vec<String> {
    let input = input.trim();

    if input.eq_ignore_ascii_case("all") {
        return files.iter().map(|f| f.as_ref().to_string()).collect();
    }

    input
        .split(',')
        .filter_map(|part| part.trim().parse::<usize>().ok())
        .filter_map(|index| files.get(index))
        .map(|f| f.as_ref().to_string())
        .collect()
}

/// Shows the tree on `writer`, reads one line from `reader` and returns the
/// selected paths.
pub fn select_files<S, R, W>(files: &[S], mut reader: R, mut writer: W) -> Result<Vec<String>, SelectionError>
where
    S: AsRef<str>,
    R: BufRead,
    W: Write,
{
    let rule = "-".repeat(RULE_WIDTH);

    for line in render_tree(files) {
        writeln!(writer, "{}", line)?;
    }
    writeln!(writer)?;
    writeln!(writer, "{}", rule)?;
    writeln!(writer, "Enter file numbers to document (comma-separated)")?;
    writeln!(writer, "   Example: 0,2,5  OR  'all' for all files")?;
    writeln!(writer, "{}", rule)?;
    writer.flush()?;

    let mut input = String::new();
    reader.read_line(&mut input)?;

    let selected = parse_selection(&input, files);
    writeln!(writer)?;
    writeln!(writer, "Selected {} files for documentation", selected.len())?;

    Ok(selected)
}
