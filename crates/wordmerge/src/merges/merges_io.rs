//! # Merge-Rules File IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{WMResult, WordmergeError},
    merges::MergeTable,
    symbols::MergeFormatVersion,
    types::SymbolPair,
};

/// Parse a ``# version <tag>`` header line.
///
/// Also accepts the ``#version: <tag>`` spelling.
///
/// ## Returns
/// * `None` if the line is not a version header.
/// * `Some(Err(..))` if the header names an unsupported version.
fn parse_version_header(line: &str) -> Option<WMResult<MergeFormatVersion>> {
    let rest = line.trim().strip_prefix('#')?.trim_start();
    let rest = rest.strip_prefix("version")?;
    let tag = rest.trim_start_matches(':').split_whitespace().last()?;
    Some(MergeFormatVersion::parse(tag))
}

/// Load a [`MergeTable`] from a merge-rules file.
///
/// ## Arguments
/// * `path` - the path to the merge-rules file.
/// * `merge_limit` - if set, only the first `merge_limit` rules are loaded.
pub fn load_merge_table_path<P: AsRef<Path>>(
    path: P,
    merge_limit: Option<usize>,
) -> WMResult<MergeTable> {
    let reader = BufReader::new(File::open(path)?);
    read_merge_table(reader, merge_limit)
}

/// Read a [`MergeTable`] from a merge-rules line reader.
///
/// Lines are:
/// ```terminaloutput
/// # version 0.2
/// {LEFT} {RIGHT}
/// ```
///
/// A missing header selects the default [`MergeFormatVersion`];
/// an unsupported header version is an error.
///
/// ## Arguments
/// * `reader` - the line reader.
/// * `merge_limit` - if set, only the first `merge_limit` rules are loaded.
pub fn read_merge_table<R: BufRead>(
    reader: R,
    merge_limit: Option<usize>,
) -> WMResult<MergeTable> {
    let mut version = MergeFormatVersion::default();
    let mut entries: Vec<(SymbolPair, usize)> = Vec::new();

    let mut rank = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;

        if idx == 0
            && let Some(header) = parse_version_header(&line)
        {
            version = header?;
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }

        if merge_limit.is_some_and(|limit| rank >= limit) {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let [left, right] = parts.as_slice() else {
            return Err(WordmergeError::Parse(format!(
                "merge rule line {}: expected 2 fields, found {}: {line:?}",
                idx + 1,
                parts.len()
            )));
        };

        entries.push((((*left).into(), (*right).into()), rank));
        rank += 1;
    }

    log::debug!("read {} merge rules (version {version})", entries.len());

    Ok(MergeTable::from_ranked_pairs(version, entries))
}

/// Save a [`MergeTable`] to a merge-rules file.
///
/// # Arguments
/// * `table` - the table to save.
/// * `path` - the path to save the table to.
pub fn save_merge_table_path<P: AsRef<Path>>(
    table: &MergeTable,
    path: P,
) -> WMResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_merge_table(table, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`MergeTable`] to a [`Write`] writer.
///
/// Lines are:
/// ```terminaloutput
/// # version {VERSION}
/// {LEFT} {RIGHT}
/// ```
///
/// # Arguments
/// * `table` - the table to save.
/// * `writer` - the writer to target.
pub fn write_merge_table<W: Write>(
    table: &MergeTable,
    writer: &mut W,
) -> WMResult<()> {
    writeln!(writer, "# version {}", table.version())?;
    for (left, right) in table.pairs() {
        writeln!(writer, "{left} {right}")?;
    }
    Ok(())
}
