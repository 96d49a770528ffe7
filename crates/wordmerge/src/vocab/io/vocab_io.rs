//! # Vocabulary File IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{WMResult, WordmergeError},
    types::CountType,
    vocab::{TargetVocabulary, WordCounts, sorted_word_counts},
};

/// Visit each ``{TOKEN} {FREQUENCY}`` line of a vocabulary reader.
fn for_each_vocab_line<R, C, F>(
    reader: R,
    mut visit: F,
) -> WMResult<()>
where
    R: BufRead,
    C: CountType,
    F: FnMut(&str, C),
{
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let [token, freq] = parts.as_slice() else {
            return Err(WordmergeError::Parse(format!(
                "vocabulary line {}: expected 2 fields, found {}: {line:?}",
                idx + 1,
                parts.len()
            )));
        };

        let freq: u64 = freq.parse().map_err(|e: core::num::ParseIntError| {
            WordmergeError::Parse(format!("vocabulary line {}: {e}", idx + 1))
        })?;
        let freq = C::from_u64(freq).ok_or_else(|| {
            WordmergeError::Parse(format!(
                "vocabulary line {}: frequency {freq} out of range",
                idx + 1
            ))
        })?;

        visit(token, freq);
    }
    Ok(())
}

/// Load a [`TargetVocabulary`] from a vocabulary file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
/// * `threshold` - if set, entries with frequency below it are dropped.
pub fn load_target_vocab_path<P: AsRef<Path>>(
    path: P,
    threshold: Option<u64>,
) -> WMResult<TargetVocabulary> {
    let reader = BufReader::new(File::open(path)?);
    read_target_vocab(reader, threshold)
}

/// Read a [`TargetVocabulary`] from a vocabulary line reader.
///
/// # Arguments
/// * `reader` - the line reader.
/// * `threshold` - if set, entries with frequency below it are dropped.
pub fn read_target_vocab<R: BufRead>(
    reader: R,
    threshold: Option<u64>,
) -> WMResult<TargetVocabulary> {
    let mut vocab = TargetVocabulary::new();
    for_each_vocab_line(reader, |token, freq: u64| {
        if threshold.is_none_or(|t| freq >= t) {
            vocab.insert(token);
        }
    })?;
    Ok(vocab)
}

/// Load a [`WordCounts`] table from a vocabulary file.
///
/// Repeated tokens have their frequencies summed.
pub fn load_word_counts_path<C, P>(path: P) -> WMResult<WordCounts<C>>
where
    C: CountType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_word_counts(reader)
}

/// Read a [`WordCounts`] table from a vocabulary line reader.
///
/// Repeated tokens have their frequencies summed.
pub fn read_word_counts<C, R>(reader: R) -> WMResult<WordCounts<C>>
where
    C: CountType,
    R: BufRead,
{
    let mut counts = WordCounts::<C>::default();
    for_each_vocab_line(reader, |token, freq: C| {
        *counts.entry(token.into()).or_default() += freq;
    })?;
    Ok(counts)
}

/// Save a [`WordCounts`] table to a vocabulary file.
///
/// # Arguments
/// * `counts` - the table to save.
/// * `path` - the path to save the table to.
pub fn save_word_counts_path<C, P>(
    counts: &WordCounts<C>,
    path: P,
) -> WMResult<()>
where
    C: CountType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_word_counts(counts, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`WordCounts`] table to a [`Write`] writer.
///
/// Lines are sorted by descending frequency, then ascending token.
pub fn write_word_counts<C, W>(
    counts: &WordCounts<C>,
    writer: &mut W,
) -> WMResult<()>
where
    C: CountType,
    W: Write,
{
    for (token, freq) in sorted_word_counts(counts) {
        writeln!(writer, "{token} {freq}")?;
    }
    Ok(())
}
