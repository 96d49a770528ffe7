//! # Word Counter

use std::io::BufRead;

use compact_str::CompactString;
use wordmerge::{CountType, WMResult, WordCounts};

const LINE_TRIM: [char; 3] = [' ', '\r', '\n'];

/// Word frequency counter over whitespace-tokenized text.
///
/// Tokens are separated by literal spaces; empty tokens are skipped.
/// Only spaces and line breaks are stripped, so tabs stay inside tokens.
#[derive(Debug, Clone)]
pub struct WordCounter<C = u64>
where
    C: CountType,
{
    /// The word counts.
    pub word_counts: WordCounts<C>,
}

impl<C: CountType> Default for WordCounter<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CountType> WordCounter<C> {
    /// Create a new, empty word counter.
    pub fn new() -> Self {
        Self {
            word_counts: WordCounts::with_capacity(10_000),
        }
    }

    /// Release the word counts and return them.
    pub fn release(self) -> WordCounts<C> {
        self.word_counts
    }

    /// The word counts.
    pub fn word_counts(&self) -> &WordCounts<C> {
        &self.word_counts
    }

    /// The number of distinct words.
    pub fn len(&self) -> usize {
        self.word_counts.len()
    }

    /// Is the counter empty?
    pub fn is_empty(&self) -> bool {
        self.word_counts.is_empty()
    }

    /// Update word counts inplace from one line of text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        let word_counts = &mut self.word_counts;
        for word in text
            .as_ref()
            .trim_matches(LINE_TRIM)
            .split(' ')
            .filter(|w| !w.is_empty())
        {
            *word_counts.entry(CompactString::from(word)).or_default() += C::one();
        }
    }

    /// Count each of `tokens` once, exactly as given.
    pub fn update_from_tokens<I>(
        &mut self,
        tokens: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for token in tokens {
            *self
                .word_counts
                .entry(CompactString::from(token.as_ref()))
                .or_default() += C::one();
        }
    }

    /// Update word counts inplace from a sample iterator.
    ///
    /// Each sample is one line of text.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Update word counts inplace from a line reader.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, reader)))]
    pub fn update_from_reader<R: BufRead>(
        &mut self,
        reader: R,
    ) -> WMResult<()> {
        for line in reader.lines() {
            self.update_from_text(line?);
        }
        Ok(())
    }

    /// Add every count of `other` into this counter.
    pub fn merge_counts(
        &mut self,
        other: &WordCounts<C>,
    ) {
        for (word, &count) in other {
            *self.word_counts.entry(word.clone()).or_default() += count;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use wordmerge::vocab::sorted_word_counts;

    use super::*;

    fn check_common_counts<C: CountType>(counts: &WordCounts<C>) {
        assert_eq!(
            sorted_word_counts(counts),
            vec![
                ("world", C::from_usize(3).unwrap()),
                ("Foo", C::from_usize(1).unwrap()),
                ("Hello", C::from_usize(1).unwrap()),
                ("bar", C::from_usize(1).unwrap()),
            ]
        );
    }

    #[test]
    fn test_word_counter() {
        let mut wc: WordCounter<u64> = WordCounter::new();
        assert!(wc.is_empty());

        let samples = vec!["Hello world", "Foo world  bar world \n"];
        wc.update_from_samples(samples.iter());

        assert_eq!(wc.len(), 4);
        check_common_counts(wc.word_counts());
    }

    #[test]
    fn test_update_from_reader() {
        let mut wc: WordCounter<u32> = WordCounter::default();

        let text = "Hello world\n\n   \nFoo world bar world\n";
        wc.update_from_reader(Cursor::new(text)).unwrap();

        check_common_counts(&wc.release());
    }

    #[test]
    fn test_tabs_are_kept() {
        let mut wc: WordCounter<u64> = WordCounter::new();
        wc.update_from_text("\ta b\tc \t \r\n");

        assert_eq!(
            sorted_word_counts(wc.word_counts()),
            vec![("\t", 1), ("\ta", 1), ("b\tc", 1)]
        );
    }

    #[test]
    fn test_update_from_tokens() {
        let mut wc: WordCounter<u64> = WordCounter::new();
        wc.update_from_tokens(["b@@", "\t", "b@@", " "]);

        assert_eq!(wc.word_counts().values().sum::<u64>(), 4);
        assert_eq!(wc.word_counts()["b@@"], 2);
        assert_eq!(wc.word_counts()["\t"], 1);
        assert_eq!(wc.word_counts()[" "], 1);
    }

    #[test]
    fn test_merge_counts() {
        let mut a: WordCounter<u64> = WordCounter::new();
        a.update_from_text("Hello world");

        let mut b: WordCounter<u64> = WordCounter::new();
        b.update_from_text("Foo world bar world");

        a.merge_counts(b.word_counts());
        check_common_counts(a.word_counts());
    }
}
