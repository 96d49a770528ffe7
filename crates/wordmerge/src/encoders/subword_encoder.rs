//! # Greedy Merge Subword Encoder

use std::sync::Arc;

use crate::{
    encoders::{LineSegmenter, SegmentCache, Subwords, SubwordEncoderOptions},
    merges::MergeTable,
    symbols::{END_OF_WORD, SymbolSpanBuf},
    types::{Symbol, SymbolPair},
    vocab::TargetVocabulary,
};

/// A ``(left, right) -> rank`` greedy merge [`LineSegmenter`].
///
/// Words are decomposed into symbols, and the lowest-ranked merge
/// present in the word is applied everywhere it occurs, until no
/// merge applies. With a [`TargetVocabulary`], merges that produce
/// out-of-vocabulary subwords are reverted through the table's
/// reverse index.
///
/// Resolved words are cached per encoder.
#[derive(Debug)]
pub struct SubwordEncoder {
    table: Arc<MergeTable>,
    options: SubwordEncoderOptions,
    cache: SegmentCache,
}

impl SubwordEncoder {
    /// Construct an encoder.
    ///
    /// ## Arguments
    /// * `table` - the merge table to apply.
    /// * `options` - separator, glossaries, and target vocabulary.
    pub fn new<M>(
        table: M,
        options: SubwordEncoderOptions,
    ) -> Self
    where
        M: Into<Arc<MergeTable>>,
    {
        Self {
            table: table.into(),
            options,
            cache: SegmentCache::default(),
        }
    }

    /// The merge table.
    pub fn table(&self) -> &Arc<MergeTable> {
        &self.table
    }

    /// The encoder options.
    pub fn options(&self) -> &SubwordEncoderOptions {
        &self.options
    }

    /// The continuation separator.
    pub fn separator(&self) -> &str {
        self.options.separator()
    }

    /// The word cache.
    pub fn cache(&self) -> &SegmentCache {
        &self.cache
    }

    /// Encode a single word into subwords, without separators.
    ///
    /// Glossary literals are returned unsplit.
    ///
    /// ## Arguments
    /// * `word` - the raw word; contains no spaces.
    ///
    /// ## Returns
    /// The subwords; their concatenation is `word`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn encode_word(
        &self,
        word: &str,
    ) -> Subwords {
        self.cache.get_or_insert_with(word, || {
            if self.options.glossaries.contains(word) {
                return vec![Symbol::from(word)].into();
            }

            let symbols = self.apply_merges(word);

            match &self.options.target_vocab {
                Some(vocab) => self.check_vocab_and_split(symbols, vocab).into(),
                None => symbols.into(),
            }
        })
    }

    /// Find the lowest-ranked pair of `span` which has a merge rule.
    fn lowest_ranked_pair(
        &self,
        span: &SymbolSpanBuf,
    ) -> Option<SymbolPair> {
        span.pairs()
            .filter_map(|(a, b)| {
                let pair = (a.clone(), b.clone());
                self.table.rank(&pair).map(|rank| (rank, pair))
            })
            .min_by_key(|(rank, _)| *rank)
            .map(|(_, pair)| pair)
    }

    /// Apply merges greedily and strip the end-of-word marker.
    fn apply_merges(
        &self,
        word: &str,
    ) -> Vec<Symbol> {
        let mut span = self.table.version().decompose(word);

        while span.len() > 1 {
            let Some((left, right)) = self.lowest_ranked_pair(&span) else {
                break;
            };
            span.merge_pair_cb((left.as_str(), right.as_str()), &mut |_, _| {});
        }

        let mut symbols = span.into_symbols();
        if let Some(last) = symbols.last_mut()
            && last.ends_with(END_OF_WORD)
        {
            let len = last.len() - END_OF_WORD.len();
            last.truncate(len);
        }
        if symbols.last().is_some_and(|s| s.is_empty()) {
            symbols.pop();
        }
        symbols
    }

    /// Replace every out-of-vocabulary subword by in-vocabulary
    /// (or atomic) pieces.
    fn check_vocab_and_split(
        &self,
        symbols: Vec<Symbol>,
        vocab: &TargetVocabulary,
    ) -> Vec<Symbol> {
        let separator = self.separator();
        let last = symbols.len().saturating_sub(1);

        let mut out = Vec::with_capacity(symbols.len());
        for (idx, segment) in symbols.into_iter().enumerate() {
            let is_final = idx == last;
            if vocab.accepts(&segment, separator, is_final) {
                out.push(segment);
            } else {
                log::trace!("OOV: {segment}");
                self.recursive_split(&segment, vocab, is_final, &mut out);
            }
        }
        out
    }

    /// Split `segment` by reverting merges, until every piece is
    /// in-vocabulary or cannot be split further.
    ///
    /// Recursion depth is bounded by the number of rules.
    fn recursive_split(
        &self,
        segment: &str,
        vocab: &TargetVocabulary,
        is_final: bool,
        out: &mut Vec<Symbol>,
    ) {
        let constituents = if is_final {
            let mut key = String::with_capacity(segment.len() + END_OF_WORD.len());
            key.push_str(segment);
            key.push_str(END_OF_WORD);
            self.table.reverse(&key).map(|(left, right)| {
                (
                    left.as_str(),
                    right.strip_suffix(END_OF_WORD).unwrap_or(right.as_str()),
                )
            })
        } else {
            self.table
                .reverse(segment)
                .map(|(left, right)| (left.as_str(), right.as_str()))
        };

        let Some((left, right)) = constituents else {
            // A base symbol.
            out.push(segment.into());
            return;
        };

        let separator = self.separator();

        if vocab.accepts(left, separator, false) {
            out.push(left.into());
        } else {
            self.recursive_split(left, vocab, false, out);
        }

        if vocab.accepts(right, separator, is_final) {
            out.push(right.into());
        } else {
            self.recursive_split(right, vocab, is_final, out);
        }
    }

    /// Segment one whitespace-free token, appending output tokens to `out`.
    ///
    /// Glossary literals are isolated first; every subword except the
    /// token's last carries the separator.
    pub fn segment_token_into(
        &self,
        token: &str,
        out: &mut Vec<String>,
    ) {
        let subwords: Vec<Subwords> = self
            .options
            .glossaries
            .isolate(token)
            .into_iter()
            .map(|segment| self.encode_word(segment))
            .collect();

        let mut pieces = subwords.iter().flat_map(|s| s.iter()).peekable();
        while let Some(piece) = pieces.next() {
            if pieces.peek().is_some() {
                let mut item = String::with_capacity(piece.len() + self.separator().len());
                item.push_str(piece);
                item.push_str(self.separator());
                out.push(item);
            } else {
                out.push(piece.to_string());
            }
        }
    }
}

impl LineSegmenter for SubwordEncoder {
    fn segment_tokens(
        &self,
        line: &str,
    ) -> Vec<String> {
        let mut out = Vec::new();
        for token in line.split(' ').filter(|t| !t.is_empty()) {
            self.segment_token_into(token, &mut out);
        }
        out
    }
}
