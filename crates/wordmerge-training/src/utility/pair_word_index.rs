//! # `PairWordIndex` Builder

use wordmerge::{
    CountType,
    SymbolPair,
    SymbolSpanBuf,
    types::{WMHashMap, WMHashSet},
};

/// A map from [`SymbolPair`] to its occurrence count.
pub type PairCountMap<C> = WMHashMap<SymbolPair, C>;

/// A map from [`SymbolPair`] to indices over ``words``.
pub type PairIndexMap = WMHashMap<SymbolPair, WMHashSet<usize>>;

/// An index of adjacent pair information relative to a ``&[SymbolSpanBuf]``.
#[derive(Debug, Clone)]
pub struct PairWordIndex<C: CountType> {
    /// A map from [`SymbolPair`] to its occurrence count.
    ///
    /// ``sum(words[i].count(pair) * word_counts[i]) for all i``
    pub pair_counts: PairCountMap<C>,

    /// A map from [`SymbolPair`] to the indices of words which may contain it.
    pub pair_index: PairIndexMap,
}

impl<C: CountType> PairWordIndex<C> {
    /// Build a [`PairWordIndex`] from a slice of [`SymbolSpanBuf`]s, using a count table.
    ///
    /// # Arguments
    /// * `words` - a sequence of words; assumed to be unique.
    /// * `counts` - `counts[i]` is the count of `words[i]`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(words, counts)))]
    pub fn from_word_count_table(
        words: &[SymbolSpanBuf],
        counts: &[C],
    ) -> Self {
        let size_hint = words.len() / 10;

        let mut index = PairWordIndex {
            pair_counts: PairCountMap::with_capacity(size_hint),
            pair_index: PairIndexMap::with_capacity(size_hint),
        };

        let zero = C::zero();

        for (word_idx, word) in words.iter().enumerate() {
            let count = counts[word_idx];

            if count != zero && word.len() >= 2 {
                for (a, b) in word.pairs() {
                    let p: SymbolPair = (a.clone(), b.clone());
                    *index.pair_counts.entry(p.clone()).or_default() += count;
                    index.pair_index.entry(p).or_default().insert(word_idx);
                }
            }
        }

        index
    }

    /// The current count of `pair`.
    pub fn count(
        &self,
        pair: &SymbolPair,
    ) -> C {
        self.pair_counts.get(pair).copied().unwrap_or_else(C::zero)
    }
}

#[cfg(test)]
mod tests {
    use wordmerge::MergeFormatVersion;

    use super::*;

    fn pair(
        a: &str,
        b: &str,
    ) -> SymbolPair {
        (a.into(), b.into())
    }

    #[test]
    fn test_pair_index_u64() {
        test_pair_index::<u64>();
    }

    #[test]
    fn test_pair_index_u32() {
        test_pair_index::<u32>();
    }

    fn test_pair_index<C: CountType>() {
        let version = MergeFormatVersion::V0_2;

        let words: Vec<SymbolSpanBuf> = vec![
            version.decompose("low"),
            version.decompose("lower"),
            version.decompose("aaa"),
            version.decompose("x"),
        ];

        let counts: Vec<C> = [5, 2, 3, 7]
            .into_iter()
            .map(|c| C::from_u32(c).unwrap())
            .collect();

        let index = PairWordIndex::<C>::from_word_count_table(&words, &counts);

        assert_eq!(
            index.pair_counts,
            [
                (pair("l", "o"), 7),    // 5 [lo]w, 2 [lo]wer
                (pair("o", "w</w>"), 5), // 5 l[ow]
                (pair("o", "w"), 2),    // 2 l[ow]er
                (pair("w", "e"), 2),    // 2 lo[we]r
                (pair("e", "r</w>"), 2), // 2 low[er]
                (pair("a", "a"), 3),    // 3 [aa]a
                (pair("a", "a</w>"), 3), // 3 a[aa]
            ]
            .into_iter()
            .map(|(p, c)| (p, C::from_u32(c).unwrap()))
            .collect::<PairCountMap<C>>()
        );

        assert_eq!(
            index.pair_index,
            [
                (pair("l", "o"), vec![0, 1]),
                (pair("o", "w</w>"), vec![0]),
                (pair("o", "w"), vec![1]),
                (pair("w", "e"), vec![1]),
                (pair("e", "r</w>"), vec![1]),
                (pair("a", "a"), vec![2]),
                (pair("a", "a</w>"), vec![2]),
            ]
            .into_iter()
            .map(|(p, s)| (p, WMHashSet::from_iter(s)))
            .collect::<PairIndexMap>()
        );

        assert_eq!(index.count(&pair("l", "o")), C::from_u32(7).unwrap());
        assert_eq!(index.count(&pair("x", "y")), C::zero());
    }

    #[test]
    fn test_zero_count_words_are_skipped() {
        let version = MergeFormatVersion::V0_2;
        let words = vec![version.decompose("ab")];

        let index = PairWordIndex::<u64>::from_word_count_table(&words, &[0]);
        assert!(index.pair_counts.is_empty());
        assert!(index.pair_index.is_empty());
    }
}
