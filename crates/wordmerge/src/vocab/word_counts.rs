//! # Word Frequency Tables

use compact_str::CompactString;

use crate::types::{CountType, WMHashMap};

/// A ``{ word -> frequency }`` table.
pub type WordCounts<C> = WMHashMap<CompactString, C>;

/// Sort a [`WordCounts`] table by descending frequency.
///
/// Ties are ordered by ascending word, so the order is deterministic.
pub fn sorted_word_counts<C: CountType>(counts: &WordCounts<C>) -> Vec<(&str, C)> {
    let mut items: Vec<(&str, C)> = counts.iter().map(|(w, &c)| (w.as_str(), c)).collect();
    items.sort_by(|(aw, ac), (bw, bc)| bc.cmp(ac).then_with(|| aw.cmp(bw)));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_word_counts() {
        let mut counts: WordCounts<u32> = Default::default();
        counts.insert("b".into(), 2);
        counts.insert("a".into(), 2);
        counts.insert("c".into(), 7);
        counts.insert("d".into(), 1);

        assert_eq!(
            sorted_word_counts(&counts),
            vec![("c", 7), ("a", 2), ("b", 2), ("d", 1)]
        );
    }
}
