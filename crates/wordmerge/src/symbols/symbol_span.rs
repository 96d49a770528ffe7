//! # Symbol Span Buffer

use crate::types::{Symbol, SymbolPair};

/// A mutable span of symbols (a word).
///
/// Iteratively rewritten during merge learning and merge application.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolSpanBuf {
    symbols: Vec<Symbol>,
}

impl<S: Into<Symbol>> FromIterator<S> for SymbolSpanBuf {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_symbols(iter.into_iter().map(Into::into).collect())
    }
}

impl SymbolSpanBuf {
    const DEC: i32 = -1;
    const INC: i32 = 1;

    /// Create a new span buffer from symbols.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// View the symbols as a slice.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Release the symbols.
    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }

    /// Get the length of the span.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Is this span empty?
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get an iterator over adjacent ``(left, right)`` symbol windows of this span.
    pub fn pairs(&self) -> impl Iterator<Item = (&Symbol, &Symbol)> + '_ {
        self.symbols.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Find the next occurrence of `pair`, starting at symbol index `from`.
    ///
    /// ## Returns
    /// The index of the left symbol of the occurrence, if any.
    pub fn find_pair(
        &self,
        pair: (&str, &str),
        from: usize,
    ) -> Option<usize> {
        let (a, b) = pair;
        let n = self.symbols.len();
        (from..n.saturating_sub(1)).find(|&i| self.symbols[i] == a && self.symbols[i + 1] == b)
    }

    /// Merge all non-overlapping left-to-right occurrences of `pair`.
    ///
    /// The replacement symbol is the concatenation ``left + right``.
    /// A symbol consumed by one occurrence never starts the next.
    ///
    /// # Arguments
    /// * `pair` - the pair to merge.
    /// * `on_merge` - a callback function to invoke for each incremental pair delta.
    ///   The function is called with:
    ///   - `pair` - the affected pair.
    ///   - `delta` - the pair count delta: `+1` for an added pair, `-1` for a removed pair.
    pub fn merge_pair_cb<F>(
        &mut self,
        pair: (&str, &str),
        on_merge: &mut F,
    ) where
        F: FnMut(SymbolPair, i32),
    {
        let (a, b) = pair;
        let n = self.symbols.len();

        if n < 2 {
            // Single-symbol words have no pairs to merge.
            return;
        }

        let Some(first) = self.find_pair(pair, 0) else {
            return;
        };

        let mut replacement = Symbol::with_capacity(a.len() + b.len());
        replacement.push_str(a);
        replacement.push_str(b);

        let mut new_symbols: Vec<Symbol> = Vec::with_capacity(n);

        let mut i = 0;
        let mut next = Some(first);
        while let Some(j) = next {
            new_symbols.extend_from_slice(&self.symbols[i..j]);

            // Remove Previous Pair?
            if let Some(x) = new_symbols.last() {
                on_merge((x.clone(), a.into()), Self::DEC);
                on_merge((x.clone(), replacement.clone()), Self::INC);
            }

            // Remove Current Pair.
            on_merge((a.into(), b.into()), Self::DEC);

            // Remove Next Pair?
            if j + 2 < n {
                let y = &self.symbols[j + 2];
                on_merge((b.into(), y.clone()), Self::DEC);
                on_merge((replacement.clone(), y.clone()), Self::INC);
            }

            new_symbols.push(replacement.clone());

            // Skip 'a' and 'b'.
            i = j + 2;
            next = self.find_pair(pair, i);
        }
        new_symbols.extend_from_slice(&self.symbols[i..]);

        self.symbols = new_symbols;
    }

    /// Merge all non-overlapping occurrences of `pair`.
    ///
    /// # Returns
    /// a delta list of pair count deltas for this span:
    /// * `(SymbolPair, +1)` - for each instance of an added pair.
    /// * `(SymbolPair, -1)` - for each instance of a removed pair.
    pub fn merge_pair(
        &mut self,
        pair: (&str, &str),
    ) -> Vec<(SymbolPair, i32)> {
        let mut deltas: Vec<(SymbolPair, i32)> = Vec::with_capacity(6);
        self.merge_pair_cb(pair, &mut |p, d| deltas.push((p, d)));
        deltas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(
        a: &str,
        b: &str,
    ) -> SymbolPair {
        (a.into(), b.into())
    }

    #[test]
    fn test_from_iter() {
        let span: SymbolSpanBuf = ["a", "b", "c"].into_iter().collect();
        assert_eq!(span.symbols(), &["a", "b", "c"]);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert_eq!(span.into_symbols().len(), 3);
    }

    #[test]
    fn test_span_pairs() {
        let span: SymbolSpanBuf = ["l", "o", "w</w>"].into_iter().collect();
        let pairs: Vec<_> = span.pairs().map(|(a, b)| (a.as_str(), b.as_str())).collect();
        assert_eq!(pairs, vec![("l", "o"), ("o", "w</w>")]);
    }

    #[test]
    fn test_find_pair() {
        let span: SymbolSpanBuf = ["a", "b", "a", "b"].into_iter().collect();
        assert_eq!(span.find_pair(("a", "b"), 0), Some(0));
        assert_eq!(span.find_pair(("a", "b"), 1), Some(2));
        assert_eq!(span.find_pair(("a", "b"), 3), None);
        assert_eq!(span.find_pair(("b", "b"), 0), None);

        let empty = SymbolSpanBuf::default();
        assert_eq!(empty.find_pair(("a", "b"), 0), None);
    }

    #[test]
    fn test_merge_pair_non_overlapping() {
        let mut span: SymbolSpanBuf = ["a", "a", "a"].into_iter().collect();
        span.merge_pair(("a", "a"));
        assert_eq!(span.symbols(), &["aa", "a"]);

        let mut span: SymbolSpanBuf = ["a", "a", "a", "a"].into_iter().collect();
        let deltas = span.merge_pair(("a", "a"));
        assert_eq!(span.symbols(), &["aa", "aa"]);
        assert_eq!(
            deltas,
            vec![
                // first match
                (pair("a", "a"), -1),
                (pair("a", "a"), -1),
                (pair("aa", "a"), 1),
                // second match
                (pair("aa", "a"), -1),
                (pair("aa", "aa"), 1),
                (pair("a", "a"), -1),
            ]
        );
    }

    #[test]
    fn test_merge_pair_deltas() {
        let mut span: SymbolSpanBuf = ["x", "a", "b", "y", "a", "b"].into_iter().collect();

        let deltas = span.merge_pair(("a", "b"));
        assert_eq!(span.symbols(), &["x", "ab", "y", "ab"]);

        assert_eq!(
            deltas,
            vec![
                // first match
                (pair("x", "a"), -1),
                (pair("x", "ab"), 1),
                (pair("a", "b"), -1),
                (pair("b", "y"), -1),
                (pair("ab", "y"), 1),
                // second match
                (pair("y", "a"), -1),
                (pair("y", "ab"), 1),
                (pair("a", "b"), -1),
            ]
        );
    }

    #[test]
    fn test_merge_pair_absent() {
        let mut span: SymbolSpanBuf = ["a", "b"].into_iter().collect();
        let deltas = span.merge_pair(("b", "a"));
        assert!(deltas.is_empty());
        assert_eq!(span.symbols(), &["a", "b"]);

        let mut single: SymbolSpanBuf = ["a</w>"].into_iter().collect();
        assert!(single.merge_pair(("a", "</w>")).is_empty());
    }

    #[test]
    fn test_merge_pair_cb_weighted() {
        let mut span: SymbolSpanBuf = ["l", "o", "w</w>"].into_iter().collect();
        let mut total = 0;
        span.merge_pair_cb(("l", "o"), &mut |_, d| total += d * 5);
        assert_eq!(span.symbols(), &["lo", "w</w>"]);
        // -(l,o) -(o,w</w>) +(lo,w</w>)
        assert_eq!(total, -5);
    }
}
