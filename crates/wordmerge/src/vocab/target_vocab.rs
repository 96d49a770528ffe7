//! # Target Vocabulary

use crate::types::WMHashSet;

/// The set of subwords considered in-vocabulary.
///
/// Membership is separator-aware: a non-final subword of a word
/// is in-vocabulary only if ``subword + separator`` is a member;
/// the final subword is checked bare.
#[derive(Debug, Default, Clone)]
pub struct TargetVocabulary {
    entries: WMHashSet<String>,
}

impl<S: Into<String>> FromIterator<S> for TargetVocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl TargetVocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry.
    pub fn insert<S: Into<String>>(
        &mut self,
        entry: S,
    ) {
        self.entries.insert(entry.into());
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Is `entry` a literal member?
    pub fn contains(
        &self,
        entry: &str,
    ) -> bool {
        self.entries.contains(entry)
    }

    /// Is `subword` in-vocabulary at its position?
    ///
    /// ## Arguments
    /// * `subword` - the subword, without separator.
    /// * `separator` - the continuation separator.
    /// * `is_final` - is this the last subword of its word?
    pub fn accepts(
        &self,
        subword: &str,
        separator: &str,
        is_final: bool,
    ) -> bool {
        if is_final {
            self.contains(subword)
        } else {
            let mut key = String::with_capacity(subword.len() + separator.len());
            key.push_str(subword);
            key.push_str(separator);
            self.contains(&key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts() {
        let vocab: TargetVocabulary = ["ab@@", "c", "low"].into_iter().collect();
        assert_eq!(vocab.len(), 3);
        assert!(!vocab.is_empty());

        assert!(vocab.accepts("ab", "@@", false));
        assert!(!vocab.accepts("ab", "@@", true));

        assert!(vocab.accepts("c", "@@", true));
        assert!(!vocab.accepts("c", "@@", false));

        assert!(vocab.accepts("low", "@@", true));
        assert!(!vocab.accepts("abc", "@@", false));
    }

    #[test]
    fn test_insert() {
        let mut vocab = TargetVocabulary::new();
        assert!(vocab.is_empty());
        vocab.insert("x@@");
        assert!(vocab.contains("x@@"));
        assert!(vocab.accepts("x", "@@", false));
    }
}
