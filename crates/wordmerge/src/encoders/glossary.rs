//! # Glossaries
//!
//! Glossary literals are never merged with surrounding text,
//! and never split into subwords.

/// Isolate every occurrence of `glossary` inside `segment`.
///
/// If `glossary` is absent from `segment`, or equals it, the
/// segment is returned unchanged. Otherwise, the segment is split
/// on every occurrence of the literal, and the literal is re-inserted
/// between the splits. Empty pieces are dropped, and surrounding
/// whitespace is trimmed from non-glossary pieces.
///
/// ```rust
/// use wordmerge::encoders::isolate_glossary;
///
/// assert_eq!(
///     isolate_glossary("1934USABUSA", "USA"),
///     vec!["1934", "USA", "B", "USA"],
/// );
/// ```
pub fn isolate_glossary<'a>(
    segment: &'a str,
    glossary: &'a str,
) -> Vec<&'a str> {
    if glossary.is_empty() || segment == glossary || !segment.contains(glossary) {
        return vec![segment];
    }

    let mut pieces: Vec<&'a str> = Vec::new();
    for (idx, split) in segment.split(glossary).enumerate() {
        if idx > 0 {
            pieces.push(glossary);
        }
        let split = split.trim();
        if !split.is_empty() {
            pieces.push(split);
        }
    }
    pieces
}

/// An ordered list of glossary literals.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Glossaries {
    literals: Vec<String>,
}

impl<S: Into<String>> FromIterator<S> for Glossaries {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            literals: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Glossaries {
    /// The literals, in application order.
    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Is `word` exactly one of the literals?
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.literals.iter().any(|g| g == word)
    }

    /// Isolate all glossary literals within `word`.
    ///
    /// Literals are applied cumulatively, in list order.
    /// Non-glossary pieces left by an earlier literal are split further by
    /// later literals. A piece equal to an earlier literal is passed through
    /// unchanged, so a later literal never subdivides it. The resulting
    /// partition therefore depends on list order.
    pub fn isolate<'a>(
        &'a self,
        word: &'a str,
    ) -> Vec<&'a str> {
        let mut segments = vec![word];
        for (idx, glossary) in self.literals.iter().enumerate() {
            let earlier = &self.literals[..idx];
            segments = segments
                .into_iter()
                .flat_map(|segment| {
                    if earlier.iter().any(|g| g == segment) {
                        vec![segment]
                    } else {
                        isolate_glossary(segment, glossary)
                    }
                })
                .collect();
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolate_glossary() {
        assert_eq!(
            isolate_glossary("1934USABUSA", "USA"),
            vec!["1934", "USA", "B", "USA"]
        );
        assert_eq!(isolate_glossary("USA", "USA"), vec!["USA"]);
        assert_eq!(isolate_glossary("France", "USA"), vec!["France"]);
        assert_eq!(isolate_glossary("USAUSA", "USA"), vec!["USA", "USA"]);
        assert_eq!(
            isolate_glossary("x<tag>y", "<tag>"),
            vec!["x", "<tag>", "y"]
        );
    }

    #[test]
    fn test_isolate_glossary_trims() {
        assert_eq!(isolate_glossary("a\tUSA\tb", "USA"), vec!["a", "USA", "b"]);
        assert_eq!(isolate_glossary("\tUSA", "USA"), vec!["USA"]);
    }

    #[test]
    fn test_glossaries_order_dependent() {
        let glossaries: Glossaries = ["USA", "SAB"].into_iter().collect();
        assert_eq!(glossaries.isolate("1USAB"), vec!["1", "USA", "B"]);

        let glossaries: Glossaries = ["SAB", "USA"].into_iter().collect();
        assert_eq!(glossaries.isolate("1USAB"), vec!["1U", "SAB"]);
    }

    #[test]
    fn test_isolated_literal_is_not_subdivided() {
        let glossaries: Glossaries = ["USA", "SA"].into_iter().collect();
        assert_eq!(glossaries.isolate("1USA"), vec!["1", "USA"]);
        assert_eq!(glossaries.isolate("USA"), vec!["USA"]);
        assert_eq!(glossaries.isolate("SAUSA"), vec!["SA", "USA"]);

        let glossaries: Glossaries = ["SA", "USA"].into_iter().collect();
        assert_eq!(glossaries.isolate("1USA"), vec!["1U", "SA"]);
    }

    #[test]
    fn test_glossaries_cumulative() {
        let glossaries: Glossaries = ["USA", "EU"].into_iter().collect();
        assert!(!glossaries.is_empty());
        assert!(glossaries.contains("EU"));
        assert!(!glossaries.contains("E"));
        assert_eq!(glossaries.literals().len(), 2);

        assert_eq!(
            glossaries.isolate("USAandEUand"),
            vec!["USA", "and", "EU", "and"]
        );
        assert_eq!(glossaries.isolate("plain"), vec!["plain"]);

        let empty = Glossaries::default();
        assert_eq!(empty.isolate("USA"), vec!["USA"]);
    }
}
