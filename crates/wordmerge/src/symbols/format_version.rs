//! # Merge Format Versions

use core::{fmt, str::FromStr};

use crate::{
    errors::{WMResult, WordmergeError},
    symbols::SymbolSpanBuf,
    types::Symbol,
};

/// The end-of-word marker appended to the final character of a word.
pub const END_OF_WORD: &str = "</w>";

/// Merge-rules format version.
///
/// The version controls how a raw word is decomposed into its
/// initial symbols. There is no fallback decomposition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeFormatVersion {
    /// Characters, with [`END_OF_WORD`] appended to the last.
    #[default]
    V0_2,
}

impl MergeFormatVersion {
    /// The tag written to merge-rules file headers.
    pub fn tag(&self) -> &'static str {
        match self {
            MergeFormatVersion::V0_2 => "0.2",
        }
    }

    /// Parse a version tag.
    ///
    /// Accepts ``0.2`` and any ``0.2.x`` tag.
    pub fn parse(tag: &str) -> WMResult<Self> {
        let tag = tag.trim();
        if tag == "0.2" || tag.starts_with("0.2.") {
            Ok(MergeFormatVersion::V0_2)
        } else {
            Err(WordmergeError::UnsupportedVersion {
                version: tag.to_string(),
            })
        }
    }

    /// Decompose a raw word into its initial symbols.
    ///
    /// ## Arguments
    /// * `word` - the raw word.
    ///
    /// ## Returns
    /// A span with one symbol per character; the last end-of-word tagged.
    pub fn decompose(
        &self,
        word: &str,
    ) -> SymbolSpanBuf {
        match self {
            MergeFormatVersion::V0_2 => {
                let mut symbols: Vec<Symbol> = word
                    .chars()
                    .map(|c| {
                        let mut s = Symbol::default();
                        s.push(c);
                        s
                    })
                    .collect();
                if let Some(last) = symbols.last_mut() {
                    last.push_str(END_OF_WORD);
                }
                SymbolSpanBuf::from_symbols(symbols)
            }
        }
    }
}

impl FromStr for MergeFormatVersion {
    type Err = WordmergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MergeFormatVersion {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            MergeFormatVersion::parse("0.2").unwrap(),
            MergeFormatVersion::V0_2
        );
        assert_eq!(
            "0.2.1".parse::<MergeFormatVersion>().unwrap(),
            MergeFormatVersion::V0_2
        );

        for bad in ["0.1", "0.20", "1.0", "unknown", ""] {
            assert!(matches!(
                MergeFormatVersion::parse(bad),
                Err(WordmergeError::UnsupportedVersion { .. })
            ));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(MergeFormatVersion::V0_2.to_string(), "0.2");
    }

    #[test]
    fn test_decompose() {
        let version = MergeFormatVersion::default();

        let span = version.decompose("low");
        assert_eq!(span.symbols(), &["l", "o", "w</w>"]);

        let span = version.decompose("a");
        assert_eq!(span.symbols(), &["a</w>"]);

        let span = version.decompose("né");
        assert_eq!(span.symbols(), &["n", "é</w>"]);

        assert!(version.decompose("").is_empty());
    }
}
