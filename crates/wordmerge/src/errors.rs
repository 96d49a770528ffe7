//! # Error Types

/// Errors from wordmerge operations.
#[derive(Debug, thiserror::Error)]
pub enum WordmergeError {
    /// The merge-rules file declares a format version with no known
    /// word decomposition.
    #[error("unsupported merge format version: {version:?}")]
    UnsupportedVersion {
        /// The unrecognized version tag.
        version: String,
    },

    /// Joint training was asked for a different number of vocabulary
    /// outputs than there are input corpora.
    #[error("number of input corpora ({inputs}) and vocabulary outputs ({outputs}) must match")]
    CorpusCountMismatch {
        /// The number of input corpora.
        inputs: usize,

        /// The number of requested vocabulary outputs.
        outputs: usize,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (merge rules, vocabulary lines, integers).
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for wordmerge operations.
pub type WMResult<T> = core::result::Result<T, WordmergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = WordmergeError::UnsupportedVersion {
            version: "0.1".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported merge format version: \"0.1\"");

        let err = WordmergeError::CorpusCountMismatch {
            inputs: 2,
            outputs: 1,
        };
        assert_eq!(
            err.to_string(),
            "number of input corpora (2) and vocabulary outputs (1) must match"
        );
    }
}
