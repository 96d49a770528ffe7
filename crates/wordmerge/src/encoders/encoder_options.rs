//! Subword Encoder Options
//!
//! Options for building a [`SubwordEncoder`].

use std::sync::Arc;

use crate::{
    encoders::{Glossaries, SubwordEncoder},
    merges::MergeTable,
    vocab::TargetVocabulary,
};

/// The default continuation separator.
pub const DEFAULT_SEPARATOR: &str = "@@";

/// Options for configuring a [`SubwordEncoder`].
#[derive(Debug, Clone)]
pub struct SubwordEncoderOptions {
    /// Separator appended to every non-final subword of a word.
    pub separator: String,

    /// Literals which are never merged or split.
    pub glossaries: Glossaries,

    /// If set, merges producing out-of-vocabulary subwords are reverted.
    pub target_vocab: Option<Arc<TargetVocabulary>>,
}

impl Default for SubwordEncoderOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            glossaries: Glossaries::default(),
            target_vocab: None,
        }
    }
}

impl SubwordEncoderOptions {
    /// Get the separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Set the separator and return the builder.
    pub fn with_separator<S: Into<String>>(
        mut self,
        separator: S,
    ) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the glossaries and return the builder.
    ///
    /// Glossaries are applied in the given order.
    pub fn with_glossaries<I, S>(
        mut self,
        glossaries: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.glossaries = glossaries.into_iter().collect();
        self
    }

    /// Set the target vocabulary.
    pub fn set_target_vocab<V>(
        &mut self,
        target_vocab: V,
    ) where
        V: Into<Option<TargetVocabulary>>,
    {
        self.target_vocab = target_vocab.into().map(Arc::new);
    }

    /// Set the target vocabulary and return the builder.
    pub fn with_target_vocab<V>(
        mut self,
        target_vocab: V,
    ) -> Self
    where
        V: Into<Option<TargetVocabulary>>,
    {
        self.set_target_vocab(target_vocab);
        self
    }

    /// Build a [`SubwordEncoder`] from these options.
    pub fn init<M>(
        self,
        table: M,
    ) -> SubwordEncoder
    where
        M: Into<Arc<MergeTable>>,
    {
        SubwordEncoder::new(table, self)
    }
}
