//! # Vocabularies
//!
//! * [`WordCounts`] - a ``{ word -> frequency }`` table.
//! * [`TargetVocabulary`] - the set of subwords considered in-vocabulary
//!   when segmenting; see [`crate::encoders::SubwordEncoder`].
//! * [`io`] - vocabulary files.

pub mod io;

mod target_vocab;
mod word_counts;

#[doc(inline)]
pub use target_vocab::TargetVocabulary;
#[doc(inline)]
pub use word_counts::{WordCounts, sorted_word_counts};
