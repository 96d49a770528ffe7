//! # Learner Implementation Utilities

mod pair_word_index;

#[doc(inline)]
pub use pair_word_index::{PairCountMap, PairIndexMap, PairWordIndex};
