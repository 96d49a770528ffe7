//! # `wordmerge` Merge-Rule Learning
//!
//! Support for learning BPE merge rules from whitespace-tokenized text.
//!
//! Learning requires:
//! * a [`WordCounter`] - a ``{ word -> frequency }`` table over the corpus.
//! * [`MergeLearnerOptions`] - the number of rules and a minimum pair frequency.
//!
//! The learned [`wordmerge::MergeTable`] is applied with
//! [`wordmerge::SubwordEncoder`].
//!
//! [`JointTrainer`] learns one table over several corpora (for instance,
//! the source and target sides of a parallel corpus), and derives
//! a per-corpus subword vocabulary for use with
//! [`wordmerge::SubwordEncoderOptions::with_target_vocab`].
//!
//! ## Learning Example
//!
//! The learner has no parallelism; expect learning time to be dominated
//! by the number of distinct words.
//!
//! ```rust,no_run
//! use wordmerge::merges::save_merge_table_path;
//! use wordmerge_training::{MergeLearner, MergeLearnerOptions};
//!
//! fn example<I, S>(
//!     num_merges: usize,
//!     lines: I,
//!     codes_path: &str,
//! ) -> wordmerge::WMResult<()>
//! where
//!     I: IntoIterator<Item = S>,
//!     S: AsRef<str>,
//! {
//!     let mut learner: MergeLearner = MergeLearnerOptions::new(num_merges)
//!         .with_min_frequency(2)
//!         .init();
//!
//!     learner.update_from_samples(lines);
//!
//!     let table = learner.learn();
//!     save_merge_table_path(&table, codes_path)?;
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod utility;

mod joint_trainer;
mod merge_learner;
mod word_counter;

#[doc(inline)]
pub use joint_trainer::{JointTrainer, JointTrainerOptions, JointTrainingResults};
#[doc(inline)]
pub use merge_learner::{
    DEFAULT_MIN_FREQUENCY,
    DEFAULT_NUM_MERGES,
    MergeJob,
    MergeLearner,
    MergeLearnerOptions,
    learn_merges,
};
#[doc(inline)]
pub use word_counter::WordCounter;
