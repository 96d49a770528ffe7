//! # `wordmerge` BPE Subword Segmentation
//!
//! Byte-Pair-Encoding subword segmentation for machine translation
//! preprocessing. Rare and unseen words are represented as sequences
//! of known subword units instead of being dropped as out-of-vocabulary.
//!
//! See:
//! * [`merges`] for the learned merge rules and the merge-rules file format.
//! * [`encoders`] to segment words and whitespace-tokenized lines.
//! * [`vocab`] for target vocabularies and vocabulary files.
//! * [`symbols`] for the symbol-level representation of words.
//!
//! Learning merge rules lives in the `wordmerge-training` crate.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::WM{HashMap,HashSet}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables parallel batch segmentation using the ``rayon`` crate.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Segmenting Text
//!
//! ```rust,no_run
//! use wordmerge::{
//!     encoders::{LineSegmenter, SubwordEncoder, SubwordEncoderOptions},
//!     merges::load_merge_table_path,
//! };
//!
//! fn example() -> wordmerge::errors::WMResult<()> {
//!     let table = load_merge_table_path("codes.bpe", None)?;
//!
//!     let encoder: SubwordEncoder = SubwordEncoderOptions::default()
//!         .with_glossaries(["USA"])
//!         .init(table);
//!
//!     let line = encoder.segment_line("the lowest rates in the USA");
//!     println!("{line}");
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod encoders;
pub mod errors;
pub mod merges;
pub mod symbols;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use encoders::{SubwordEncoder, SubwordEncoderOptions};
#[doc(inline)]
pub use errors::{WMResult, WordmergeError};
#[doc(inline)]
pub use merges::{MergeRule, MergeTable};
#[doc(inline)]
pub use symbols::{MergeFormatVersion, SymbolSpanBuf};
#[doc(inline)]
pub use types::{CountType, Symbol, SymbolPair};
#[doc(inline)]
pub use vocab::{TargetVocabulary, WordCounts};
