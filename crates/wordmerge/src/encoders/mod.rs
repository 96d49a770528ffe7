//! # Subword Encoders
//!
//! [`SubwordEncoder`] applies a [`crate::merges::MergeTable`] to words,
//! and (through [`LineSegmenter`]) to whitespace-tokenized lines.

mod encoder_options;
mod glossary;
mod line_segmenter;
mod segment_cache;
mod subword_encoder;

#[doc(inline)]
pub use encoder_options::{DEFAULT_SEPARATOR, SubwordEncoderOptions};
#[doc(inline)]
pub use glossary::{Glossaries, isolate_glossary};
#[doc(inline)]
pub use line_segmenter::LineSegmenter;
#[doc(inline)]
pub use segment_cache::{DEFAULT_CACHE_SHARDS, SegmentCache, Subwords};
#[doc(inline)]
pub use subword_encoder::SubwordEncoder;
