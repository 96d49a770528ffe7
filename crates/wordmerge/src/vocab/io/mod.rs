//! # Vocabulary IO
//!
//! Vocabulary files are lines of:
//! ```terminaloutput
//! {TOKEN} {FREQUENCY}
//! ```
//!
//! Written vocabularies are sorted by descending frequency.
//!
//! ## Loading A Target Vocabulary
//!
//! ```rust,no_run
//! use wordmerge::{
//!     encoders::{SubwordEncoder, SubwordEncoderOptions},
//!     merges::load_merge_table_path,
//!     vocab::io::load_target_vocab_path,
//! };
//!
//! fn example() -> wordmerge::errors::WMResult<SubwordEncoder> {
//!     let table = load_merge_table_path("codes.bpe", None)?;
//!     let vocab = load_target_vocab_path("vocab.en", Some(50))?;
//!
//!     Ok(SubwordEncoderOptions::default()
//!         .with_target_vocab(vocab)
//!         .init(table))
//! }
//! ```

mod vocab_io;

#[doc(inline)]
pub use vocab_io::*;
