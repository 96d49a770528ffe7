//! # Symbol-Level Words
//!
//! A word is learned and encoded as a [`SymbolSpanBuf`]: one symbol per
//! character, with [`END_OF_WORD`] appended to the final character.
//! The [`MergeFormatVersion`] of a merge table decides this decomposition.

mod format_version;
mod symbol_span;

#[doc(inline)]
pub use format_version::{END_OF_WORD, MergeFormatVersion};
#[doc(inline)]
pub use symbol_span::SymbolSpanBuf;
