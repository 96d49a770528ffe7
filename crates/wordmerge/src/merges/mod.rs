//! # Merge Rules
//!
//! A [`MergeTable`] is the ordered list of learned [`MergeRule`]s,
//! with forward ``pair -> rank`` and reverse ``merged -> pair`` lookups.
//!
//! ## Merge-Rules Files
//!
//! ```terminaloutput
//! # version 0.2
//! {LEFT} {RIGHT}
//! {LEFT} {RIGHT}
//! ...
//! ```
//!
//! The header is optional; rule rank is the index of the rule line.

mod merge_table;
mod merges_io;

#[doc(inline)]
pub use merge_table::{MergeRule, MergeTable};
#[doc(inline)]
pub use merges_io::{
    load_merge_table_path,
    read_merge_table,
    save_merge_table_path,
    write_merge_table,
};
