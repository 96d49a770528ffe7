//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{AddAssign, SubAssign},
};

use compact_str::CompactString;
use num_traits::{FromPrimitive, PrimInt, ToPrimitive};

/// A BPE symbol.
///
/// Either a single character (possibly end-of-word tagged),
/// or the concatenation of two merged symbols.
pub type Symbol = CompactString;

/// An ordered pair of adjacent symbols; the unit of merging.
pub type SymbolPair = (Symbol, Symbol);

/// A type that can be used as a word frequency.
pub trait CountType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + AddAssign
    + SubAssign
{
}

impl<T> CountType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
        + AddAssign
        + SubAssign
{
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type WMHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WMHashSet<V> = ahash::AHashSet<V>;

        /// Type Alias for the hash builder in this crate.
        pub type WMBuildHasher = ahash::RandomState;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type WMHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WMHashSet<V> = std::collections::HashSet<V>;

        /// Type Alias for the hash builder in this crate.
        pub type WMBuildHasher = std::hash::RandomState;
    }
}

/// Compile-time check that a value is `Send`.
pub fn check_is_send<S: Send>(_: S) {}

/// Compile-time check that a value is `Sync`.
pub fn check_is_sync<S: Sync>(_: S) {}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_count_types() {
        struct IsCount<T: CountType>(PhantomData<T>);

        let _: IsCount<u16>;
        let _: IsCount<u32>;
        let _: IsCount<u64>;
        let _: IsCount<usize>;
    }

    #[test]
    fn test_symbol_pair_order() {
        let a: SymbolPair = ("a".into(), "b".into());
        let b: SymbolPair = ("a".into(), "c".into());
        let c: SymbolPair = ("b".into(), "a".into());
        assert!(a < b);
        assert!(b < c);
    }
}
