//! # Merge Table

use crate::{
    symbols::MergeFormatVersion,
    types::{Symbol, SymbolPair, WMHashMap},
};

/// A learned ``(left, right)`` merge, ranked by learning order.
///
/// Lower rank means higher application priority.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeRule {
    /// The merged pair.
    pub pair: SymbolPair,

    /// The zero-based learning order of this rule.
    pub rank: usize,
}

impl MergeRule {
    /// Create a new rule.
    pub fn new<L, R>(
        left: L,
        right: R,
        rank: usize,
    ) -> Self
    where
        L: Into<Symbol>,
        R: Into<Symbol>,
    {
        Self {
            pair: (left.into(), right.into()),
            rank,
        }
    }

    /// The symbol this rule produces: ``left + right``.
    pub fn merged(&self) -> Symbol {
        let (left, right) = &self.pair;
        let mut merged = Symbol::with_capacity(left.len() + right.len());
        merged.push_str(left);
        merged.push_str(right);
        merged
    }
}

/// Learned merge rules, with rank and reverse lookup.
///
/// Read-only after construction; except for [`MergeTable::truncate`].
#[derive(Debug, Default, Clone)]
pub struct MergeTable {
    version: MergeFormatVersion,

    /// Rules, in ascending rank order.
    rules: Vec<MergeRule>,

    /// ``{ pair -> rank }``
    ranks: WMHashMap<SymbolPair, usize>,

    /// ``{ merged -> pair }``; owned by the lowest-ranked producer.
    reverse: WMHashMap<Symbol, SymbolPair>,
}

impl MergeTable {
    /// Build a table from an ordered sequence of pairs.
    ///
    /// The rank of each pair is its index in the sequence.
    /// When a pair repeats, only its first occurrence is kept.
    ///
    /// ## Arguments
    /// * `version` - the word decomposition scheme.
    /// * `pairs` - the pairs, in learning order.
    pub fn from_pairs<I>(
        version: MergeFormatVersion,
        pairs: I,
    ) -> Self
    where
        I: IntoIterator<Item = SymbolPair>,
    {
        Self::from_ranked_pairs(version, pairs.into_iter().enumerate().map(|(i, p)| (p, i)))
    }

    /// Build a table from ``(pair, rank)`` entries with ascending ranks.
    pub(crate) fn from_ranked_pairs<I>(
        version: MergeFormatVersion,
        entries: I,
    ) -> Self
    where
        I: IntoIterator<Item = (SymbolPair, usize)>,
    {
        let mut table = Self {
            version,
            ..Default::default()
        };
        for (pair, rank) in entries {
            table.push_rule(MergeRule { pair, rank });
        }
        table
    }

    fn push_rule(
        &mut self,
        rule: MergeRule,
    ) {
        if self.ranks.contains_key(&rule.pair) {
            return;
        }
        self.ranks.insert(rule.pair.clone(), rule.rank);
        self.reverse
            .entry(rule.merged())
            .or_insert_with(|| rule.pair.clone());
        self.rules.push(rule);
    }

    /// The word decomposition scheme of this table.
    pub fn version(&self) -> MergeFormatVersion {
        self.version
    }

    /// The rules, in ascending rank order.
    pub fn rules(&self) -> &[MergeRule] {
        &self.rules
    }

    /// The number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over the rule pairs, in rank order.
    pub fn pairs(&self) -> impl Iterator<Item = &SymbolPair> + '_ {
        self.rules.iter().map(|r| &r.pair)
    }

    /// Look up the rank of a pair.
    pub fn rank(
        &self,
        pair: &SymbolPair,
    ) -> Option<usize> {
        self.ranks.get(pair).copied()
    }

    /// Look up the pair which produced a merged symbol.
    pub fn reverse(
        &self,
        merged: &str,
    ) -> Option<&SymbolPair> {
        self.reverse.get(merged)
    }

    /// Keep only the rules with rank below `limit`.
    pub fn truncate(
        &mut self,
        limit: usize,
    ) {
        if self.rules.iter().all(|r| r.rank < limit) {
            return;
        }
        let rules = core::mem::take(&mut self.rules);
        *self = Self::from_ranked_pairs(
            self.version,
            rules
                .into_iter()
                .filter(|r| r.rank < limit)
                .map(|r| (r.pair, r.rank)),
        );
    }

    /// Keep only the rules with rank below `limit`, and return the table.
    pub fn with_limit(
        mut self,
        limit: Option<usize>,
    ) -> Self {
        if let Some(limit) = limit {
            self.truncate(limit);
        }
        self
    }
}
