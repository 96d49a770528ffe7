//! # Merge Learner

use core::cmp::Ordering;
use std::io::BufRead;

use dary_heap::OctonaryHeap;
use wordmerge::{
    CountType,
    MergeFormatVersion,
    MergeTable,
    SymbolPair,
    SymbolSpanBuf,
    WMResult,
    WordCounts,
    types::WMHashMap,
    vocab::sorted_word_counts,
};

use crate::{
    WordCounter,
    utility::{PairIndexMap, PairWordIndex},
};

/// The default number of merge rules to learn.
pub const DEFAULT_NUM_MERGES: usize = 10_000;

/// The default minimum pair frequency.
pub const DEFAULT_MIN_FREQUENCY: u64 = 2;

/// Options for [`MergeLearner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeLearnerOptions {
    /// The maximum number of merge rules to learn.
    pub num_merges: usize,

    /// Learning stops when the most frequent pair is less frequent than this.
    pub min_frequency: u64,

    /// Log every learned rule at ``info`` level.
    pub verbose: bool,
}

impl Default for MergeLearnerOptions {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_MERGES)
    }
}

impl MergeLearnerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `num_merges` - The maximum number of merge rules to learn.
    ///
    /// ## Returns
    /// A new `MergeLearnerOptions` instance.
    pub fn new(num_merges: usize) -> Self {
        Self {
            num_merges,
            min_frequency: DEFAULT_MIN_FREQUENCY,
            verbose: false,
        }
    }

    /// Sets the maximum number of merge rules.
    pub fn with_num_merges(
        self,
        num_merges: usize,
    ) -> Self {
        Self { num_merges, ..self }
    }

    /// Sets the minimum pair frequency.
    pub fn with_min_frequency(
        self,
        min_frequency: u64,
    ) -> Self {
        Self {
            min_frequency,
            ..self
        }
    }

    /// Sets per-rule logging.
    pub fn with_verbose(
        self,
        verbose: bool,
    ) -> Self {
        Self { verbose, ..self }
    }

    /// Initializes a [`MergeLearner`] from these options.
    pub fn init<C: CountType>(self) -> MergeLearner<C> {
        MergeLearner::new(self)
    }
}

/// Info about a [`SymbolPair`] that could be merged.
#[derive(Debug, Eq)]
pub struct MergeJob<C: CountType> {
    /// The number of instances of this pair in the corpus.
    pub count: C,

    /// The pair to merge.
    pub pair: SymbolPair,
}

impl<C: CountType> MergeJob<C> {
    /// The job key.
    ///
    /// Max-heap by count; tie-break to the greater pair (deterministic).
    pub fn heap_key(&self) -> (C, &SymbolPair) {
        (self.count, &self.pair)
    }
}

impl<C: CountType> PartialEq for MergeJob<C> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.heap_key() == other.heap_key()
    }
}

impl<C: CountType> PartialOrd for MergeJob<C> {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: CountType> Ord for MergeJob<C> {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.heap_key().cmp(&other.heap_key())
    }
}

/// Learns an ordered list of merge rules from word counts.
///
/// # Parameters
/// * `C` - the type used to store counts.
#[derive(Debug, Clone)]
pub struct MergeLearner<C = u64>
where
    C: CountType,
{
    /// Learner options.
    pub options: MergeLearnerOptions,

    /// The word counter.
    pub word_counter: WordCounter<C>,
}

impl<C: CountType> MergeLearner<C> {
    /// Initializes a [`MergeLearner`].
    pub fn new(options: MergeLearnerOptions) -> Self {
        Self {
            options,
            word_counter: WordCounter::new(),
        }
    }

    /// Update word counts inplace from a sample iterator.
    ///
    /// ## Arguments
    /// * `samples` - An iterator over lines of whitespace-tokenized text.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, samples)))]
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.word_counter.update_from_samples(samples);
    }

    /// Update word counts inplace from a line reader.
    pub fn update_from_reader<R: BufRead>(
        &mut self,
        reader: R,
    ) -> WMResult<()> {
        self.word_counter.update_from_reader(reader)
    }

    /// Add pre-computed word counts.
    pub fn update_from_word_counts(
        &mut self,
        counts: &WordCounts<C>,
    ) {
        self.word_counter.merge_counts(counts);
    }

    /// Learn a [`MergeTable`] from the accumulated word counts.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn learn(self) -> MergeTable {
        learn_merges(&self.options, self.word_counter.word_counts())
    }
}

/// Learn a [`MergeTable`] from word counts.
///
/// ## Arguments
/// * `options` - the learner options.
/// * `counts` - the ``{ word -> frequency }`` table.
///
/// ## Returns
/// The learned table; ranks are assigned in learning order.
pub fn learn_merges<C: CountType>(
    options: &MergeLearnerOptions,
    counts: &WordCounts<C>,
) -> MergeTable {
    let version = MergeFormatVersion::default();
    let num_merges = options.num_merges;
    let min_frequency = C::from_u64(options.min_frequency).unwrap_or_else(C::max_value);

    log::info!(
        "Starting merge learning: {} words, up to {} merges",
        counts.len(),
        num_merges
    );

    let (mut words, word_counts): (Vec<SymbolSpanBuf>, Vec<C>) = sorted_word_counts(counts)
        .into_iter()
        .map(|(word, count)| (version.decompose(word), count))
        .unzip();

    log::debug!("Building pair index...");

    let PairWordIndex {
        mut pair_counts,
        mut pair_index,
    } = PairWordIndex::from_word_count_table(&words, &word_counts);

    let zero = C::zero();

    // ---- Build heap ----
    log::debug!("Building heap with {} unique pairs", pair_counts.len());
    let mut heap = OctonaryHeap::with_capacity(pair_counts.len());
    for (pair, &count) in pair_counts.iter() {
        if count > zero {
            heap.push(MergeJob {
                count,
                pair: pair.clone(),
            });
        }
    }

    // ---- Merge loop ----
    let mut pairs: Vec<SymbolPair> = Vec::with_capacity(num_merges.min(pair_counts.len()));
    let mut last_log_percent = 0;

    while pairs.len() < num_merges {
        let Some(mut job) = heap.pop() else {
            // No more pairs to merge.
            break;
        };

        {
            // Lazy refresh the job count.
            let current = pair_counts.get(&job.pair).copied().unwrap_or(zero);
            if job.count != current {
                job.count = current;
                if job.count > zero {
                    heap.push(job);
                }
                continue;
            }
        }

        if job.count == zero || job.count < min_frequency {
            log::debug!(
                "Stopping: best pair frequency {} is below {}",
                job.count,
                min_frequency
            );
            break;
        }

        let rank = pairs.len();
        let (left, right) = &job.pair;
        if options.verbose {
            log::info!(
                "pair {rank}: {left} {right} -> {left}{right} (frequency {})",
                job.count
            );
        } else {
            log::debug!(
                "pair {rank}: {left} {right} -> {left}{right} (frequency {})",
                job.count
            );
        }

        let mut grown_pairs: PairIndexMap = WMHashMap::with_capacity(16);

        // Merge this pair in all words where it may occur.
        let word_indices = pair_index.remove(&job.pair).unwrap_or_default();
        for &word_idx in &word_indices {
            let word_count = word_counts[word_idx];
            words[word_idx].merge_pair_cb((left.as_str(), right.as_str()), &mut |pair, delta| {
                if delta < 0 {
                    // This pair was removed from this word.
                    *pair_counts.entry(pair).or_default() -= word_count;
                } else if delta > 0 {
                    // This pair was added to this word, and contains the merged symbol.
                    *pair_counts.entry(pair.clone()).or_default() += word_count;
                    grown_pairs.entry(pair).or_default().insert(word_idx);
                }
            });
        }

        for (pair, indices) in grown_pairs {
            let count = pair_counts.get(&pair).copied().unwrap_or(zero);
            pair_index.entry(pair.clone()).or_default().extend(indices);
            if count > zero {
                heap.push(MergeJob { count, pair });
            }
        }

        pairs.push(job.pair);

        // Log progress every 1%.
        let current_percent = (pairs.len() * 100) / num_merges;
        if current_percent > last_log_percent {
            log::info!(
                "Progress: {}% ({}/{} merges)",
                current_percent,
                pairs.len(),
                num_merges,
            );
            last_log_percent = current_percent;
        }
    }

    log::info!("Finished learning: {} merges completed", pairs.len());

    MergeTable::from_pairs(version, pairs)
}
