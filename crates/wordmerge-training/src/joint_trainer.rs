//! # Joint Trainer
//!
//! Learns one [`MergeTable`] over the union of several corpora, then
//! segments each corpus with that table and counts its subword tokens.

use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor, Write},
    path::Path,
};

use wordmerge::{
    MergeTable,
    SubwordEncoder,
    SubwordEncoderOptions,
    WMResult,
    WordCounts,
    WordmergeError,
    encoders::{DEFAULT_SEPARATOR, LineSegmenter},
    merges::{load_merge_table_path, read_merge_table, save_merge_table_path, write_merge_table},
    vocab::io::{save_word_counts_path, write_word_counts},
};

use crate::{
    WordCounter,
    merge_learner::{DEFAULT_MIN_FREQUENCY, DEFAULT_NUM_MERGES, MergeLearnerOptions, learn_merges},
};

/// Options for [`JointTrainer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JointTrainerOptions {
    /// The maximum number of merge rules to learn.
    pub num_merges: usize,

    /// Learning stops when the most frequent pair is less frequent than this.
    pub min_frequency: u64,

    /// The continuation separator of the derived vocabularies.
    pub separator: String,

    /// Log every learned rule at ``info`` level.
    pub verbose: bool,
}

impl Default for JointTrainerOptions {
    fn default() -> Self {
        Self {
            num_merges: DEFAULT_NUM_MERGES,
            min_frequency: DEFAULT_MIN_FREQUENCY,
            separator: DEFAULT_SEPARATOR.to_string(),
            verbose: false,
        }
    }
}

impl JointTrainerOptions {
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

    /// Sets the continuation separator.
    pub fn with_separator<S: Into<String>>(
        self,
        separator: S,
    ) -> Self {
        Self {
            separator: separator.into(),
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

    /// The [`MergeLearnerOptions`] for the learning phase.
    pub fn learner_options(&self) -> MergeLearnerOptions {
        MergeLearnerOptions::new(self.num_merges)
            .with_min_frequency(self.min_frequency)
            .with_verbose(self.verbose)
    }

    /// Initializes a [`JointTrainer`] from these options.
    pub fn init(self) -> JointTrainer {
        JointTrainer::new(self)
    }
}

/// The results of joint training.
#[derive(Debug, Clone)]
pub struct JointTrainingResults {
    /// The learned table, as re-loaded from its persisted form.
    pub merge_table: MergeTable,

    /// ``corpus_vocabs[i]`` counts the subword tokens of corpus ``i``.
    pub corpus_vocabs: Vec<WordCounts<u64>>,
}

/// Learns a shared [`MergeTable`] and per-corpus subword vocabularies.
#[derive(Debug, Clone, Default)]
pub struct JointTrainer {
    /// Trainer options.
    pub options: JointTrainerOptions,
}

impl JointTrainer {
    /// Initializes a [`JointTrainer`].
    pub fn new(options: JointTrainerOptions) -> Self {
        Self { options }
    }

    /// Fail unless `outputs` is zero or equals `inputs`.
    fn check_corpus_count(
        inputs: usize,
        outputs: usize,
    ) -> WMResult<()> {
        if outputs != 0 && outputs != inputs {
            return Err(WordmergeError::CorpusCountMismatch { inputs, outputs });
        }
        Ok(())
    }

    fn learn_table(
        &self,
        counter: &WordCounter<u64>,
    ) -> MergeTable {
        log::info!(
            "Learning merges over {} distinct words",
            counter.word_counts().len()
        );
        learn_merges(&self.options.learner_options(), counter.word_counts())
    }

    fn build_encoder(
        &self,
        table: MergeTable,
    ) -> SubwordEncoder {
        SubwordEncoderOptions::default()
            .with_separator(self.options.separator.clone())
            .init(table)
    }

    /// Count the subword tokens of `lines`.
    fn count_subwords<I>(
        encoder: &SubwordEncoder,
        lines: I,
    ) -> WMResult<WordCounts<u64>>
    where
        I: IntoIterator<Item = WMResult<String>>,
    {
        let mut counter: WordCounter<u64> = WordCounter::new();
        for line in lines {
            counter.update_from_tokens(encoder.segment_tokens(&line?));
        }
        Ok(counter.release())
    }

    /// Jointly train over in-memory corpora.
    ///
    /// ## Arguments
    /// * `corpora` - each corpus is a sequence of whitespace-tokenized lines.
    /// * `vocab_outputs` - either empty, or one vocabulary writer per corpus.
    ///
    /// ## Returns
    /// The learned table and the per-corpus subword vocabularies.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn train<L, S, W>(
        &self,
        corpora: &[L],
        vocab_outputs: &mut [W],
    ) -> WMResult<JointTrainingResults>
    where
        L: AsRef<[S]>,
        S: AsRef<str>,
        W: Write,
    {
        Self::check_corpus_count(corpora.len(), vocab_outputs.len())?;

        let mut combined: WordCounter<u64> = WordCounter::new();
        for corpus in corpora {
            let mut counter: WordCounter<u64> = WordCounter::new();
            counter.update_from_samples(corpus.as_ref());
            combined.merge_counts(counter.word_counts());
        }

        let table = self.learn_table(&combined);

        let mut persisted: Vec<u8> = Vec::new();
        write_merge_table(&table, &mut persisted)?;
        let table = read_merge_table(Cursor::new(persisted), None)?;

        let encoder = self.build_encoder(table);

        let mut corpus_vocabs = Vec::with_capacity(corpora.len());
        for corpus in corpora {
            let lines = corpus.as_ref().iter().map(|s| Ok(s.as_ref().to_string()));
            corpus_vocabs.push(Self::count_subwords(&encoder, lines)?);
        }

        for (vocab, writer) in corpus_vocabs.iter().zip(vocab_outputs.iter_mut()) {
            write_word_counts(vocab, writer)?;
        }

        Ok(JointTrainingResults {
            merge_table: (**encoder.table()).clone(),
            corpus_vocabs,
        })
    }

    /// Jointly train over corpus files.
    ///
    /// The learned table is written to `merges_output`, then re-loaded
    /// from that file to segment each corpus.
    ///
    /// ## Arguments
    /// * `inputs` - the corpus files.
    /// * `merges_output` - the merge-rules file to write.
    /// * `vocab_outputs` - either empty, or one vocabulary file per input.
    ///
    /// ## Returns
    /// The learned table and the per-corpus subword vocabularies.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn train_paths<P, Q>(
        &self,
        inputs: &[P],
        merges_output: Q,
        vocab_outputs: &[P],
    ) -> WMResult<JointTrainingResults>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        Self::check_corpus_count(inputs.len(), vocab_outputs.len())?;

        let mut combined: WordCounter<u64> = WordCounter::new();
        for input in inputs {
            log::info!("Counting words: {}", input.as_ref().display());
            let mut counter: WordCounter<u64> = WordCounter::new();
            counter.update_from_reader(BufReader::new(File::open(input)?))?;
            combined.merge_counts(counter.word_counts());
        }

        let table = self.learn_table(&combined);

        save_merge_table_path(&table, &merges_output)?;
        let table = load_merge_table_path(&merges_output, None)?;

        let encoder = self.build_encoder(table);

        let mut corpus_vocabs = Vec::with_capacity(inputs.len());
        for input in inputs {
            log::info!("Segmenting corpus: {}", input.as_ref().display());
            let reader = BufReader::new(File::open(input)?);
            let lines = reader.lines().map(|line| line.map_err(WordmergeError::from));
            corpus_vocabs.push(Self::count_subwords(&encoder, lines)?);
        }

        for (vocab, output) in corpus_vocabs.iter().zip(vocab_outputs) {
            log::info!("Writing vocabulary: {}", output.as_ref().display());
            save_word_counts_path(vocab, output)?;
        }

        Ok(JointTrainingResults {
            merge_table: (**encoder.table()).clone(),
            corpus_vocabs,
        })
    }
}

#[cfg(test)]
mod tests {
    use wordmerge::vocab::io::read_word_counts;

    use super::*;

    #[test]
    fn test_options() {
        let options = JointTrainerOptions::default();
        assert_eq!(options.num_merges, 10_000);
        assert_eq!(options.min_frequency, 2);
        assert_eq!(options.separator, "@@");
        assert!(!options.verbose);

        let options = options
            .with_num_merges(5)
            .with_min_frequency(1)
            .with_separator("__")
            .with_verbose(true);

        assert_eq!(
            options.learner_options(),
            MergeLearnerOptions::new(5)
                .with_min_frequency(1)
                .with_verbose(true)
        );
        assert_eq!(options.init().options.separator, "__");
    }

    #[test]
    fn test_corpus_count_mismatch() {
        let trainer = JointTrainer::default();
        let corpora = [vec!["low"], vec!["lower"]];
        let mut outputs = vec![Vec::<u8>::new()];

        let err = trainer.train(&corpora, &mut outputs).unwrap_err();
        assert!(matches!(
            err,
            WordmergeError::CorpusCountMismatch {
                inputs: 2,
                outputs: 1
            }
        ));
        assert!(outputs[0].is_empty());
    }

    #[test]
    fn test_train_in_memory() {
        let trainer = JointTrainerOptions::default().with_num_merges(1).init();

        let corpora = [vec!["low lower", "lowest"], vec!["low low", "newer"]];
        let mut outputs = vec![Vec::<u8>::new(), Vec::<u8>::new()];

        let results = trainer.train(&corpora, &mut outputs).unwrap();

        let pairs: Vec<_> = results
            .merge_table
            .pairs()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();
        assert_eq!(pairs, vec![("l", "o")]);

        let a = &results.corpus_vocabs[0];
        assert_eq!(a["lo@@"], 3);
        assert_eq!(a.values().sum::<u64>(), 11);

        let b = &results.corpus_vocabs[1];
        assert_eq!(b["lo@@"], 2);
        assert_eq!(b["e@@"], 2);
        assert_eq!(b.values().sum::<u64>(), 9);

        let written: WordCounts<u64> = read_word_counts(Cursor::new(&outputs[1])).unwrap();
        assert_eq!(&written, b);
    }

    #[test]
    fn test_tab_subwords_are_counted() {
        let trainer = JointTrainerOptions::default().with_num_merges(0).init();
        let corpora = [vec!["x b\t y"]];

        let results = trainer.train(&corpora, &mut Vec::<Vec<u8>>::new()).unwrap();

        let encoder = SubwordEncoderOptions::default().init(results.merge_table.clone());
        let tokens = encoder.segment_tokens("x b\t y");
        assert_eq!(tokens, vec!["x", "b@@", "\t", "y"]);

        let vocab = &results.corpus_vocabs[0];
        assert_eq!(vocab.values().sum::<u64>(), tokens.len() as u64);
        assert_eq!(vocab["\t"], 1);
        assert_eq!(vocab["b@@"], 1);
    }

    #[test]
    fn test_train_without_vocab_outputs() {
        let trainer = JointTrainer::default();
        let corpora = [vec!["a b"]];

        let results = trainer.train(&corpora, &mut Vec::<Vec<u8>>::new()).unwrap();

        // No pair reaches the default minimum frequency.
        assert!(results.merge_table.is_empty());
        assert_eq!(results.corpus_vocabs[0].len(), 2);
    }
}
