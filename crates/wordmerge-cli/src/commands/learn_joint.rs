use wordmerge_training::{DEFAULT_MIN_FREQUENCY, DEFAULT_NUM_MERGES, JointTrainerOptions};

use crate::logging::LogArgs;

/// Args for the learn-joint command.
#[derive(clap::Args, Debug)]
pub struct LearnJointArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    /// Input corpora; whitespace-tokenized text.
    #[arg(short, long = "input", num_args = 1.., required = true)]
    inputs: Vec<String>,

    /// Output file for the merge rules.
    #[arg(short, long)]
    output: String,

    /// Number of merge rules to learn.
    #[arg(short, long, default_value_t = DEFAULT_NUM_MERGES)]
    symbols: usize,

    /// Separator between non-final subword units.
    #[arg(long, default_value = "@@")]
    separator: String,

    /// Vocabulary output files; one per input corpus.
    #[arg(long = "write-vocabulary", num_args = 1..)]
    vocab_outputs: Vec<String>,

    /// Stop learning when the most frequent pair is less frequent than this.
    #[arg(long, default_value_t = DEFAULT_MIN_FREQUENCY)]
    min_frequency: u64,
}

impl LearnJointArgs {
    /// Run the learn-joint command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let trainer = JointTrainerOptions::default()
            .with_num_merges(self.symbols)
            .with_min_frequency(self.min_frequency)
            .with_separator(self.separator.clone())
            .with_verbose(self.logging.is_verbose())
            .init();

        let results = trainer.train_paths(&self.inputs, &self.output, &self.vocab_outputs)?;

        log::info!(
            "Learned {} merge rules: {}",
            results.merge_table.len(),
            self.output
        );
        for (path, vocab) in self.vocab_outputs.iter().zip(&results.corpus_vocabs) {
            log::info!("Vocabulary of {} subwords: {}", vocab.len(), path);
        }

        Ok(())
    }
}
