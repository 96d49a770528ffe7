use std::io::{BufRead, Write};

use wordmerge::{merges::write_merge_table, vocab::io::read_word_counts};
use wordmerge_training::{DEFAULT_MIN_FREQUENCY, DEFAULT_NUM_MERGES, MergeLearner, MergeLearnerOptions};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the learn command.
#[derive(clap::Args, Debug)]
pub struct LearnArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Number of merge rules to learn.
    #[arg(short, long, default_value_t = DEFAULT_NUM_MERGES)]
    symbols: usize,

    /// Stop learning when the most frequent pair is less frequent than this.
    #[arg(long, default_value_t = DEFAULT_MIN_FREQUENCY)]
    min_frequency: u64,

    /// The input is a "<word> <frequency>" vocabulary, not text.
    #[arg(long)]
    dict_input: bool,
}

impl LearnArgs {
    /// Run the learn command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let learner: MergeLearner = MergeLearnerOptions::new(self.symbols)
            .with_min_frequency(self.min_frequency)
            .with_verbose(self.logging.is_verbose())
            .init();

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }

        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_learn(reader, &mut writer, learner, self.dict_input)?;

        writer.flush()?;
        Ok(())
    }
}

fn run_learn<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    mut learner: MergeLearner,
    dict_input: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if dict_input {
        learner.update_from_word_counts(&read_word_counts(reader)?);
    } else {
        learner.update_from_reader(reader)?;
    }
    log::info!("Counted {} distinct words", learner.word_counter.len());

    let table = learner.learn();
    write_merge_table(&table, writer)?;
    Ok(())
}
