use std::io::{BufRead, Write};

use wordmerge::vocab::io::write_word_counts;
use wordmerge_training::WordCounter;

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl VocabArgs {
    /// Run the vocab command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_vocab(reader, &mut writer)?;

        writer.flush()?;
        Ok(())
    }
}

fn run_vocab<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut counter: WordCounter = WordCounter::new();
    counter.update_from_reader(reader)?;
    log::info!("Counted {} distinct tokens", counter.len());

    write_word_counts(counter.word_counts(), writer)?;
    Ok(())
}
