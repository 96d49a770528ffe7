use std::io::{BufRead, Write};

use wordmerge::{
    encoders::{LineSegmenter, SubwordEncoderOptions},
    merges::load_merge_table_path,
    rayon::ParallelRayonSegmenter,
    vocab::io::load_target_vocab_path,
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the apply command.
#[derive(clap::Args, Debug)]
pub struct ApplyArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Merge-rules file, as written by `learn` or `learn-joint`.
    #[arg(short, long)]
    codes: String,

    /// Use only the first N merge rules; -1 uses all of them.
    #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
    merges: i64,

    /// Separator between non-final subword units.
    #[arg(short, long, default_value = "@@")]
    separator: String,

    /// Vocabulary file; merges producing out-of-vocabulary subwords are reverted.
    #[arg(long, default_value = None)]
    vocabulary: Option<String>,

    /// Vocabulary entries below this frequency are out-of-vocabulary.
    #[arg(long, default_value = None)]
    vocabulary_threshold: Option<u64>,

    /// Glossaries; words matching any glossary are never segmented.
    #[arg(long, num_args = 1..)]
    glossaries: Vec<String>,

    /// Lines per parallel batch.
    #[arg(long, default_value_t = 1000)]
    batch_size: usize,
}

impl ApplyArgs {
    /// The merge limit; ``None`` for all rules.
    fn merge_limit(&self) -> Option<usize> {
        usize::try_from(self.merges).ok()
    }

    /// Run the apply command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let table = load_merge_table_path(&self.codes, self.merge_limit())?;
        log::info!("Loaded {} merge rules from {}", table.len(), self.codes);

        let mut options = SubwordEncoderOptions::default()
            .with_separator(self.separator.clone())
            .with_glossaries(self.glossaries.iter().cloned());

        if let Some(path) = &self.vocabulary {
            let vocab = load_target_vocab_path(path, self.vocabulary_threshold)?;
            log::info!("Loaded {} vocabulary entries from {}", vocab.len(), path);
            options.set_target_vocab(vocab);
        }

        let segmenter = ParallelRayonSegmenter::new(options.init(table));

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_apply(
            &mut reader,
            &mut writer,
            &segmenter,
            self.batch_size.max(1),
        )?;

        writer.flush()?;
        Ok(())
    }
}

fn run_apply<S: LineSegmenter>(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    segmenter: &S,
    batch_size: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut batch: Vec<String> = Vec::with_capacity(batch_size);

    loop {
        // Read lines, but keep the end-of-line characters.
        let mut line = String::new();
        let done = reader.read_line(&mut line)? == 0;
        if !done {
            batch.push(line);
        }

        if batch.len() >= batch_size || (done && !batch.is_empty()) {
            for segmented in segmenter.segment_batch(&batch) {
                writer.write_all(segmented.as_bytes())?;
            }
            batch.clear();
        }

        if done {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use wordmerge::{MergeTable, MergeFormatVersion};

    use super::*;

    #[test]
    fn test_run_apply() {
        let table = MergeTable::from_pairs(
            MergeFormatVersion::V0_2,
            [("l", "o"), ("lo", "w</w>")]
                .into_iter()
                .map(|(a, b)| (a.into(), b.into())),
        );
        let segmenter = ParallelRayonSegmenter::new(SubwordEncoderOptions::default().init(table));

        let text = "low lower\n\n  slow \nlow";
        let mut reader = Cursor::new(text);
        let mut out: Vec<u8> = Vec::new();

        run_apply(&mut reader, &mut out, &segmenter, 2).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "low lo@@ w@@ e@@ r\n\n  s@@ low \nlow"
        );
    }
}
