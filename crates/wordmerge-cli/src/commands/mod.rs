mod apply;
mod learn;
mod learn_joint;
mod vocab;

/// Subcommands for wordmerge
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Segment text with learned BPE merge rules.
    Apply(apply::ApplyArgs),

    /// Learn BPE merge rules from one corpus.
    Learn(learn::LearnArgs),

    /// Learn shared BPE merge rules over several corpora,
    /// and write one subword vocabulary per corpus.
    LearnJoint(learn_joint::LearnJointArgs),

    /// Count the tokens of a corpus.
    Vocab(vocab::VocabArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Apply(cmd) => cmd.run(),
            Commands::Learn(cmd) => cmd.run(),
            Commands::LearnJoint(cmd) => cmd.run(),
            Commands::Vocab(cmd) => cmd.run(),
        }
    }
}
