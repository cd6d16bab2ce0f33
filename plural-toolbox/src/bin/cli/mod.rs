mod allocate;
mod hearts;
mod score;

use color_eyre::Report;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub enum Cli {
    /// Compute plurality and quadratic scores of every proposal
    Score(score::Score),
    /// Distribute the funding pool among the proposals by score
    Allocate(allocate::Allocate),
    /// Number of hearts every participant can distribute
    Hearts(hearts::Hearts),
}

impl Cli {
    pub fn exec(self) -> Result<(), Report> {
        match self {
            Self::Score(cmd) => cmd.exec(),
            Self::Allocate(cmd) => cmd.exec(),
            Self::Hearts(cmd) => cmd.exec(),
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Report> {
    Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
}
