use super::read_json;
use color_eyre::Report;
use groups_lib::{Groups, VoterId};
use plural_toolbox::tally::score_proposals;
use plural_toolbox::utils::csv::dump_data_to_csv;
use plural_toolbox::votes::{VoteCount, VoteRecord};
use std::collections::BTreeSet;
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::info;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct Score {
    /// Path to a json encoded map from group id to the list of its members
    #[structopt(long)]
    groups: PathBuf,

    /// Path to a json encoded list of `VoteRecord`, in the order they were cast.
    /// Only the latest vote of a voter on a proposal is considered.
    #[structopt(long)]
    votes: PathBuf,

    /// Path to a json encoded list of the voters registered for this cycle.
    /// Defaults to every member of a group.
    #[structopt(long)]
    participants: Option<PathBuf>,

    /// Results file output path, stdout if missing
    #[structopt(long)]
    output: Option<PathBuf>,
}

impl Score {
    pub fn exec(self) -> Result<(), Report> {
        let Self {
            groups,
            votes,
            participants,
            output,
        } = self;

        let groups: Groups = read_json(&groups)?;
        let votes = VoteCount::from_records(read_json::<Vec<VoteRecord>>(&votes)?);
        let participants: BTreeSet<VoterId> = match participants {
            Some(path) => read_json(&path)?,
            None => groups.voters().into_iter().cloned().collect(),
        };

        let scores = score_proposals(&groups, &votes, &participants)?;
        info!(
            proposals = scores.len(),
            groups = groups.len(),
            participants = participants.len(),
            "proposals scored"
        );
        dump_data_to_csv(&scores, output.as_deref())?;
        Ok(())
    }
}
