use super::read_json;
use color_eyre::{eyre::eyre, Report};
use plural_toolbox::config::ElectionConfig;
use plural_toolbox::funding::{Funds, ProposalFunding, ProposalId};
use plural_toolbox::utils::csv::dump_data_to_csv;
use serde::Serialize;
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::info;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct Allocate {
    /// Election configuration file (.yaml, .yml or .json)
    #[structopt(long)]
    config: PathBuf,

    /// Path to a json encoded list of proposals with their score and funding request
    #[structopt(long)]
    proposals: PathBuf,

    /// Results file output path, stdout if missing
    #[structopt(long)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct AllocationRow<'a> {
    proposal_id: &'a ProposalId,
    allocated_funding: Funds,
}

impl Allocate {
    pub fn exec(self) -> Result<(), Report> {
        let Self {
            config,
            proposals,
            output,
        } = self;

        let config = ElectionConfig::load(&config)?;
        let proposals: Vec<ProposalFunding> = read_json(&proposals)?;
        let allocation = config.funding.allocate(&proposals)?;

        if allocation.total_allocated() + allocation.remaining_funding
            != config.funding.total_funding
        {
            return Err(eyre!("allocated funds do not add up to the funding pool"));
        }
        info!(
            allocated = allocation.total_allocated(),
            remaining = allocation.remaining_funding,
            "funding allocated"
        );

        let rows = allocation
            .allocated_funding
            .iter()
            .map(|(proposal_id, allocated_funding)| AllocationRow {
                proposal_id,
                allocated_funding: *allocated_funding,
            })
            .collect::<Vec<_>>();
        dump_data_to_csv(&rows, output.as_deref())?;
        Ok(())
    }
}
