use color_eyre::Report;
use plural_toolbox::config::ElectionConfig;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct Hearts {
    /// Election configuration file (.yaml, .yml or .json)
    #[structopt(long)]
    config: PathBuf,

    /// Number of proposals competing in this cycle
    #[structopt(long)]
    proposals_count: usize,
}

impl Hearts {
    pub fn exec(self) -> Result<(), Report> {
        let config = ElectionConfig::load(&self.config)?;
        println!("{}", config.hearts.available_hearts(self.proposals_count));
        Ok(())
    }
}
