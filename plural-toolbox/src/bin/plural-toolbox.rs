use color_eyre::Report;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

pub mod cli;

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    cli::Cli::from_args().exec()
}
