pub mod config;
pub mod funding;
pub mod hearts;
pub mod scoring;
pub mod tally;
pub mod utils;
pub mod votes;
