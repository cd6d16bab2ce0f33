use crate::funding::FundSetting;
use crate::hearts::HeartsSetting;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported configuration format {0:?}, expected .json, .yaml or .yml")]
    UnsupportedFormat(String),
}

/// Parameters of a voting cycle, as chosen by the operator.
///
/// ```yaml
/// total_funding: 100000
/// max_funding_per_proposal: 10000
/// hearts:
///   base_numerator: 4
///   base_denominator: 5
///   max_ratio: 0.8
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElectionConfig {
    #[serde(flatten)]
    pub funding: FundSetting,
    pub hearts: HeartsSetting,
}

impl ElectionConfig {
    /// Loads a configuration file, its format is picked from the extension.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();
        match extension.as_str() {
            "json" => Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?),
            "yaml" | "yml" => Ok(serde_yaml::from_reader(BufReader::new(File::open(path)?))?),
            _ => Err(Error::UnsupportedFormat(extension)),
        }
    }
}
