use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Lead file used when none is given on the command line
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Directory for timestamped exports when `--export` has no path
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Overrides for the built-in scoring rules
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}
