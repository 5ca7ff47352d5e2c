use std::path::PathBuf;

use rxlink_model::SourceCoverage;

#[derive(Debug)]
pub struct RunSummary {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub backup: Option<PathBuf>,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub coverage: SourceCoverage,
}
