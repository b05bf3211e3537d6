use std::path::Path;

use anyhow::Result;

use sales_cli::pipeline::{load_options, run_all, run_bronze, run_gold, run_silver};
use sales_cli::types::{BronzeResult, GoldResult, RunResult, SilverResult};

use crate::cli::{BronzeArgs, RunArgs};

pub fn bronze(warehouse: &Path, args: &BronzeArgs) -> Result<BronzeResult> {
    run_bronze(warehouse, &args.sources)
}

pub fn silver(warehouse: &Path, config: Option<&Path>) -> Result<SilverResult> {
    let options = load_options(config)?;
    run_silver(warehouse, &options)
}

pub fn gold(warehouse: &Path) -> Result<GoldResult> {
    run_gold(warehouse)
}

pub fn run(warehouse: &Path, config: Option<&Path>, args: &RunArgs) -> Result<RunResult> {
    let options = load_options(config)?;
    run_all(warehouse, &args.sources, &options)
}
