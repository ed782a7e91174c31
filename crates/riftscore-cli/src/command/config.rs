use std::path::PathBuf;

use riftscore_evaluator::EngineConfig;

use crate::util::Output;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ConfigArg {
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ConfigArg) -> anyhow::Result<()> {
    let ConfigArg { output } = arg;
    let config = EngineConfig::default();
    Output::save_json(&config, output.clone())?;
    if let Some(path) = output {
        eprintln!("Default configuration written to {}", path.display());
    }
    Ok(())
}
