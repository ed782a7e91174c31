use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use self::{
    analyze_scores::AnalyzeScoresArg, config::ConfigArg, evaluate::EvaluateArg,
    generate_matches::GenerateMatchesArg,
};

mod analyze_scores;
mod config;
mod evaluate;
mod generate_matches;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Evaluate the players of a finished match
    Evaluate(#[clap(flatten)] EvaluateArg),
    /// Generate random finished matches for calibration
    GenerateMatches(#[clap(flatten)] GenerateMatchesArg),
    /// Summarize score distributions over a set of matches
    AnalyzeScores(#[clap(flatten)] AnalyzeScoresArg),
    /// Write the default engine configuration
    Config(#[clap(flatten)] ConfigArg),
}

impl CommandArgs {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .format_target(false)
        .format_timestamp(None)
        .init();

    match &args.mode {
        Mode::Evaluate(arg) => evaluate::run(arg)?,
        Mode::GenerateMatches(arg) => generate_matches::run(arg)?,
        Mode::AnalyzeScores(arg) => analyze_scores::run(arg)?,
        Mode::Config(arg) => config::run(arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_flags() {
        let args = CommandArgs::parse_from(["riftscore", "config"]);
        assert_eq!(args.log_level(), LevelFilter::Info);
        let args = CommandArgs::parse_from(["riftscore", "-vv", "config"]);
        assert_eq!(args.log_level(), LevelFilter::Trace);
        let args = CommandArgs::parse_from(["riftscore", "config", "-v", "--quiet"]);
        assert_eq!(args.log_level(), LevelFilter::Error);
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory as _;
        CommandArgs::command().debug_assert();
    }
}
