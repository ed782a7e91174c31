use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context as _, bail};
use chrono::{DateTime, Utc};
use riftscore_evaluator::{PerformanceEvaluator, PlayerPerformanceResult};
use riftscore_match::{MatchSnapshot, Participant};
use serde::Serialize;

use crate::{
    provider,
    util::{self, Output},
};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct EvaluateArg {
    /// Match id to evaluate (`sample` is always available)
    #[arg(value_name = "MATCH_ID")]
    match_id: String,
    /// Directory holding `<MATCH_ID>.json` snapshots
    #[arg(long)]
    match_dir: Option<PathBuf>,
    /// Only evaluate the player with this puuid or display name
    #[arg(long)]
    player: Option<String>,
    /// Engine configuration file (defaults are used otherwise)
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "table")]
    format: OutputFormat,
    /// Evaluate participants on parallel threads
    #[arg(long)]
    parallel: bool,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EvaluationReport<'a> {
    match_id: &'a str,
    duration_secs: u32,
    evaluated_at: DateTime<Utc>,
    players: &'a [PlayerPerformanceResult],
}

pub(crate) fn run(arg: &EvaluateArg) -> anyhow::Result<()> {
    let EvaluateArg {
        match_id,
        match_dir,
        player,
        config,
        format,
        parallel,
        output,
    } = arg;

    let config = util::load_config(config.as_deref())?;
    let evaluator = PerformanceEvaluator::with_default_axes(&config)
        .context("Failed to build the evaluator")?;

    let Some(snapshot) = provider::find_finished_match(match_id, match_dir.as_deref())? else {
        bail!("Match {match_id} is unknown or has not finished yet");
    };
    log::info!(
        "evaluating match {} ({} participants, {}s)",
        snapshot.match_id,
        snapshot.participants.len(),
        snapshot.duration_secs
    );

    let results = match player {
        Some(query) => {
            let participant = find_player(&snapshot, query)?;
            vec![evaluator.evaluate(&snapshot, participant)?]
        }
        None if *parallel => evaluator.evaluate_all_parallel(&snapshot)?,
        None => evaluator.evaluate_all(&snapshot)?,
    };

    let mut output = Output::from_output_path(output.clone())?;
    match format {
        OutputFormat::Json => output.write_json(EvaluationReport {
            match_id: &snapshot.match_id,
            duration_secs: snapshot.duration_secs,
            evaluated_at: Utc::now(),
            players: &results,
        })?,
        OutputFormat::Table => {
            let axis_names = evaluator.axis_names().collect::<Vec<_>>();
            write_table(&mut output, &snapshot, &results, &axis_names)
                .with_context(|| format!("Failed to write table to {}", output.display_path()))?;
            if player.is_some() {
                for result in &results {
                    write_breakdown(&mut output, result).with_context(|| {
                        format!("Failed to write breakdown to {}", output.display_path())
                    })?;
                }
            }
            output.finish()?;
        }
    }
    Ok(())
}

/// Looks a player up by puuid first, then by display name.
fn find_player<'a>(snapshot: &'a MatchSnapshot, query: &str) -> anyhow::Result<&'a Participant> {
    let query = query.trim();
    if let Some(p) = snapshot.participant_by_puuid(query) {
        return Ok(p);
    }
    let mut by_name = snapshot
        .participants
        .iter()
        .filter(|p| p.display_name.eq_ignore_ascii_case(query));
    match (by_name.next(), by_name.next()) {
        (Some(p), None) => Ok(p),
        (Some(_), Some(_)) => bail!("Display name {query:?} is ambiguous, use a puuid"),
        (None, _) => bail!(
            "Player {query:?} is not part of match {}",
            snapshot.match_id
        ),
    }
}

fn write_table<W>(
    out: &mut W,
    snapshot: &MatchSnapshot,
    results: &[PlayerPerformanceResult],
    axis_names: &[&str],
) -> io::Result<()>
where
    W: Write,
{
    write!(
        out,
        "{:<5} {:<8} {:<16} {:<12} {:>5} {:<5}",
        "Team", "Role", "Player", "Champion", "Score", "Grade"
    )?;
    for name in axis_names {
        write!(out, " {name:>w$}", w = name.len().max(6))?;
    }
    writeln!(out)?;

    for result in results {
        let champion = snapshot
            .participant_by_puuid(&result.puuid)
            .map_or("", |p| p.champion_name.as_str());
        write!(
            out,
            "{:<5} {:<8} {:<16} {:<12} {:>5} {:<5}",
            result.team_id,
            result.role.as_str(),
            result.display_name,
            champion,
            result.global_score,
            result.global_grade,
        )?;
        for name in axis_names {
            let w = name.len().max(6);
            match result.axes.get(name) {
                Some(score) if !score.is_failed() => write!(out, " {:>w$.1}", score.score())?,
                _ => write!(out, " {:>w$}", "err")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_breakdown<W>(out: &mut W, result: &PlayerPerformanceResult) -> io::Result<()>
where
    W: Write,
{
    writeln!(out)?;
    writeln!(
        out,
        "{} ({}) - {} {}",
        result.display_name,
        result.role.as_str(),
        result.global_score,
        result.global_grade
    )?;
    for axis in &result.axes {
        if let Some(error) = axis.error() {
            writeln!(out, "  {}: failed ({error})", axis.axis())?;
            continue;
        }
        writeln!(out, "  {}: {:.1} ({})", axis.axis(), axis.score(), axis.grade())?;
        for item in axis.breakdown() {
            write!(out, "    {:<20} {:>10} {:>+8.2}", item.label, item.value, item.points)?;
            if let Some(note) = &item.note {
                write!(out, "  {note}")?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}
