use std::{
    collections::BTreeMap,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use riftscore_evaluator::{Grade, PerformanceEvaluator, PlayerPerformanceResult};
use riftscore_match::{MatchSnapshot, Role};
use riftscore_stats::{descriptive::DescriptiveStats, percentiles::Percentiles};
use serde::Serialize;

use crate::{
    command::evaluate::OutputFormat,
    util::{self, Output},
};

const PERCENTILE_POINTS: [f64; 5] = [10.0, 25.0, 50.0, 75.0, 90.0];

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct AnalyzeScoresArg {
    /// Matches file written by `generate-matches`
    #[arg(value_name = "MATCHES_FILE")]
    matches: PathBuf,
    /// Engine configuration file (defaults are used otherwise)
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "table")]
    format: OutputFormat,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreSummary {
    stats: DescriptiveStats,
    percentiles: Percentiles,
}

impl ScoreSummary {
    fn new(values: &[f64]) -> Option<Self> {
        let stats = DescriptiveStats::new(values.iter().copied())?;
        Some(Self {
            stats,
            percentiles: Percentiles::new(values, &PERCENTILE_POINTS),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GradeCount {
    grade: Grade,
    count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreAnalysis {
    analyzed_at: DateTime<Utc>,
    match_count: usize,
    skipped_matches: Vec<String>,
    player_count: usize,
    global: Option<ScoreSummary>,
    axes: BTreeMap<String, ScoreSummary>,
    roles: BTreeMap<Role, ScoreSummary>,
    grades: Vec<GradeCount>,
}

pub(crate) fn run(arg: &AnalyzeScoresArg) -> anyhow::Result<()> {
    let AnalyzeScoresArg {
        matches,
        config,
        format,
        output,
    } = arg;

    let config = util::load_config(config.as_deref())?;
    let evaluator = PerformanceEvaluator::with_default_axes(&config)
        .context("Failed to build the evaluator")?;
    let snapshots = util::read_matches_file(matches)?;
    eprintln!("Loaded {} matches from {}", snapshots.len(), matches.display());

    let analysis = analyze(&evaluator, &snapshots);
    eprintln!(
        "Evaluated {} players, skipped {} matches",
        analysis.player_count,
        analysis.skipped_matches.len()
    );

    let mut output = Output::from_output_path(output.clone())?;
    match format {
        OutputFormat::Json => output.write_json(&analysis)?,
        OutputFormat::Table => {
            write_report(&mut output, &analysis)
                .with_context(|| format!("Failed to write report to {}", output.display_path()))?;
            output.finish()?;
        }
    }
    Ok(())
}

fn analyze(evaluator: &PerformanceEvaluator, snapshots: &[MatchSnapshot]) -> ScoreAnalysis {
    let mut skipped_matches = vec![];
    let mut results: Vec<PlayerPerformanceResult> = vec![];
    for snapshot in snapshots {
        if !snapshot.completed {
            log::info!("skipping unfinished match {}", snapshot.match_id);
            skipped_matches.push(snapshot.match_id.clone());
            continue;
        }
        match evaluator.evaluate_all_parallel(snapshot) {
            Ok(players) => results.extend(players),
            Err(err) => {
                log::warn!("skipping match {}: {err}", snapshot.match_id);
                skipped_matches.push(snapshot.match_id.clone());
            }
        }
    }

    let global_scores = results
        .iter()
        .map(|r| f64::from(r.global_score))
        .collect::<Vec<_>>();

    let axes = evaluator
        .axis_names()
        .filter_map(|name| {
            let values = results
                .iter()
                .filter_map(|r| r.axes.get(name))
                .filter(|a| !a.is_failed())
                .map(|a| a.score())
                .collect::<Vec<_>>();
            ScoreSummary::new(&values).map(|s| (name.to_owned(), s))
        })
        .collect();

    let roles = Role::ALL
        .into_iter()
        .filter_map(|role| {
            let values = results
                .iter()
                .filter(|r| r.role == role)
                .map(|r| f64::from(r.global_score))
                .collect::<Vec<_>>();
            ScoreSummary::new(&values).map(|s| (role, s))
        })
        .collect();

    let grades = Grade::ALL
        .into_iter()
        .rev()
        .map(|grade| GradeCount {
            grade,
            count: results.iter().filter(|r| r.global_grade == grade).count(),
        })
        .collect();

    ScoreAnalysis {
        analyzed_at: Utc::now(),
        match_count: snapshots.len(),
        skipped_matches,
        player_count: results.len(),
        global: ScoreSummary::new(&global_scores),
        axes,
        roles,
        grades,
    }
}

fn write_summary_row<W>(out: &mut W, name: &str, summary: &ScoreSummary) -> io::Result<()>
where
    W: Write,
{
    let ScoreSummary { stats, percentiles } = summary;
    write!(
        out,
        "  {name:<16} {:>6} {:>6.1} {:>6.1} {:>6.1} {:>6.1}",
        stats.count, stats.mean, stats.std_dev, stats.min, stats.max
    )?;
    for (_, value) in percentiles.iter() {
        write!(out, " {value:>6.1}")?;
    }
    writeln!(out)
}

fn write_summary_header<W>(out: &mut W, title: &str) -> io::Result<()>
where
    W: Write,
{
    write!(
        out,
        "{title:<18} {:>6} {:>6} {:>6} {:>6} {:>6}",
        "n", "mean", "std", "min", "max"
    )?;
    for p in PERCENTILE_POINTS {
        write!(out, " {:>6}", format!("p{p}"))?;
    }
    writeln!(out)
}

fn write_report<W>(out: &mut W, analysis: &ScoreAnalysis) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        out,
        "{} matches, {} players ({} matches skipped)",
        analysis.match_count,
        analysis.player_count,
        analysis.skipped_matches.len()
    )?;
    writeln!(out)?;

    write_summary_header(out, "Global score")?;
    if let Some(global) = &analysis.global {
        write_summary_row(out, "all", global)?;
    }
    for (role, summary) in &analysis.roles {
        write_summary_row(out, role.as_str(), summary)?;
    }
    writeln!(out)?;

    write_summary_header(out, "Axis score")?;
    for (name, summary) in &analysis.axes {
        write_summary_row(out, name, summary)?;
    }
    writeln!(out)?;

    writeln!(out, "Grades")?;
    #[expect(clippy::cast_precision_loss)]
    let total = analysis.player_count.max(1) as f64;
    for GradeCount { grade, count } in &analysis.grades {
        #[expect(clippy::cast_precision_loss)]
        let share = *count as f64 / total * 100.0;
        writeln!(out, "  {grade:<2} {count:>6} {share:>5.1}%")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use riftscore_evaluator::EngineConfig;
    use riftscore_match::sample;

    use super::*;

    fn evaluator() -> PerformanceEvaluator {
        PerformanceEvaluator::with_default_axes(&EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_analyze_sample() {
        let analysis = analyze(&evaluator(), &[sample::finished_match()]);
        assert_eq!(analysis.match_count, 1);
        assert_eq!(analysis.player_count, 10);
        assert!(analysis.skipped_matches.is_empty());
        assert_eq!(analysis.global.as_ref().unwrap().stats.count, 10);
        assert_eq!(analysis.axes.len(), 5);
        assert_eq!(analysis.roles.len(), 5);
        assert_eq!(analysis.roles[&Role::Utility].stats.count, 2);
        let graded: usize = analysis.grades.iter().map(|g| g.count).sum();
        assert_eq!(graded, 10);
        assert_eq!(analysis.grades[0].grade, Grade::S);
    }

    #[test]
    fn test_invalid_and_unfinished_matches_are_skipped() {
        let mut broken = sample::finished_match();
        broken.match_id = "broken".to_owned();
        broken.teams.truncate(1);
        let mut remake = sample::finished_match();
        remake.match_id = "remake".to_owned();
        remake.completed = false;

        let analysis = analyze(&evaluator(), &[broken, sample::finished_match(), remake]);
        assert_eq!(analysis.player_count, 10);
        assert_eq!(analysis.skipped_matches, ["broken", "remake"]);
    }

    #[test]
    fn test_empty_input() {
        let analysis = analyze(&evaluator(), &[]);
        assert!(analysis.global.is_none());
        assert!(analysis.axes.is_empty());

        let mut buf = Vec::new();
        write_report(&mut buf, &analysis).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("0 matches, 0 players"));
    }

    #[test]
    fn test_report_lists_roles_and_axes() {
        let analysis = analyze(&evaluator(), &[sample::finished_match()]);
        let mut buf = Vec::new();
        write_report(&mut buf, &analysis).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("UTILITY"));
        assert!(text.contains("TeamImpact"));
        assert!(text.contains("p50"));
    }
}
