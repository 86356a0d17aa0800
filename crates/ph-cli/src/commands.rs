use anyhow::{bail, Context};
use colored::{ColoredString, Colorize};
use ph_merge::{merge_statuses, MergeConfig, PartialCoverage, RangeMerger};
use ph_types::{PartitionStatus, RangeList};
use tracing::debug;

use crate::cli::*;
use crate::document::MergeDocument;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let output = match cli.command {
        Command::Merge(args) => cmd_merge(args, cli.format)?,
        Command::Statuses(args) => cmd_statuses(args, cli.format)?,
        Command::Lookup(args) => cmd_lookup(args, cli.format)?,
    };
    println!("{output}");
    Ok(())
}

fn cmd_merge(args: MergeArgs, format: OutputFormat) -> anyhow::Result<String> {
    let merger = build_merger(&args.options)?;
    let doc = MergeDocument::load(&args.document)?;
    let merged = doc.merge(&merger)?;
    render_ranges(&merged, format)
}

fn cmd_statuses(args: StatusesArgs, format: OutputFormat) -> anyhow::Result<String> {
    let statuses = args
        .statuses
        .iter()
        .map(|name| name.parse::<PartitionStatus>())
        .collect::<Result<Vec<_>, _>>()?;
    let merged = merge_statuses(statuses);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&merged)?),
        OutputFormat::Text => Ok(paint(merged).to_string()),
    }
}

fn cmd_lookup(args: LookupArgs, format: OutputFormat) -> anyhow::Result<String> {
    let merger = build_merger(&args.options)?;
    let doc = MergeDocument::load(&args.document)?;
    let Some(idx) = doc.keys.position(&args.key) else {
        bail!("key {:?} is not in the key space", args.key);
    };
    let status = doc.merge(&merger)?.status_at(idx);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&status)?),
        OutputFormat::Text => Ok(match status {
            Some(status) => format!("{} {}", args.key.bold(), paint(status)),
            None => format!("{} {}", args.key.bold(), "no observation".dimmed()),
        }),
    }
}

fn build_merger(options: &MergeOptions) -> anyhow::Result<RangeMerger> {
    let mut config = match &options.config {
        Some(path) => MergeConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MergeConfig::default(),
    };
    if let Some(coverage) = options.partial_coverage {
        config.partial_coverage = match coverage {
            CoverageArg::MarkMissing => PartialCoverage::MarkMissing,
            CoverageArg::Ignore => PartialCoverage::Ignore,
        };
    }
    debug!(?config, "merge configuration");
    Ok(RangeMerger::new(config))
}

fn render_ranges(ranges: &RangeList, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(ranges)?),
        OutputFormat::Text if ranges.is_empty() => Ok("No observations.".dimmed().to_string()),
        OutputFormat::Text => Ok(ranges
            .iter()
            .map(|range| {
                let span = if range.start.idx == range.end.idx {
                    range.start.key.clone()
                } else {
                    format!("{} → {}", range.start.key, range.end.key)
                };
                format!("{}  {} ({})", paint(range.value), span.bold(), range.len())
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn paint(status: PartitionStatus) -> ColoredString {
    let label = status.as_str();
    match status {
        PartitionStatus::Materialized => label.green(),
        PartitionStatus::Missing => label.dimmed(),
        PartitionStatus::Failed => label.red(),
        PartitionStatus::MaterializedMissing => label.yellow(),
        PartitionStatus::MaterializedFailed => label.magenta(),
    }
}
