use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ph",
    about = "Partition health: merge per-dimension status range reports",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge the range lists of a document into one range list
    Merge(MergeArgs),
    /// Combine status names into one canonical status
    Statuses(StatusesArgs),
    /// Show the merged status of a single key
    Lookup(LookupArgs),
}

#[derive(Args)]
pub struct MergeOptions {
    /// TOML merge configuration
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Override how keys covered by only some lists are treated
    #[arg(long)]
    pub partial_coverage: Option<CoverageArg>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum CoverageArg {
    MarkMissing,
    Ignore,
}

#[derive(Args)]
pub struct MergeArgs {
    /// JSON document with `keys` and `range_lists`
    pub document: PathBuf,
    #[command(flatten)]
    pub options: MergeOptions,
}

#[derive(Args)]
pub struct StatusesArgs {
    /// Status or flag names, e.g. MATERIALIZED missing
    pub statuses: Vec<String>,
}

#[derive(Args)]
pub struct LookupArgs {
    /// JSON document with `keys` and `range_lists`
    pub document: PathBuf,
    /// Partition key to look up
    pub key: String,
    #[command(flatten)]
    pub options: MergeOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_merge() {
        let cli = Cli::try_parse_from(["ph", "merge", "health.json"]).unwrap();
        if let Command::Merge(args) = cli.command {
            assert_eq!(args.document, PathBuf::from("health.json"));
            assert!(args.options.config.is_none());
            assert!(args.options.partial_coverage.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_merge_with_overrides() {
        let cli = Cli::try_parse_from([
            "ph", "merge", "health.json", "--config", "ph.toml", "--partial-coverage", "ignore",
        ])
        .unwrap();
        if let Command::Merge(args) = cli.command {
            assert_eq!(args.options.config, Some(PathBuf::from("ph.toml")));
            assert_eq!(args.options.partial_coverage, Some(CoverageArg::Ignore));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_statuses() {
        let cli = Cli::try_parse_from(["ph", "statuses", "MATERIALIZED", "missing"]).unwrap();
        if let Command::Statuses(args) = cli.command {
            assert_eq!(args.statuses, vec!["MATERIALIZED", "missing"]);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_statuses_empty() {
        let cli = Cli::try_parse_from(["ph", "statuses"]).unwrap();
        assert!(matches!(cli.command, Command::Statuses(_)));
    }

    #[test]
    fn parse_lookup() {
        let cli = Cli::try_parse_from(["ph", "lookup", "health.json", "2024-01-02"]).unwrap();
        if let Command::Lookup(args) = cli.command {
            assert_eq!(args.key, "2024-01-02");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn lookup_positionals_have_help() {
        use clap::CommandFactory;

        let cli = Cli::command();
        let lookup = cli.find_subcommand("lookup").unwrap();
        for name in ["document", "key"] {
            let arg = lookup.get_arguments().find(|a| a.get_id() == name).unwrap();
            assert!(arg.get_help().is_some(), "{name} has no help text");
        }
    }

    #[test]
    fn parse_rejects_unknown_coverage() {
        assert!(Cli::try_parse_from(["ph", "merge", "d.json", "--partial-coverage", "maybe"]).is_err());
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["ph", "--verbose", "statuses"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["ph", "--format", "json", "statuses"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
