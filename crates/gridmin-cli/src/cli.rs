use crate::utils::parser::parse_axis_range;
use clap::{Args, Parser, Subcommand};
use gridmin::core::grid::AxisSpec;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "gridmin",
    author = "gridmin developers",
    version,
    about = "gridmin - locate well-separated local minima of sampled 2D scalar fields.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Locate the lowest well-separated minima of a gridded field stored in an .npz archive.
    Locate(LocateArgs),
    /// Evaluate a trial surface on a regular mesh and write it as an .npz archive.
    Sample(SampleArgs),
    /// List the available trial surfaces.
    Surfaces,
}

/// Arguments for the `locate` subcommand.
#[derive(Args, Debug)]
pub struct LocateArgs {
    /// Path to the input archive holding the `x`, `y` and `z` arrays.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Write the located minima as CSV to this path.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the number of minima to locate.
    #[arg(short, long, value_name = "INT")]
    pub num_minima: Option<usize>,

    #[command(flatten)]
    pub exclusion: ExclusionArgs,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S extraction.num-minima=5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Mutually exclusive overrides for the exclusion policy.
#[derive(Args, Debug, Default)]
#[group(required = false, multiple = false)]
pub struct ExclusionArgs {
    /// Exclude points closer than this distance to each located minimum.
    #[arg(short = 'r', long, value_name = "FLOAT")]
    pub exclusion_radius: Option<f64>,

    /// Exclude points whose value lies within this band of each located minimum.
    #[arg(short = 'b', long, value_name = "FLOAT")]
    pub value_band: Option<f64>,

    /// Disable exclusion and report the lowest samples directly.
    #[arg(long)]
    pub no_exclusion: bool,
}

/// Arguments for the `sample` subcommand.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Name of the trial surface (see `gridmin surfaces`).
    #[arg(value_name = "SURFACE")]
    pub surface: String,

    /// Path for the output archive.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Sampling of the x axis. Defaults to the surface's domain with 400 points.
    #[arg(long, value_name = "START:STOP:NUM", value_parser = parse_axis_range, allow_hyphen_values = true)]
    pub x_range: Option<AxisSpec>,

    /// Sampling of the y axis. Defaults to the surface's domain with 400 points.
    #[arg(long, value_name = "START:STOP:NUM", value_parser = parse_axis_range, allow_hyphen_values = true)]
    pub y_range: Option<AxisSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn locate_parses_overrides_and_global_flags() {
        let cli = Cli::try_parse_from([
            "gridmin", "-vv", "locate", "-i", "field.npz", "-n", "3", "-r", "0.25", "-S",
            "extraction.value-band=2.0", "-j", "2",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.threads, Some(2));
        let Commands::Locate(args) = cli.command else {
            panic!("expected the locate subcommand");
        };
        assert_eq!(args.input, PathBuf::from("field.npz"));
        assert_eq!(args.num_minima, Some(3));
        assert_eq!(args.exclusion.exclusion_radius, Some(0.25));
        assert_eq!(args.set_values, vec!["extraction.value-band=2.0".to_string()]);
    }

    #[test]
    fn exclusion_flags_are_mutually_exclusive() {
        let result = Cli::try_parse_from([
            "gridmin", "locate", "-i", "field.npz", "-r", "0.1", "--no-exclusion",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn sample_accepts_negative_axis_ranges() {
        let cli = Cli::try_parse_from([
            "gridmin",
            "sample",
            "himmelblau",
            "-o",
            "out.npz",
            "--x-range",
            "-5:5:11",
        ])
        .unwrap();

        let Commands::Sample(args) = cli.command else {
            panic!("expected the sample subcommand");
        };
        assert_eq!(args.surface, "himmelblau");
        assert_eq!(args.x_range, Some(AxisSpec::new(-5.0, 5.0, 11).unwrap()));
        assert_eq!(args.y_range, None);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["gridmin", "-q", "-v", "surfaces"]).is_err());
    }
}
