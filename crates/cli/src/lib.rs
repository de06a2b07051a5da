// crates/cli/src/lib.rs
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use logging::{DebugFlag, InfoFlag, LogFormat};
use ndb_compat::{
    Classifier, CompatConfig, CompatError, CompatibilityTier, OWN_VERSION, OutputFormat, Result,
    assess, parse_versions, with_config,
};
use ndb_version::VersionNumber;

pub mod print;
pub mod version;

pub use version::{PROGRAM_NAME, version_banner};

/// Exit code for malformed versions and I/O failures.
pub const EXIT_ERROR: i32 = 1;
/// Exit code for usage errors reported by the argument parser.
pub const EXIT_USAGE: i32 = 2;
/// Exit code when a peer classifies below `--min-tier`.
pub const EXIT_BELOW_MIN_TIER: i32 = 3;

/// Inspect node versions and their copy-fragment protocol tier.
#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME, disable_version_flag = true)]
pub struct Cli {
    /// increase logging verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
    /// format of diagnostics on stderr
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,
    /// enable info-level logging for the given areas
    #[arg(long, value_enum, value_delimiter = ',', global = true)]
    pub info: Vec<InfoFlag>,
    /// enable trace-level logging for the given areas
    #[arg(long, value_enum, value_delimiter = ',', global = true)]
    pub debug: Vec<DebugFlag>,
    /// also append log records to FILE
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
    /// template for --log-file records, or "json"
    #[arg(long, value_name = "FMT", requires = "log_file", global = true)]
    pub log_file_format: Option<String>,
    /// disable colored diagnostics
    #[arg(long, global = true)]
    pub no_color: bool,
    /// prefix diagnostics with a timestamp
    #[arg(long, global = true)]
    pub timestamps: bool,
    /// format of command results on stdout
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,
    /// print version information and exit
    #[arg(short = 'V', long)]
    pub version: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify peers into copy-fragment protocol tiers
    Classify {
        /// local build version used for the exact-match rule
        #[arg(long, env = "NDB_COMPAT_OWN_VERSION")]
        own: Option<String>,
        /// exit with status 3 if any peer is below this tier (0, 1 or 2)
        #[arg(long, value_name = "TIER")]
        min_tier: Option<u8>,
        /// peer versions: M.m.b, ndb-M.m.b, 0xHEX or decimal
        #[arg(required = true)]
        peers: Vec<String>,
    },
    /// Show the fields of packed versions
    Decode {
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Pack a version from its fields
    Encode { major: u8, minor: u8, build: u8 },
    /// List the feature gates a version satisfies
    Features { version: String },
}

pub fn cli_command() -> clap::Command {
    Cli::command()
}

/// Outcome of a successful command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    BelowMinTier,
}

impl Outcome {
    pub const fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::BelowMinTier => EXIT_BELOW_MIN_TIER,
        }
    }
}

/// Translates global options into a [`CompatConfig`].
pub fn config_from_cli(cli: &Cli) -> Result<CompatConfig> {
    let own = match &cli.command {
        Some(Commands::Classify { own: Some(own), .. }) => own.parse::<VersionNumber>()?,
        _ => OWN_VERSION,
    };
    let log_file = cli
        .log_file
        .clone()
        .map(|path| (path, cli.log_file_format.clone()));
    Ok(CompatConfig::builder()
        .log_format(cli.log_format)
        .verbose(cli.verbose)
        .info(cli.info.clone())
        .debug(cli.debug.clone())
        .quiet(cli.quiet)
        .log_file(log_file)
        .colored(!cli.no_color)
        .timestamps(cli.timestamps)
        .own(own)
        .output(cli.output)
        .build())
}

fn run_command<W: Write>(command: &Commands, cfg: &CompatConfig, out: &mut W) -> Result<Outcome> {
    match command {
        Commands::Classify {
            min_tier, peers, ..
        } => {
            let min_tier = min_tier.map(CompatibilityTier::try_from).transpose()?;
            let peers = parse_versions(peers)?;
            let classifier = Classifier::new(cfg.own);
            let reports: Vec<_> = peers.iter().map(|&p| assess(p, &classifier)).collect();
            print::print_reports(out, &reports, cfg.output)?;
            match min_tier {
                Some(min) if reports.iter().any(|r| r.tier < min) => {
                    tracing::error!("at least one peer is below tier {min}");
                    Ok(Outcome::BelowMinTier)
                }
                _ => Ok(Outcome::Success),
            }
        }
        Commands::Decode { versions } => {
            let versions = parse_versions(versions)?;
            print::print_versions(out, &versions, cfg.output)?;
            Ok(Outcome::Success)
        }
        Commands::Encode {
            major,
            minor,
            build,
        } => {
            let v = VersionNumber::new(u32::from(*major), u32::from(*minor), u32::from(*build));
            print::print_versions(out, &[v], cfg.output)?;
            Ok(Outcome::Success)
        }
        Commands::Features { version } => {
            let v = version.parse::<VersionNumber>()?;
            tracing::info!(target: "info::feature", version = %v, "listing feature gates");
            print::print_features(out, v, cfg.output)?;
            Ok(Outcome::Success)
        }
    }
}

/// Runs a parsed command line, writing results to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<Outcome> {
    if cli.version {
        out.write_all(version_banner().as_bytes())?;
        return Ok(Outcome::Success);
    }
    let Some(command) = &cli.command else {
        let help = cli_command().render_help();
        write!(out, "{help}")?;
        return Ok(Outcome::Success);
    };
    let cfg = config_from_cli(cli)?;
    with_config(&cfg, || run_command(command, &cfg, out))
}

fn report_error(e: &CompatError) -> i32 {
    eprintln!("{PROGRAM_NAME}: {e}");
    EXIT_ERROR
}

/// Parses `args`, runs the command against stdout and returns the exit code.
pub fn main_with_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = e.print();
            return code;
        }
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run(&cli, &mut out) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => report_error(&e),
    }
}
