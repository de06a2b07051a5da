// crates/cli/tests/run.rs
use clap::Parser;
use ndb_compat::{CompatError, OutputFormat, VersionNumber};
use ndb_compat_cli::{Cli, Outcome, config_from_cli, run, version_banner};

fn run_args(args: &[&str]) -> (Result<Outcome, CompatError>, String) {
    let cli = Cli::try_parse_from(std::iter::once("ndb-compat").chain(args.iter().copied()))
        .unwrap();
    let mut out = Vec::new();
    let res = run(&cli, &mut out);
    (res, String::from_utf8(out).unwrap())
}

#[test]
fn classify_6_3_line() {
    let (res, out) = run_args(&["-q", "classify", "--own", "5.1.59", "6.3.6", "6.3.5"]);
    assert_eq!(res.unwrap(), Outcome::Success);
    assert_eq!(
        out,
        "6.3.6\t0x060306\ttier 2 (latest)\n6.3.5\t0x060305\ttier 1 (no-max-page)\n"
    );
}

#[test]
fn classify_5_1_boundary() {
    let (_, out) = run_args(&["-q", "classify", "--own", "5.1.59", "5.1.23", "5.1.22"]);
    assert!(out.contains("5.1.23\t0x050117\ttier 2"));
    assert!(out.contains("5.1.22\t0x050116\ttier 0"));
}

#[test]
fn parse_error_surfaces() {
    let (res, out) = run_args(&["-q", "decode", "6.2.8", "nope"]);
    assert!(matches!(res, Err(CompatError::Parse(_))));
    assert!(out.is_empty());
}

#[test]
fn version_flag_prints_banner() {
    let (res, out) = run_args(&["--version"]);
    assert_eq!(res.unwrap(), Outcome::Success);
    assert_eq!(out, version_banner());
}

#[test]
fn no_command_prints_help() {
    let (res, out) = run_args(&[]);
    assert_eq!(res.unwrap(), Outcome::Success);
    assert!(out.contains("classify"));
}

#[test]
fn config_follows_global_flags() {
    let cli = Cli::try_parse_from([
        "ndb-compat",
        "classify",
        "-vv",
        "--no-color",
        "--output",
        "json",
        "--own",
        "6.2.8",
        "7.0.0",
    ])
    .unwrap();
    let cfg = config_from_cli(&cli).unwrap();
    assert_eq!(cfg.verbose, 2);
    assert!(!cfg.colored);
    assert_eq!(cfg.output, OutputFormat::Json);
    assert_eq!(cfg.own, VersionNumber::new(6, 2, 8));
}

#[test]
fn json_decode() {
    let (_, out) = run_args(&["-q", "--output", "json", "decode", "ndb-5.1.59"]);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v[0]["raw"], 0x05013B);
    assert_eq!(v[0]["minor"], 1);
}
