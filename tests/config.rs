// tests/config.rs
use logging::{DebugFlag, InfoFlag, LogFormat};
use ndb_compat::{CompatConfig, OWN_VERSION, OutputFormat, VersionNumber};
use std::path::PathBuf;

#[test]
fn defaults_use_compiled_in_version() {
    let cfg = CompatConfig::default();
    assert_eq!(cfg.own, OWN_VERSION);
    assert_eq!(cfg.output, OutputFormat::Text);
    assert_eq!(cfg.log_format, LogFormat::Text);
    assert!(cfg.colored);
    assert!(!cfg.quiet);
}

#[test]
fn builder_sets_fields() {
    let cfg = CompatConfig::builder()
        .log_format(LogFormat::Json)
        .verbose(3)
        .info(vec![InfoFlag::Tier])
        .debug(vec![DebugFlag::Classify])
        .quiet(true)
        .log_file(Some((PathBuf::from("x.log"), None)))
        .colored(false)
        .timestamps(true)
        .own(VersionNumber::new(6, 3, 6))
        .output(OutputFormat::Json)
        .build();
    assert_eq!(cfg.log_format, LogFormat::Json);
    assert_eq!(cfg.verbose, 3);
    assert_eq!(cfg.info, vec![InfoFlag::Tier]);
    assert_eq!(cfg.debug, vec![DebugFlag::Classify]);
    assert!(cfg.quiet);
    assert!(cfg.log_file.is_some());
    assert!(!cfg.colored);
    assert!(cfg.timestamps);
    assert_eq!(cfg.own.raw(), 0x060306);
    assert_eq!(cfg.output, OutputFormat::Json);
}
