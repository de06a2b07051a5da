// tests/assess.rs
use ndb_compat::{
    Classifier, CompatConfig, CompatibilityTier, Feature, VersionNumber, assess,
    assess_with_config, parse_versions,
};
use tempfile::tempdir;

const OWN: VersionNumber = VersionNumber::new(5, 1, 59);

#[test]
fn report_carries_tier_and_features() {
    let r = assess(VersionNumber::new(6, 2, 7), &Classifier::new(OWN));
    assert_eq!(r.tier, CompatibilityTier::NoMaxPage);
    assert_eq!(r.tier_name, "no-max-page");
    assert!(r.features.contains(&Feature::PrepareCopyFrag));
    assert!(r.features.contains(&Feature::NodeVersionRep));
}

#[test]
fn assess_many_with_config() {
    let peers = parse_versions(["6.2.8", "6.2.7", "6.2.0", "5.1.59"]).unwrap();
    let cfg = CompatConfig::builder().own(OWN).quiet(true).build();
    let tiers: Vec<u8> = assess_with_config(&peers, &cfg)
        .unwrap()
        .iter()
        .map(|r| r.tier.as_u8())
        .collect();
    assert_eq!(tiers, vec![2, 1, 0, 2]);
}

#[test]
fn parse_versions_stops_at_first_error() {
    let err = parse_versions(["6.2.8", "6.2", "bogus"]).unwrap_err();
    assert_eq!(err.to_string(), "expected MAJOR.MINOR.BUILD, got '6.2'");
}

#[test]
fn log_file_captures_fallback_warning() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assess.log");
    let cfg = CompatConfig::builder()
        .own(OWN)
        .log_file(Some((path.clone(), Some("%l %v".to_string()))))
        .build();
    assess_with_config(&[VersionNumber::new(4, 1, 17)], &cfg).unwrap();
    let log = std::fs::read_to_string(path).unwrap();
    assert_eq!(log, "WARN 4.1.17\n");
}

#[test]
fn unwritable_log_file_is_an_error() {
    let dir = tempdir().unwrap();
    let cfg = CompatConfig::builder()
        .log_file(Some((dir.path().to_path_buf(), None)))
        .build();
    assert!(assess_with_config(&[OWN], &cfg).is_err());
}

#[test]
fn report_serializes() {
    let r = assess(VersionNumber::new(5, 1, 23), &Classifier::new(OWN));
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["tier"], 2);
    assert_eq!(v["peer"]["raw"], 0x050117);
    assert_eq!(v["features"][0], "rowid");
}
