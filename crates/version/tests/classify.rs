// crates/version/tests/classify.rs
use ndb_version::{
    Classifier, CompatibilityTier, PREPARE_COPY_FRAG, PREPARE_COPY_FRAG_V2_51,
    PREPARE_COPY_FRAG_V2_62, PREPARE_COPY_FRAG_V2_63, VersionNumber, classify,
};

const OWN: VersionNumber = VersionNumber::new(5, 1, 59);

fn tier(major: u32, minor: u32, build: u32) -> u8 {
    classify(VersionNumber::new(major, minor, build), OWN).as_u8()
}

#[test]
fn boundary_at_6_2() {
    assert_eq!(tier(6, 2, 8), 2);
    assert_eq!(tier(6, 2, 7), 1);
    assert_eq!(tier(6, 2, 1), 1);
    assert_eq!(tier(6, 2, 0), 0);
}

#[test]
fn boundary_at_6_3_never_unsupported() {
    assert_eq!(tier(6, 3, 6), 2);
    assert_eq!(tier(6, 3, 5), 1);
    for build in 0..=255 {
        assert_ne!(tier(6, 3, build), 0, "6.3.{build}");
    }
}

#[test]
fn other_major_6_lines_are_latest() {
    assert_eq!(tier(6, 4, 0), 2);
    assert_eq!(tier(6, 0, 0), 2);
    assert_eq!(tier(6, 1, 1), 2);
    assert_eq!(tier(7, 0, 0), 2);
    assert_eq!(tier(255, 2, 0), 2);
}

#[test]
fn boundary_at_5_1() {
    assert_eq!(tier(5, 1, 23), 2);
    assert_eq!(tier(5, 1, 22), 0);
    assert_eq!(tier(5, 1, 255), 2);
}

#[test]
fn older_lines_are_unsupported() {
    assert_eq!(tier(5, 0, 99), 0);
    assert_eq!(tier(4, 9, 9), 0);
    assert_eq!(tier(5, 2, 0), 0);
    assert_eq!(tier(0, 0, 0), 0);
}

#[test]
fn zero_version_is_unsupported() {
    assert_eq!(
        classify(VersionNumber::from_raw(0), OWN),
        CompatibilityTier::Unsupported
    );
}

#[test]
fn own_version_matches_even_below_thresholds() {
    let own = VersionNumber::new(5, 1, 22);
    assert_eq!(classify(own, own), CompatibilityTier::Latest);
    assert_eq!(
        classify(VersionNumber::new(5, 1, 21), own),
        CompatibilityTier::Unsupported
    );
}

#[test]
fn thresholds_classify_as_documented() {
    assert_eq!(classify(PREPARE_COPY_FRAG, OWN), CompatibilityTier::NoMaxPage);
    assert_eq!(classify(PREPARE_COPY_FRAG_V2_51, OWN), CompatibilityTier::Latest);
    assert_eq!(classify(PREPARE_COPY_FRAG_V2_62, OWN), CompatibilityTier::Latest);
    assert_eq!(classify(PREPARE_COPY_FRAG_V2_63, OWN), CompatibilityTier::Latest);
}

#[test]
fn classifier_matches_free_function() {
    let c = Classifier::new(OWN);
    assert_eq!(c.own(), OWN);
    for raw in [0u32, 0x050116, 0x050117, 0x060200, 0x060207, 0x060305, 0x060400] {
        let v = VersionNumber::from_raw(raw);
        assert_eq!(c.classify(v), classify(v, OWN));
    }
}

#[test]
fn classifier_emits_trace_event() {
    let sub = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(sub, || {
        assert!(tracing::enabled!(target: "debug::classify", tracing::Level::TRACE));
        let t = Classifier::new(OWN).classify(VersionNumber::new(6, 2, 8));
        assert_eq!(t, CompatibilityTier::Latest);
    });
}
