// src/lib.rs
//! Peer version assessment for the prepare-copy-fragment protocol.
//!
//! A node learns each peer's packed version number during the handshake and
//! needs to know which generation of the fragment-copy protocol to speak.
//! [`assess`] combines the tier classification with the feature gates that
//! the same version implies.
//!
//! ```
//! use ndb_compat::{Classifier, CompatibilityTier, VersionNumber, assess};
//!
//! let classifier = Classifier::new(VersionNumber::new(5, 1, 59));
//! let report = assess("6.2.7".parse().unwrap(), &classifier);
//! assert_eq!(report.tier, CompatibilityTier::NoMaxPage);
//! ```

use serde::Serialize;

pub mod config;
pub mod error;
pub mod run;

pub use config::{CompatConfig, CompatConfigBuilder, OutputFormat};
pub use error::{CompatError, Result};
pub use ndb_version::{
    Classifier, CompatibilityTier, Feature, OWN_STATUS, OWN_VERSION, ParseVersionError,
    VersionNumber, classify, own_version_string, supported_features,
};
pub use run::{assess_all, assess_with_config, with_config};

/// Outcome of assessing one peer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeerReport {
    pub peer: VersionNumber,
    pub tier: CompatibilityTier,
    pub tier_name: &'static str,
    pub features: Vec<Feature>,
}

pub fn assess(peer: VersionNumber, classifier: &Classifier) -> PeerReport {
    let tier = classifier.classify(peer);
    let features = supported_features(peer);
    tracing::info!(
        target: "info::tier",
        peer = %peer,
        tier = tier.as_u8(),
        "peer {peer} uses copy-fragment tier {tier}"
    );
    if !tier.supports_prepare_copy_frag() {
        tracing::warn!(
            peer = %peer,
            "peer {peer} lacks prepare-copy-fragment support; falling back to the baseline protocol"
        );
    }
    PeerReport {
        peer,
        tier,
        tier_name: tier.as_str(),
        features,
    }
}

/// Parses a list of textual versions, stopping at the first malformed one.
pub fn parse_versions<I, S>(inputs: I) -> Result<Vec<VersionNumber>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|s| {
            let s = s.as_ref();
            let v = s.parse::<VersionNumber>()?;
            tracing::trace!(target: "debug::parse", input = s, raw = v.raw(), "parsed version");
            Ok(v)
        })
        .collect()
}
