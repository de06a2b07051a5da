// crates/version/src/features.rs
use serde::Serialize;
use std::fmt;

use crate::number::VersionNumber;
use crate::versions::{
    DICT_LOCK_5, DICT_LOCK_5_1, FRAGID, INCL_NODECONF_4, INCL_NODECONF_5, NODE_VERSION_REP,
    PREPARE_COPY_FRAG, QMGR_SINGLEUSER_5, ROWID, UPDATE_FRAG_DIST_KEY_50, UPDATE_FRAG_DIST_KEY_51,
};

/// Node capabilities that were introduced at a known release point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Feature {
    #[serde(rename = "rowid")]
    RowId,
    #[serde(rename = "incl-nodeconf")]
    InclNodeConf,
    #[serde(rename = "fragid")]
    FragId,
    #[serde(rename = "dict-lock")]
    DictLock,
    #[serde(rename = "update-frag-dist-key")]
    UpdateFragDistKey,
    #[serde(rename = "qmgr-single-user")]
    QmgrSingleUser,
    #[serde(rename = "node-version-rep")]
    NodeVersionRep,
    #[serde(rename = "prepare-copy-frag")]
    PrepareCopyFrag,
}

impl Feature {
    pub const ALL: [Feature; 8] = [
        Feature::RowId,
        Feature::InclNodeConf,
        Feature::FragId,
        Feature::DictLock,
        Feature::UpdateFragDistKey,
        Feature::QmgrSingleUser,
        Feature::NodeVersionRep,
        Feature::PrepareCopyFrag,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Feature::RowId => "rowid",
            Feature::InclNodeConf => "incl-nodeconf",
            Feature::FragId => "fragid",
            Feature::DictLock => "dict-lock",
            Feature::UpdateFragDistKey => "update-frag-dist-key",
            Feature::QmgrSingleUser => "qmgr-single-user",
            Feature::NodeVersionRep => "node-version-rep",
            Feature::PrepareCopyFrag => "prepare-copy-frag",
        }
    }

    /// Ascending first-supporting builds, at most one per release line.
    pub fn thresholds(self) -> &'static [VersionNumber] {
        match self {
            Feature::RowId => &[ROWID],
            Feature::InclNodeConf => &[INCL_NODECONF_4, INCL_NODECONF_5],
            Feature::FragId => &[FRAGID],
            Feature::DictLock => &[DICT_LOCK_5, DICT_LOCK_5_1],
            Feature::UpdateFragDistKey => &[UPDATE_FRAG_DIST_KEY_50, UPDATE_FRAG_DIST_KEY_51],
            Feature::QmgrSingleUser => &[QMGR_SINGLEUSER_5],
            Feature::NodeVersionRep => &[NODE_VERSION_REP],
            Feature::PrepareCopyFrag => &[PREPARE_COPY_FRAG],
        }
    }

    /// Whether `version` carries this feature.
    ///
    /// The governing threshold is the newest one whose release line is not
    /// newer than the version's line. On that same line the build must reach
    /// the threshold; any strictly newer line inherits the feature.
    pub fn is_supported_by(self, version: VersionNumber) -> bool {
        let line = version.line();
        let governing = self
            .thresholds()
            .iter()
            .rev()
            .find(|t| t.line() <= line);
        match governing {
            Some(t) if t.line() == line => version.build() >= t.build(),
            Some(_) => true,
            None => false,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn supported_features(version: VersionNumber) -> Vec<Feature> {
    let features: Vec<Feature> = Feature::ALL
        .into_iter()
        .filter(|f| f.is_supported_by(version))
        .collect();
    tracing::trace!(
        target: "debug::feature",
        version = %version,
        count = features.len(),
        "resolved feature gates"
    );
    features
}
