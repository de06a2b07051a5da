// crates/version/src/classify.rs
use crate::number::VersionNumber;
use crate::tier::CompatibilityTier;
use crate::versions::{
    OWN_VERSION, PREPARE_COPY_FRAG, PREPARE_COPY_FRAG_V2_51, PREPARE_COPY_FRAG_V2_62,
    PREPARE_COPY_FRAG_V2_63,
};

/// Classifies which prepare-copy-fragment protocol `peer` understands.
///
/// `own` is the local build's version; an exact match is always
/// [`CompatibilityTier::Latest`]. The rules are evaluated in order and any
/// version they do not name falls through to
/// [`CompatibilityTier::Unsupported`].
pub const fn classify(peer: VersionNumber, own: VersionNumber) -> CompatibilityTier {
    let major = peer.major();
    let minor = peer.minor();
    let raw = peer.raw();

    if raw == own.raw() {
        return CompatibilityTier::Latest;
    }

    if major >= 6 {
        return match minor {
            2 => {
                if raw >= PREPARE_COPY_FRAG_V2_62.raw() {
                    CompatibilityTier::Latest
                } else if raw >= PREPARE_COPY_FRAG.raw() {
                    CompatibilityTier::NoMaxPage
                } else {
                    CompatibilityTier::Unsupported
                }
            }
            3 => {
                if raw >= PREPARE_COPY_FRAG_V2_63.raw() {
                    CompatibilityTier::Latest
                } else {
                    CompatibilityTier::NoMaxPage
                }
            }
            // untested newer lines are assumed current
            _ => CompatibilityTier::Latest,
        };
    }

    if major == 5 && minor == 1 && raw >= PREPARE_COPY_FRAG_V2_51.raw() {
        return CompatibilityTier::Latest;
    }

    CompatibilityTier::Unsupported
}

/// [`classify`] against the version this crate was built as.
pub const fn check_prep_copy_frag_version(peer: VersionNumber) -> CompatibilityTier {
    classify(peer, OWN_VERSION)
}

/// A classification baseline bound to one local build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    own: VersionNumber,
}

impl Classifier {
    pub const fn new(own: VersionNumber) -> Self {
        Self { own }
    }

    pub const fn own(&self) -> VersionNumber {
        self.own
    }

    pub fn classify(&self, peer: VersionNumber) -> CompatibilityTier {
        let tier = classify(peer, self.own);
        tracing::trace!(
            target: "debug::classify",
            peer = %peer,
            own = %self.own,
            tier = tier.as_u8(),
            "classified peer version"
        );
        tier
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(OWN_VERSION)
    }
}
