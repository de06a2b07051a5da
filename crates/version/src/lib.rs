// crates/version/src/lib.rs

pub mod classify;
pub mod features;
pub mod number;
pub mod tier;
pub mod versions;

pub use classify::{Classifier, check_prep_copy_frag_version, classify};
pub use features::{Feature, supported_features};
pub use number::{
    ParseVersionError, VersionNumber, get_build, get_major, get_minor, make_version,
    version_string,
};
pub use tier::{CompatibilityTier, UnknownTier};
pub use versions::{
    DICT_LOCK_5, DICT_LOCK_5_1, FRAGID, INCL_NODECONF_4, INCL_NODECONF_5, NODE_VERSION_REP,
    OWN_STATUS, OWN_VERSION, PREPARE_COPY_FRAG, PREPARE_COPY_FRAG_V2_51, PREPARE_COPY_FRAG_V2_62,
    PREPARE_COPY_FRAG_V2_63, QMGR_SINGLEUSER_5, ROWID, UPDATE_FRAG_DIST_KEY_50,
    UPDATE_FRAG_DIST_KEY_51, own_version, own_version_string,
};
