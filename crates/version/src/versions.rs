// crates/version/src/versions.rs
use crate::number::VersionNumber;

const fn v(major: u32, minor: u32, build: u32) -> VersionNumber {
    VersionNumber::new(major, minor, build)
}

pub const ROWID: VersionNumber = v(5, 1, 6);
pub const INCL_NODECONF_4: VersionNumber = v(4, 1, 17);
pub const INCL_NODECONF_5: VersionNumber = v(5, 0, 18);
pub const FRAGID: VersionNumber = v(5, 1, 6);
pub const DICT_LOCK_5: VersionNumber = v(5, 0, 23);
pub const DICT_LOCK_5_1: VersionNumber = v(5, 1, 12);

pub const UPDATE_FRAG_DIST_KEY_50: VersionNumber = v(5, 0, 26);
pub const UPDATE_FRAG_DIST_KEY_51: VersionNumber = v(5, 1, 12);

pub const QMGR_SINGLEUSER_5: VersionNumber = v(5, 0, 25);

pub const NODE_VERSION_REP: VersionNumber = v(6, 1, 1);

/// First release line carrying the prepare-copy-fragment protocol at all.
pub const PREPARE_COPY_FRAG: VersionNumber = v(6, 2, 1);
pub const PREPARE_COPY_FRAG_V2_51: VersionNumber = v(5, 1, 23);
pub const PREPARE_COPY_FRAG_V2_62: VersionNumber = v(6, 2, 8);
pub const PREPARE_COPY_FRAG_V2_63: VersionNumber = v(6, 3, 6);

mod own {
    include!(concat!(env!("OUT_DIR"), "/own_version.rs"));
}

pub use own::OWN_STATUS;

/// Version of the running build, fixed at compile time.
pub const OWN_VERSION: VersionNumber = v(own::OWN_MAJOR, own::OWN_MINOR, own::OWN_BUILD);

pub const fn own_version() -> VersionNumber {
    OWN_VERSION
}

pub fn own_version_string() -> String {
    crate::number::version_string(OWN_VERSION, OWN_STATUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_bit_exact() {
        assert_eq!(PREPARE_COPY_FRAG.raw(), 0x060201);
        assert_eq!(PREPARE_COPY_FRAG_V2_51.raw(), 0x050117);
        assert_eq!(PREPARE_COPY_FRAG_V2_62.raw(), 0x060208);
        assert_eq!(PREPARE_COPY_FRAG_V2_63.raw(), 0x060306);
    }

    #[test]
    fn own_version_string_uses_own_fields() {
        let s = own_version_string();
        assert!(s.starts_with(&format!("Version {}", OWN_VERSION)));
    }
}
