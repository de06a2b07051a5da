// crates/cli/src/version.rs
use ndb_version::{
    OWN_VERSION, PREPARE_COPY_FRAG, PREPARE_COPY_FRAG_V2_51, PREPARE_COPY_FRAG_V2_62,
    PREPARE_COPY_FRAG_V2_63, own_version_string,
};

pub const PROGRAM_NAME: &str = "ndb-compat";

pub fn render_version_lines() -> Vec<String> {
    vec![
        format!("{PROGRAM_NAME} {}", env!("CARGO_PKG_VERSION")),
        format!("own build: {} ({:#08x})", own_version_string(), OWN_VERSION),
        format!(
            "prepare-copy-frag: v1 from {PREPARE_COPY_FRAG}, v2 from {PREPARE_COPY_FRAG_V2_51} / \
             {PREPARE_COPY_FRAG_V2_62} / {PREPARE_COPY_FRAG_V2_63}"
        ),
        format!(
            "{} {}",
            option_env!("BUILD_REVISION").unwrap_or("unknown"),
            option_env!("OFFICIAL_BUILD").unwrap_or("unofficial")
        ),
    ]
}

pub fn version_banner() -> String {
    format!("{}\n", render_version_lines().join("\n"))
}
